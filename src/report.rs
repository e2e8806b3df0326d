//! Dependency report ingestion
//!
//! Reads the JSON report produced by the Gradle versions plugin and
//! maps it into the internal [`DependencyAnalysis`]. A missing or
//! malformed report fails the run before any tracker call is made.

use crate::domain::{
    AvailableDependency, BuildToolStatus, DependencyAnalysis, Dependency, Outdated, ToolVersion,
};
use crate::error::ReportError;
use serde::Deserialize;
use std::path::Path;

/// Top-level shape of the versions-plugin report; sections the notifier
/// does not use (current, exceeded, unresolved) are ignored
#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    outdated: RawOutdated,
    #[serde(default)]
    gradle: Option<RawGradle>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutdated {
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    #[serde(default)]
    group: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    available: RawAvailable,
    #[serde(rename = "projectUrl", default)]
    project_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAvailable {
    release: Option<String>,
    milestone: Option<String>,
    integration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGradle {
    #[serde(default)]
    enabled: bool,
    running: Option<RawGradleVersion>,
    current: Option<RawGradleVersion>,
    #[serde(rename = "releaseCandidate")]
    release_candidate: Option<RawGradleVersion>,
}

#[derive(Debug, Deserialize)]
struct RawGradleVersion {
    #[serde(default)]
    version: String,
    #[serde(rename = "isUpdateAvailable", default)]
    is_update_available: bool,
}

/// Loads and parses the report file
pub fn load(path: &Path) -> Result<DependencyAnalysis, ReportError> {
    if !path.exists() {
        return Err(ReportError::not_found(path));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ReportError::read_error(path, e))?;
    parse(&content).map_err(|e| ReportError::parse_error(path, e.to_string()))
}

/// Parses report JSON text
fn parse(content: &str) -> Result<DependencyAnalysis, serde_json::Error> {
    let raw: RawReport = serde_json::from_str(content)?;

    let dependencies = raw
        .outdated
        .dependencies
        .into_iter()
        .map(|dep| Dependency {
            group: dep.group,
            name: dep.name,
            version: dep.version,
            available: AvailableDependency {
                release: dep.available.release,
                milestone: dep.available.milestone,
                integration: dep.available.integration,
            },
            project_url: dep.project_url.filter(|url| !url.is_empty()),
        })
        .collect();

    let build_tool = raw
        .gradle
        .filter(|gradle| gradle.enabled)
        .map(|gradle| BuildToolStatus {
            running: gradle
                .running
                .map(|v| ToolVersion::new(v.version, v.is_update_available))
                .unwrap_or_default(),
            current: gradle
                .current
                .map(|v| ToolVersion::new(v.version, v.is_update_available)),
            release_candidate: gradle
                .release_candidate
                .map(|v| ToolVersion::new(v.version, v.is_update_available)),
        })
        .unwrap_or_default();

    Ok(DependencyAnalysis {
        outdated: Outdated { dependencies },
        build_tool,
    })
}
