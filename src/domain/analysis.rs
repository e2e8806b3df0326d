//! Per-run dependency analysis aggregate

use super::Dependency;
use serde::{Deserialize, Serialize};

/// The set of outdated dependencies from one analysis.
///
/// The count is derived from the list length rather than stored, so it
/// can never drift out of sync after a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outdated {
    /// Outdated dependencies, in report order
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Outdated {
    /// Number of outdated dependencies
    pub fn count(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if no outdated dependencies are known
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// One build tool version slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolVersion {
    /// Version string, empty when the report has no value for the slot
    #[serde(default)]
    pub version: String,
    /// Whether this slot represents an upgrade over the running version
    #[serde(default)]
    pub update_available: bool,
}

impl ToolVersion {
    /// Creates a version slot
    pub fn new(version: impl Into<String>, update_available: bool) -> Self {
        Self {
            version: version.into(),
            update_available,
        }
    }

    /// True when this slot holds an upgrade with a usable version string
    pub fn is_usable_update(&self) -> bool {
        self.update_available && !self.version.is_empty()
    }
}

/// Build tool (Gradle) update status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildToolStatus {
    /// Currently running version
    #[serde(default)]
    pub running: ToolVersion,
    /// Latest stable version, when the report knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<ToolVersion>,
    /// Latest release candidate, when the report knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_candidate: Option<ToolVersion>,
}

impl BuildToolStatus {
    /// True when a stable upgrade is known
    pub fn has_current_version_update(&self) -> bool {
        self.current.as_ref().is_some_and(|v| v.update_available)
    }

    /// True when a release-candidate upgrade is known
    pub fn has_release_candidate_version_update(&self) -> bool {
        self.release_candidate
            .as_ref()
            .is_some_and(|v| v.update_available)
    }

    /// True when any build tool upgrade is known
    pub fn is_update_available(&self) -> bool {
        self.has_current_version_update() || self.has_release_candidate_version_update()
    }
}

/// Aggregate of everything one notification run knows: the outdated
/// dependency set plus the build tool status. Built fresh from the
/// report, reconstructed (lossily) from each existing tracker issue,
/// then folded into a single consolidated analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyAnalysis {
    /// Outdated dependencies
    #[serde(default)]
    pub outdated: Outdated,
    /// Build tool update status
    #[serde(default)]
    pub build_tool: BuildToolStatus,
}

impl DependencyAnalysis {
    /// True when neither a dependency nor a build tool update is known
    pub fn is_empty(&self) -> bool {
        self.outdated.is_empty() && !self.build_tool.is_update_available()
    }
}
