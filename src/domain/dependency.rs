//! Outdated dependency structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// The newest releases known for a dependency, one per release channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableDependency {
    /// Latest stable release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Latest milestone build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    /// Latest integration build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
}

impl AvailableDependency {
    /// Creates an available entry with only the release channel set
    pub fn release(version: impl Into<String>) -> Self {
        Self {
            release: Some(version.into()),
            milestone: None,
            integration: None,
        }
    }

    /// Returns the proposed upgrade target, preferring release over
    /// milestone over integration. Empty string if none is known.
    pub fn new_release(&self) -> &str {
        self.release
            .as_deref()
            .or(self.milestone.as_deref())
            .or(self.integration.as_deref())
            .unwrap_or("")
    }
}

/// An outdated project dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Group/organization coordinate
    pub group: String,
    /// Artifact name
    pub name: String,
    /// Currently pinned version
    pub version: String,
    /// Newest known releases
    #[serde(default)]
    pub available: AvailableDependency,
    /// Project homepage, when the report knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
}

impl Dependency {
    /// Creates a new outdated dependency with a stable release target
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            available: AvailableDependency::release(release),
            project_url: None,
        }
    }

    /// Sets the project URL (builder pattern)
    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    /// Returns true when both dependencies refer to the same artifact.
    /// Identity is `(group, name)`; version is deliberately excluded so
    /// that two records for the same artifact at different versions can
    /// be compared during a merge.
    pub fn same_artifact(&self, other: &Dependency) -> bool {
        self.group == other.group && self.name == other.name
    }

    /// Returns true if a project URL is known
    pub fn has_project_url(&self) -> bool {
        self.project_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Canonical `group:name:(version -> newRelease)` form used both to
    /// render issue lines and to re-parse them
    pub fn issue_representation(&self) -> String {
        format!(
            "{}:{}:({} -> {})",
            self.group,
            self.name,
            self.version,
            self.available.new_release()
        )
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issue_representation())
    }
}
