//! Issue tracker client abstraction
//!
//! The notifier needs exactly two tracker operations: list the open
//! dependency-update issues and create a new one. Everything else the
//! tracker does stays behind this seam, so the GitLab implementation
//! can be swapped out in tests (or for another tracker) without
//! touching the merge or build logic.

mod client;
mod gitlab;

pub use client::HttpClient;
pub use gitlab::GitlabTracker;

use crate::error::TrackerError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for creating a tracker issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    /// Rendered issue title
    pub title: String,
    /// Rendered markdown body
    pub description: String,
    /// Labels to attach
    pub labels: Vec<String>,
}

/// An issue as returned by the tracker
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerIssue {
    /// Issue title
    #[serde(default)]
    pub title: String,
    /// Issue body text; the decoder re-parses this
    #[serde(default)]
    pub description: String,
    /// Attached labels
    #[serde(default)]
    pub labels: Vec<String>,
    /// Browser URL, assigned by the tracker on creation
    #[serde(default)]
    pub web_url: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Minimal tracker contract used by the notifier
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Human-readable tracker name for log and error messages
    fn tracker_name(&self) -> &'static str;

    /// Lists the open dependency-update issues
    async fn list_issues(&self) -> Result<Vec<TrackerIssue>, TrackerError>;

    /// Creates an issue and returns it with its tracker-assigned fields
    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssue, TrackerError>;
}

/// Tracker stand-in for offline dry runs: no existing issues, creation
/// refused.
pub struct OfflineTracker;

#[async_trait]
impl IssueTracker for OfflineTracker {
    fn tracker_name(&self) -> &'static str {
        "offline"
    }

    async fn list_issues(&self) -> Result<Vec<TrackerIssue>, TrackerError> {
        Ok(Vec::new())
    }

    async fn create_issue(&self, _issue: &NewIssue) -> Result<TrackerIssue, TrackerError> {
        Err(TrackerError::network_error(
            "create issue",
            self.tracker_name(),
            "issue creation is not available in offline mode",
        ))
    }
}
