//! GitLab issue tracker implementation
//!
//! Talks to the GitLab v4 REST API with a project access token:
//! - `GET  /api/v4/projects/:id/issues?state=opened&labels=...`
//! - `POST /api/v4/projects/:id/issues`
//!
//! Any non-success response is fatal for the run.

use crate::error::TrackerError;
use crate::tracker::{HttpClient, IssueTracker, NewIssue, TrackerIssue};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

/// Token header understood by GitLab
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// GitLab tracker client for one project
pub struct GitlabTracker {
    client: HttpClient,
    base_url: String,
    project_id: String,
    token: String,
    labels: String,
}

/// Issue creation payload in GitLab's shape: labels travel as one
/// comma-separated string
#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    description: &'a str,
    labels: String,
}

impl GitlabTracker {
    /// Creates a tracker client for `base_url` (e.g. `https://gitlab.com`)
    /// and the given project. `labels` filters the listed issues so only
    /// previously filed dependency-update issues are folded in.
    pub fn new(
        client: HttpClient,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        token: impl Into<String>,
        labels: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            token: token.into(),
            labels: labels.into(),
        }
    }

    fn issues_url(&self) -> String {
        format!(
            "{}/api/v4/projects/{}/issues",
            self.base_url, self.project_id
        )
    }

    fn check_status(&self, operation: &str, status: StatusCode) -> Result<(), TrackerError> {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TrackerError::authentication_error(
                self.tracker_name(),
                format!("HTTP {} for {}", status.as_u16(), operation),
            ));
        }
        if !status.is_success() {
            return Err(TrackerError::api_error(
                operation,
                self.tracker_name(),
                status.as_u16(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl IssueTracker for GitlabTracker {
    fn tracker_name(&self) -> &'static str {
        "GitLab"
    }

    async fn list_issues(&self) -> Result<Vec<TrackerIssue>, TrackerError> {
        let operation = "list issues";
        let response = self
            .client
            .inner()
            .get(self.issues_url())
            .header(TOKEN_HEADER, &self.token)
            .query(&[("state", "opened"), ("labels", self.labels.as_str())])
            .send()
            .await
            .map_err(|e| {
                TrackerError::network_error(operation, self.tracker_name(), e.to_string())
            })?;

        self.check_status(operation, response.status())?;

        response.json::<Vec<TrackerIssue>>().await.map_err(|e| {
            TrackerError::invalid_response(operation, self.tracker_name(), e.to_string())
        })
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssue, TrackerError> {
        let operation = "create issue";
        let payload = CreateIssueRequest {
            title: &issue.title,
            description: &issue.description,
            labels: issue.labels.join(","),
        };

        let response = self
            .client
            .inner()
            .post(self.issues_url())
            .header(TOKEN_HEADER, &self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                TrackerError::network_error(operation, self.tracker_name(), e.to_string())
            })?;

        self.check_status(operation, response.status())?;

        response.json::<TrackerIssue>().await.map_err(|e| {
            TrackerError::invalid_response(operation, self.tracker_name(), e.to_string())
        })
    }
}
