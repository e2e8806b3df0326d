//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReportError: Issues with the dependency report file
//! - TrackerError: Issues with the issue tracker API
//! - ConfigError: Issues with notifier configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dependency report related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Issue tracker related errors
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the dependency report file
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file not found
    #[error("dependency report not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read report file
    #[error("failed to read dependency report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse dependency report {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to issue tracker communication
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Network request failed
    #[error("failed to {operation} on {tracker}: {message}")]
    NetworkError {
        operation: String,
        tracker: String,
        message: String,
    },

    /// Tracker rejected the request
    #[error("{tracker} returned HTTP {status} for {operation}")]
    ApiError {
        operation: String,
        tracker: String,
        status: u16,
    },

    /// Authentication failure
    #[error("authentication failed for {tracker}: {message}")]
    AuthenticationError { tracker: String, message: String },

    /// Invalid response body
    #[error("invalid response from {tracker} for {operation}: {message}")]
    InvalidResponse {
        operation: String,
        tracker: String,
        message: String,
    },
}

/// Errors related to notifier configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Issue title template is missing or empty
    #[error("issue title template must not be empty")]
    EmptyTitle,

    /// Issue title template lacks the count placeholder
    #[error("issue title template '{template}' does not contain '%count'")]
    MissingCountPlaceholder { template: String },

    /// Label list is missing or empty
    #[error("issue label list must not be empty")]
    EmptyLabel,

    /// A required connection setting is missing
    #[error("missing required setting '{name}': {message}")]
    MissingSetting { name: String, message: String },

    /// Config file could not be parsed
    #[error("failed to parse config file {path}: {message}")]
    FileParseError { path: PathBuf, message: String },
}

impl ReportError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ReportError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReportError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl TrackerError {
    /// Creates a new NetworkError
    pub fn network_error(
        operation: impl Into<String>,
        tracker: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        TrackerError::NetworkError {
            operation: operation.into(),
            tracker: tracker.into(),
            message: message.into(),
        }
    }

    /// Creates a new ApiError
    pub fn api_error(
        operation: impl Into<String>,
        tracker: impl Into<String>,
        status: u16,
    ) -> Self {
        TrackerError::ApiError {
            operation: operation.into(),
            tracker: tracker.into(),
            status,
        }
    }

    /// Creates a new AuthenticationError
    pub fn authentication_error(tracker: impl Into<String>, message: impl Into<String>) -> Self {
        TrackerError::AuthenticationError {
            tracker: tracker.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        operation: impl Into<String>,
        tracker: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        TrackerError::InvalidResponse {
            operation: operation.into(),
            tracker: tracker.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new MissingSetting error
    pub fn missing_setting(name: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::MissingSetting {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a new FileParseError
    pub fn file_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::FileParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_not_found() {
        let err = ReportError::not_found("/path/to/report.json");
        let msg = format!("{}", err);
        assert!(msg.contains("dependency report not found"));
        assert!(msg.contains("report.json"));
    }

    #[test]
    fn test_report_error_parse() {
        let err = ReportError::parse_error("/path/to/report.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_tracker_error_network() {
        let err = TrackerError::network_error("list issues", "GitLab", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to list issues"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_tracker_error_api() {
        let err = TrackerError::api_error("create issue", "GitLab", 403);
        let msg = format!("{}", err);
        assert!(msg.contains("HTTP 403"));
        assert!(msg.contains("create issue"));
    }

    #[test]
    fn test_tracker_error_authentication() {
        let err = TrackerError::authentication_error("GitLab", "invalid token");
        let msg = format!("{}", err);
        assert!(msg.contains("authentication failed"));
        assert!(msg.contains("invalid token"));
    }

    #[test]
    fn test_config_error_empty_title() {
        let err = ConfigError::EmptyTitle;
        let msg = format!("{}", err);
        assert!(msg.contains("title template"));
    }

    #[test]
    fn test_config_error_missing_placeholder() {
        let err = ConfigError::MissingCountPlaceholder {
            template: "Updates available".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("%count"));
        assert!(msg.contains("Updates available"));
    }

    #[test]
    fn test_config_error_missing_setting() {
        let err = ConfigError::missing_setting("token", "set --token or GITLAB_TOKEN");
        let msg = format!("{}", err);
        assert!(msg.contains("missing required setting 'token'"));
    }

    #[test]
    fn test_app_error_from_report_error() {
        let report_err = ReportError::not_found("/path");
        let app_err: AppError = report_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("dependency report not found"));
    }

    #[test]
    fn test_app_error_from_tracker_error() {
        let tracker_err = TrackerError::api_error("list issues", "GitLab", 500);
        let app_err: AppError = tracker_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::EmptyLabel;
        let app_err: AppError = config_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("label list"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ReportError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
