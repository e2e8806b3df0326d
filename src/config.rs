//! Notifier configuration
//!
//! Settings are layered: CLI flags win over values from an optional
//! `depnotify.toml` config file, which wins over built-in defaults.
//! Connection settings are only required for runs that may write to
//! the tracker; an offline dry run works without them.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default issue title template
pub const DEFAULT_TITLE: &str = "Found %count outdated dependencies";

/// Default issue label
pub const DEFAULT_LABEL: &str = "dependencies";

/// Default config file looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "depnotify.toml";

/// Optional config file contents
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    gitlab_url: Option<String>,
    project_id: Option<String>,
    token: Option<String>,
    title: Option<String>,
    label: Option<String>,
    semver_compare: Option<bool>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::file_parse_error(path, e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::file_parse_error(path, e.to_string()))
    }
}

/// Fully resolved run settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the dependency report
    pub report: PathBuf,
    /// GitLab base URL
    pub gitlab_url: Option<String>,
    /// GitLab project id
    pub project_id: Option<String>,
    /// GitLab access token
    pub token: Option<String>,
    /// Issue title template with the %count placeholder
    pub title: String,
    /// Comma-separated issue labels
    pub label: String,
    /// Use semantic version comparison in the merge tie-break
    pub semver_compare: bool,
    /// Dry run: never create an issue
    pub dry_run: bool,
}

impl Settings {
    /// Resolves settings from CLI arguments and the optional config file
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = Self::load_file(args)?;

        Ok(Self {
            report: args.report.clone(),
            gitlab_url: args.gitlab_url.clone().or(file.gitlab_url),
            project_id: args.project_id.clone().or(file.project_id),
            token: args.token.clone().or(file.token),
            title: args
                .title
                .clone()
                .or(file.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            label: args
                .label
                .clone()
                .or(file.label)
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            semver_compare: args.semver_compare || file.semver_compare.unwrap_or(false),
            dry_run: args.dry_run,
        })
    }

    fn load_file(args: &CliArgs) -> Result<FileConfig, ConfigError> {
        match &args.config {
            // an explicitly named config file must exist
            Some(path) => FileConfig::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    FileConfig::load(default)
                } else {
                    Ok(FileConfig::default())
                }
            }
        }
    }

    /// True when all tracker connection settings are present
    pub fn has_connection(&self) -> bool {
        self.connection().is_ok()
    }

    /// Returns the tracker connection settings, or the first missing one
    pub fn connection(&self) -> Result<(&str, &str, &str), ConfigError> {
        let url = self
            .gitlab_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfigError::missing_setting("gitlab_url", "set --gitlab-url or the config file")
            })?;
        let project_id = self
            .project_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfigError::missing_setting("project_id", "set --project-id or the config file")
            })?;
        let token = self
            .token
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfigError::missing_setting("token", "set --token or the GITLAB_TOKEN env var")
            })?;
        Ok((url, project_id, token))
    }
}
