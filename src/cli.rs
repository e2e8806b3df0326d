//! CLI argument parsing module for depnotify

use clap::Parser;
use std::path::PathBuf;

/// GitLab issue notifier for outdated Gradle dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depnotify",
    version,
    about = "Files a deduplicated GitLab issue for outdated dependencies"
)]
pub struct CliArgs {
    /// Path to the dependency update report JSON
    #[arg(default_value = "build/dependencyUpdates/report.json")]
    pub report: PathBuf,

    // Tracker connection
    /// GitLab base URL, e.g. https://gitlab.com
    #[arg(long)]
    pub gitlab_url: Option<String>,

    /// GitLab project id
    #[arg(long)]
    pub project_id: Option<String>,

    /// GitLab access token
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    // Issue templates
    /// Issue title template; %count is replaced by the update count
    #[arg(long)]
    pub title: Option<String>,

    /// Comma-separated issue labels
    #[arg(long)]
    pub label: Option<String>,

    /// Path to a config file (default: ./depnotify.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    // Behavior
    /// Compare versions semantically instead of lexicographically
    #[arg(long)]
    pub semver_compare: bool,

    /// Dry run mode - show the issue that would be filed without creating it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Output options
    /// Output the run result in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}
