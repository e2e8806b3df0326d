//! depnotify - dependency update issue notifier CLI
//!
//! Reads a Gradle versions-plugin JSON report, merges it with the open
//! GitLab dependency-update issues and files one consolidated issue.

use clap::Parser;
use colored::Colorize;
use depnotify::cli::CliArgs;
use depnotify::config::Settings;
use depnotify::issue::IssueTemplates;
use depnotify::notifier::{Notifier, RunOutcome};
use depnotify::report;
use depnotify::tracker::{GitlabTracker, HttpClient, IssueTracker, OfflineTracker};
use depnotify::version_cmp::{Lexicographic, Semantic, VersionComparator};
use serde_json::json;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::resolve(&args)?;

    if args.verbose {
        eprintln!("depnotify v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Report: {}", settings.report.display());
        if settings.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let fresh = report::load(&settings.report)?;
    let templates = IssueTemplates::new(settings.title.clone(), settings.label.clone())?;

    let tracker: Box<dyn IssueTracker> = if settings.dry_run && !settings.has_connection() {
        // offline preview: no baseline fetch, no creation
        if args.verbose {
            eprintln!("No tracker connection configured, previewing offline");
        }
        Box::new(OfflineTracker)
    } else {
        let (url, project_id, token) = settings.connection()?;
        Box::new(GitlabTracker::new(
            HttpClient::new()?,
            url,
            project_id,
            token,
            settings.label.clone(),
        ))
    };

    let comparator: Box<dyn VersionComparator> = if settings.semver_compare {
        Box::new(Semantic)
    } else {
        Box::new(Lexicographic)
    };

    let notifier = Notifier::new(tracker, templates, comparator, settings.dry_run);
    let outcome = notifier.run(fresh).await?;

    print_outcome(&outcome, args.json, args.quiet);
    Ok(ExitCode::SUCCESS)
}

fn print_outcome(outcome: &RunOutcome, as_json: bool, quiet: bool) {
    if as_json {
        let value = match outcome {
            RunOutcome::NoUpdates => json!({ "action": "none" }),
            RunOutcome::Created { web_url, issue } => json!({
                "action": "created",
                "web_url": web_url,
                "issue": issue,
            }),
            RunOutcome::DryRun { issue } => json!({
                "action": "dry-run",
                "issue": issue,
            }),
        };
        println!("{}", value);
        return;
    }

    match outcome {
        RunOutcome::NoUpdates => {
            if !quiet {
                println!("{}", "No dependency updates to report".dimmed());
            }
        }
        RunOutcome::Created { web_url, issue } => {
            println!(
                "{} {}",
                "Created dependency update issue:".green(),
                web_url
            );
            if !quiet {
                println!("  {}", issue.title);
            }
        }
        RunOutcome::DryRun { issue } => {
            println!("{}", "Dry run - would create issue:".yellow());
            println!("  title:  {}", issue.title);
            println!("  labels: {}", issue.labels.join(","));
            println!();
            println!("{}", issue.description);
        }
    }
}
