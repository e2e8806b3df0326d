//! Issue decision gate and payload builder
//!
//! Decides whether a merged analysis warrants a new tracker issue and,
//! if so, renders the title, markdown body and label set from the
//! configured templates.

use crate::codec::{BUILD_TOOL_NAME, RC_MARKER};
use crate::domain::{BuildToolStatus, DependencyAnalysis};
use crate::error::ConfigError;
use crate::tracker::NewIssue;

/// Placeholder in the title template replaced by the update count
pub const COUNT_PLACEHOLDER: &str = "%count";

/// Validated issue templates
#[derive(Debug, Clone)]
pub struct IssueTemplates {
    title: String,
    label: String,
}

impl IssueTemplates {
    /// Validates and wraps the configured templates. The title must
    /// contain the count placeholder; the label list must be non-empty.
    pub fn new(title: impl Into<String>, label: impl Into<String>) -> Result<Self, ConfigError> {
        let title = title.into();
        let label = label.into();

        if title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if !title.contains(COUNT_PLACEHOLDER) {
            return Err(ConfigError::MissingCountPlaceholder { template: title });
        }
        if label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        Ok(Self { title, label })
    }
}

/// Returns true when the merged analysis warrants filing an issue
pub fn should_notify(analysis: &DependencyAnalysis) -> bool {
    analysis.outdated.count() > 0 || analysis.build_tool.is_update_available()
}

/// Builds the issue payload for a merged analysis.
///
/// Returns `None` when nothing renders to a line, which can happen even
/// after a positive [`should_notify`] if the build tool update carries
/// only empty version strings.
pub fn build_issue(analysis: &DependencyAnalysis, templates: &IssueTemplates) -> Option<NewIssue> {
    let dependency_lines = dependency_lines(analysis);
    let build_tool_line = build_tool_line(&analysis.build_tool);

    if dependency_lines.is_empty() && build_tool_line.is_none() {
        return None;
    }

    let count = dependency_lines.len() + usize::from(build_tool_line.is_some());
    let title = templates
        .title
        .replace(COUNT_PLACEHOLDER, &count.to_string());

    let mut description = dependency_lines.join("\n");
    if let Some(line) = build_tool_line {
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str(&line);
    }

    let labels = templates.label.split(',').map(str::to_string).collect();

    Some(NewIssue {
        title,
        description,
        labels,
    })
}

fn dependency_lines(analysis: &DependencyAnalysis) -> Vec<String> {
    analysis
        .outdated
        .dependencies
        .iter()
        .map(|dependency| {
            let line = format!("- [ ] `{}`", dependency.issue_representation());
            match dependency.project_url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => format!("{} - [{}]({})", line, url, url),
                None => line,
            }
        })
        .collect()
}

fn build_tool_line(build_tool: &BuildToolStatus) -> Option<String> {
    if !build_tool.is_update_available() {
        return None;
    }

    // stable wins over the release candidate when both are known
    let new_version = if build_tool.has_current_version_update() {
        build_tool
            .current
            .as_ref()
            .map(|current| current.version.clone())
            .unwrap_or_default()
    } else if build_tool.has_release_candidate_version_update() {
        match build_tool.release_candidate.as_ref() {
            Some(rc) if !rc.version.is_empty() => format!("{} {}", rc.version, RC_MARKER),
            _ => String::new(),
        }
    } else {
        String::new()
    };

    if new_version.is_empty() {
        return None;
    }

    Some(format!(
        "- [ ] {} `{}` -> `{}`",
        BUILD_TOOL_NAME, build_tool.running.version, new_version
    ))
}
