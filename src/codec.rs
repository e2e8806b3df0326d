//! Lossy decoder from issue body text back into a dependency analysis
//!
//! Previously filed issues are the only record of what has already been
//! reported, so their rendered bodies are re-parsed into structured
//! records before merging. Two line grammars exist:
//!
//! - build tool line: ``- [ ] Gradle `6.0` -> `6.5` ``
//! - dependency line: ``- [ ] `group:name:(1.0 -> 2.0)` ``
//!
//! Lines matching neither grammar are silently skipped. Project URLs
//! and checkbox state are not recoverable from text; that loss is by
//! design, the merge only needs coordinates and versions.

use crate::domain::{BuildToolStatus, DependencyAnalysis, Dependency, Outdated, ToolVersion};
use regex::Regex;
use std::sync::LazyLock;

/// Display name of the build tool, used as the line marker token
pub const BUILD_TOOL_NAME: &str = "Gradle";

/// Marker distinguishing release-candidate build tool lines
pub const RC_MARKER: &str = "(RC)";

// Backtick-quoted running and proposed versions joined by an arrow
static BUILD_TOOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)` -> `([^`]+)`").unwrap());

// List item with a backtick-quoted `group:name:(version -> newVersion)`;
// greedy first group mirrors the historical split at the last coordinate colon
static DEPENDENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-.*`([^`]+):([^`]+):\(([^`]+) -> ([^`]+)\)`").unwrap());

/// Decodes an issue body into a dependency analysis.
///
/// Never fails: unparseable lines are skipped.
pub fn decode(text: &str) -> DependencyAnalysis {
    let mut outdated = Outdated::default();
    let mut build_tool = BuildToolStatus::default();

    for line in text.lines().filter(|line| !line.is_empty()) {
        if line.contains(BUILD_TOOL_NAME) {
            decode_build_tool_line(&mut build_tool, line);
        } else {
            decode_dependency_line(&mut outdated, line);
        }
    }

    DependencyAnalysis {
        outdated,
        build_tool,
    }
}

fn decode_build_tool_line(build_tool: &mut BuildToolStatus, line: &str) {
    let Some(captures) = BUILD_TOOL_RE.captures(line) else {
        return;
    };

    build_tool.running = ToolVersion::new(&captures[1], false);

    let proposed = &captures[2];
    if line.contains(RC_MARKER) {
        let version = proposed
            .strip_suffix(RC_MARKER)
            .unwrap_or(proposed)
            .trim_end();
        build_tool.release_candidate = Some(ToolVersion::new(version, true));
    } else {
        build_tool.current = Some(ToolVersion::new(proposed, true));
    }
}

fn decode_dependency_line(outdated: &mut Outdated, line: &str) {
    let Some(captures) = DEPENDENCY_RE.captures(line) else {
        return;
    };

    outdated.dependencies.push(Dependency::new(
        &captures[1],
        &captures[2],
        &captures[3],
        &captures[4],
    ));
}
