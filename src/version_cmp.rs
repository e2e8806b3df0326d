//! Pluggable version comparison policies
//!
//! The merge tie-break needs an ordering over version strings. The
//! historical behavior is plain lexicographic comparison, which is kept
//! as the default, including its known weakness: `"1.9"` sorts after
//! `"1.10"`. A semver-backed policy is available for callers who want
//! numeric ordering instead.

use semver::Version;
use std::cmp::Ordering;

/// Ordering policy over version strings
pub trait VersionComparator: Send + Sync {
    /// Compares two version strings
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Plain string comparison. Matches the historical issue-merge behavior;
/// misorders versions where component widths differ ("1.9" vs "1.10").
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicographic;

impl VersionComparator for Lexicographic {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Semver-based comparison with lenient parsing of short versions like
/// "1.9". Falls back to lexicographic ordering when either side cannot
/// be parsed as a version at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Semantic;

impl VersionComparator for Semantic {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (parse_lenient(a), parse_lenient(b)) {
            (Some(version_a), Some(version_b)) => version_a.cmp(&version_b),
            _ => a.cmp(b),
        }
    }
}

/// Parse a version string, padding missing minor/patch components
fn parse_lenient(version: &str) -> Option<Version> {
    let version = version.trim().trim_start_matches('v');
    if let Ok(parsed) = Version::parse(version) {
        return Some(parsed);
    }

    let (core, rest) = match version.find(['-', '+']) {
        Some(idx) => (&version[..idx], &version[idx..]),
        None => (version, ""),
    };
    let padded = match core.matches('.').count() {
        0 => format!("{}.0.0{}", core, rest),
        1 => format!("{}.0{}", core, rest),
        _ => return None,
    };
    Version::parse(&padded).ok()
}
