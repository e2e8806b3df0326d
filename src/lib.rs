//! depnotify - dependency update issue notifier library
//!
//! This library provides the core functionality for turning a Gradle
//! versions-plugin report into a deduplicated GitLab issue:
//! - decoding previously filed issue bodies back into structured records
//! - merging analyses with a version tie-break
//! - building the issue payload from configured templates

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod issue;
pub mod merge;
pub mod notifier;
pub mod report;
pub mod tracker;
pub mod version_cmp;
