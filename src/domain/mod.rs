//! Core domain models for depnotify
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency and available-release structures
//! - The outdated-dependency set with its derived count
//! - Build tool (Gradle) update status
//! - The per-run dependency analysis aggregate

mod analysis;
mod dependency;

pub use analysis::{BuildToolStatus, DependencyAnalysis, Outdated, ToolVersion};
pub use dependency::{AvailableDependency, Dependency};
