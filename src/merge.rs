//! Merging of dependency analyses across issues and the fresh report
//!
//! Every open tracker issue decodes to one analysis; those are folded
//! pairwise and the fresh report is merged last, so it wins all ties.
//! After a merge, exactly one record survives per `(group, name)`
//! identity: whichever side knows the further-ahead upgrade target,
//! per the configured version comparator.

use crate::domain::DependencyAnalysis;
use crate::version_cmp::VersionComparator;
use std::cmp::Ordering;

/// Merges two analyses. `incoming` is the newer side and wins on equal
/// upgrade targets; `existing` entries survive only when they know a
/// strictly newer available release, or when `incoming` has no record
/// for the artifact at all.
pub fn merge(
    existing: DependencyAnalysis,
    incoming: DependencyAnalysis,
    comparator: &dyn VersionComparator,
) -> DependencyAnalysis {
    let mut merged = incoming;

    for dependency in existing.outdated.dependencies {
        let candidate = merged
            .outdated
            .dependencies
            .iter_mut()
            .find(|other| other.same_artifact(&dependency));

        match candidate {
            Some(candidate) => {
                let ordering = comparator.compare(
                    dependency.available.new_release(),
                    candidate.available.new_release(),
                );
                if ordering == Ordering::Greater {
                    *candidate = dependency;
                }
            }
            None => merged.outdated.dependencies.push(dependency),
        }
    }

    // Build tool fields are last-write-wins: incoming where populated,
    // existing fills the gaps.
    if merged.build_tool.running.version.is_empty() {
        merged.build_tool.running = existing.build_tool.running;
    }
    if merged.build_tool.current.is_none() {
        merged.build_tool.current = existing.build_tool.current;
    }
    if merged.build_tool.release_candidate.is_none() {
        merged.build_tool.release_candidate = existing.build_tool.release_candidate;
    }

    merged
}

/// Folds any number of analyses into one, oldest first. An empty
/// iterator yields the empty analysis.
pub fn fold(
    analyses: impl IntoIterator<Item = DependencyAnalysis>,
    comparator: &dyn VersionComparator,
) -> DependencyAnalysis {
    analyses
        .into_iter()
        .fold(DependencyAnalysis::default(), |accumulated, next| {
            merge(accumulated, next, comparator)
        })
}
