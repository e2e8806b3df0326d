//! Notification run orchestrator
//!
//! One run: fetch the open tracker issues, decode and fold them into a
//! baseline, merge the fresh report on top, then decide whether and
//! what to file. The run is atomic: any tracker failure aborts it, a
//! negative decision is a clean no-op.

use crate::codec;
use crate::domain::DependencyAnalysis;
use crate::error::TrackerError;
use crate::issue::{build_issue, should_notify, IssueTemplates};
use crate::merge::{fold, merge};
use crate::tracker::{IssueTracker, NewIssue, TrackerIssue};
use crate::version_cmp::VersionComparator;

/// What a notification run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to report, no tracker write happened
    NoUpdates,
    /// An issue was filed
    Created {
        /// Browser URL of the created issue
        web_url: String,
        /// The submitted payload
        issue: NewIssue,
    },
    /// Dry run: the issue that would have been filed
    DryRun { issue: NewIssue },
}

/// Orchestrates one notification run against a tracker
pub struct Notifier {
    tracker: Box<dyn IssueTracker>,
    templates: IssueTemplates,
    comparator: Box<dyn VersionComparator>,
    dry_run: bool,
}

impl Notifier {
    /// Creates a notifier
    pub fn new(
        tracker: Box<dyn IssueTracker>,
        templates: IssueTemplates,
        comparator: Box<dyn VersionComparator>,
        dry_run: bool,
    ) -> Self {
        Self {
            tracker,
            templates,
            comparator,
            dry_run,
        }
    }

    /// Runs the notification for a fresh report analysis
    pub async fn run(&self, fresh: DependencyAnalysis) -> Result<RunOutcome, TrackerError> {
        let issues = self.tracker.list_issues().await?;
        let baseline = self.baseline_from(&issues);

        // fresh report merged last so it wins all ties
        let merged = merge(baseline, fresh, self.comparator.as_ref());

        if !should_notify(&merged) {
            return Ok(RunOutcome::NoUpdates);
        }

        let Some(issue) = build_issue(&merged, &self.templates) else {
            // update flagged but nothing rendered (empty version strings)
            return Ok(RunOutcome::NoUpdates);
        };

        if self.dry_run {
            return Ok(RunOutcome::DryRun { issue });
        }

        let created = self.tracker.create_issue(&issue).await?;
        Ok(RunOutcome::Created {
            web_url: created.web_url,
            issue,
        })
    }

    /// Decodes every open issue body and folds the results into the
    /// previously-reported baseline
    fn baseline_from(&self, issues: &[TrackerIssue]) -> DependencyAnalysis {
        fold(
            issues.iter().map(|issue| codec::decode(&issue.description)),
            self.comparator.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildToolStatus, Dependency, Outdated, ToolVersion};
    use crate::version_cmp::Lexicographic;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Tracker double recording create calls
    struct FakeTracker {
        existing: Vec<TrackerIssue>,
        created: Mutex<Vec<NewIssue>>,
        fail_create: bool,
    }

    impl FakeTracker {
        fn empty() -> Self {
            Self::with_bodies(&[])
        }

        fn with_bodies(bodies: &[&str]) -> Self {
            let existing = bodies
                .iter()
                .map(|body| TrackerIssue {
                    title: "Found outdated dependencies".to_string(),
                    description: body.to_string(),
                    labels: vec!["dependencies".to_string()],
                    web_url: String::new(),
                    created_at: None,
                })
                .collect();
            Self {
                existing,
                created: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }
    }

    #[async_trait]
    impl IssueTracker for FakeTracker {
        fn tracker_name(&self) -> &'static str {
            "fake"
        }

        async fn list_issues(&self) -> Result<Vec<TrackerIssue>, TrackerError> {
            Ok(self.existing.clone())
        }

        async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssue, TrackerError> {
            if self.fail_create {
                return Err(TrackerError::api_error("create issue", "fake", 401));
            }
            self.created.lock().unwrap().push(issue.clone());
            Ok(TrackerIssue {
                title: issue.title.clone(),
                description: issue.description.clone(),
                labels: issue.labels.clone(),
                web_url: "https://tracker.example.com/issues/1".to_string(),
                created_at: None,
            })
        }
    }

    fn notifier(tracker: FakeTracker, dry_run: bool) -> Notifier {
        Notifier::new(
            Box::new(tracker),
            IssueTemplates::new("Found %count outdated dependencies", "dependencies").unwrap(),
            Box::new(Lexicographic),
            dry_run,
        )
    }

    fn fresh_with(dependencies: Vec<Dependency>) -> DependencyAnalysis {
        DependencyAnalysis {
            outdated: Outdated { dependencies },
            build_tool: BuildToolStatus::default(),
        }
    }

    #[tokio::test]
    async fn test_run_no_updates_is_noop() {
        let notifier = notifier(FakeTracker::empty(), false);
        let outcome = notifier.run(DependencyAnalysis::default()).await.unwrap();
        assert_eq!(outcome, RunOutcome::NoUpdates);
    }

    #[tokio::test]
    async fn test_run_creates_issue_for_fresh_dependency() {
        let notifier = notifier(FakeTracker::empty(), false);
        let fresh = fresh_with(vec![Dependency::new("com.example", "lib", "1.0", "2.0")]);

        let outcome = notifier.run(fresh).await.unwrap();
        let RunOutcome::Created { web_url, issue } = outcome else {
            panic!("expected Created outcome");
        };
        assert_eq!(web_url, "https://tracker.example.com/issues/1");
        assert_eq!(issue.title, "Found 1 outdated dependencies");
        assert_eq!(issue.description, "- [ ] `com.example:lib:(1.0 -> 2.0)`");
    }

    #[tokio::test]
    async fn test_run_merges_existing_issue_with_newer_target() {
        let tracker =
            FakeTracker::with_bodies(&["- [ ] `com.example:lib:(1.0 -> 2.0)`"]);
        let notifier = notifier(tracker, false);
        let fresh = fresh_with(vec![Dependency::new("com.example", "lib", "1.0", "1.5")]);

        let outcome = notifier.run(fresh).await.unwrap();
        let RunOutcome::Created { issue, .. } = outcome else {
            panic!("expected Created outcome");
        };
        // existing issue knew a further-ahead target; it survives
        assert_eq!(issue.description, "- [ ] `com.example:lib:(1.0 -> 2.0)`");
        assert_eq!(issue.title, "Found 1 outdated dependencies");
    }

    #[tokio::test]
    async fn test_run_consolidates_across_issues() {
        let tracker = FakeTracker::with_bodies(&[
            "- [ ] `org:lib-a:(1.0 -> 1.1)`",
            "- [ ] `org:lib-b:(2.0 -> 2.5)`\n\n- [ ] Gradle `6.0` -> `6.5`",
        ]);
        let notifier = notifier(tracker, false);
        let fresh = fresh_with(vec![Dependency::new("org", "lib-c", "0.1", "0.2")]);

        let outcome = notifier.run(fresh).await.unwrap();
        let RunOutcome::Created { issue, .. } = outcome else {
            panic!("expected Created outcome");
        };
        assert_eq!(issue.title, "Found 4 outdated dependencies");
        assert!(issue.description.contains("org:lib-a:(1.0 -> 1.1)"));
        assert!(issue.description.contains("org:lib-b:(2.0 -> 2.5)"));
        assert!(issue.description.contains("org:lib-c:(0.1 -> 0.2)"));
        assert!(issue.description.contains("Gradle `6.0` -> `6.5`"));
    }

    #[tokio::test]
    async fn test_run_dry_run_never_creates() {
        let notifier = notifier(FakeTracker::empty(), true);
        let fresh = fresh_with(vec![Dependency::new("com.example", "lib", "1.0", "2.0")]);

        let outcome = notifier.run(fresh).await.unwrap();
        assert!(matches!(outcome, RunOutcome::DryRun { .. }));
    }

    #[tokio::test]
    async fn test_run_propagates_create_failure() {
        let mut tracker = FakeTracker::empty();
        tracker.fail_create = true;
        let notifier = notifier(tracker, false);
        let fresh = fresh_with(vec![Dependency::new("com.example", "lib", "1.0", "2.0")]);

        let err = notifier.run(fresh).await.unwrap_err();
        assert!(matches!(err, TrackerError::ApiError { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_run_empty_version_update_is_noop() {
        // build tool flags an update but carries no version string
        let notifier = notifier(FakeTracker::empty(), false);
        let fresh = DependencyAnalysis {
            outdated: Outdated::default(),
            build_tool: BuildToolStatus {
                running: ToolVersion::new("6.0", false),
                current: Some(ToolVersion::new("", true)),
                release_candidate: None,
            },
        };

        let outcome = notifier.run(fresh).await.unwrap();
        assert_eq!(outcome, RunOutcome::NoUpdates);
    }
}
