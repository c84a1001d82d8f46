//! Service layer for querying release metrics.
//!
//! This module implements `ReleaseMetricsQuerier`, the main entry point for
//! computing milestone metrics. It handles:
//! 1. Resolving the milestone handle from its human-readable title.
//! 2. Fetching the closed issues filed under that milestone.
//! 3. Aggregating merged pull requests around the cutoff date.
//!
//! The querier is generic over the [`IssueTracker`] capability so the
//! computation can be exercised without a live tracker.

use crate::config::{AppConfig, RepoId};
use crate::error::MetricsError;
use crate::github::GitHubClient;
use crate::metrics::{self, PrCounts};
use crate::tracker::{find_milestone, IssueTracker};

pub struct ReleaseMetricsQuerier<T> {
    tracker: T,
    repo: RepoId,
}

impl ReleaseMetricsQuerier<GitHubClient> {
    /// Builds a querier backed by the GitHub API, scoped to the repository
    /// named in `config`.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let tracker = GitHubClient::new(config.github_token.clone(), config.max_github_api_pages)?;
        Ok(Self::new(tracker, config.repo_id()))
    }
}

impl<T: IssueTracker> ReleaseMetricsQuerier<T> {
    pub fn new(tracker: T, repo: RepoId) -> Self {
        Self { tracker, repo }
    }

    /// Counts the milestone's merged pull requests before, on, and after
    /// the cutoff date.
    ///
    /// Fails with [`MetricsError::InvalidDate`] on a malformed cutoff and
    /// with [`MetricsError::MilestoneNotFound`] when no milestone carries
    /// the given title. Remote failures propagate untouched; no partial
    /// aggregate is ever returned.
    pub async fn prs_metrics(
        &self,
        milestone_title: &str,
        cutoff_date: &str,
    ) -> anyhow::Result<PrCounts> {
        let cutoff = metrics::parse_day(cutoff_date)?;

        let milestone = find_milestone(&self.tracker, &self.repo, milestone_title)
            .await?
            .ok_or_else(|| MetricsError::MilestoneNotFound {
                repo: self.repo.to_string(),
                title: milestone_title.to_string(),
            })?;

        let issues = self
            .tracker
            .list_closed_issues(&self.repo, &milestone)
            .await?;

        let counts = metrics::count_merged_prs(&issues, cutoff);
        tracing::debug!(
            repo = %self.repo,
            milestone = %milestone.title,
            total = counts.total,
            "Computed PR cutoff metrics"
        );

        Ok(counts)
    }
}
