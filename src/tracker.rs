//! The issue tracker capability the metrics are computed over.
//!
//! `IssueTracker` is the minimal read-only contract the querier consumes:
//! list the milestones of a repository and list the closed issues filed
//! under one milestone. The production implementation is
//! [`crate::github::GitHubClient`]; tests substitute an in-memory fake.

use crate::config::RepoId;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named grouping of issues representing a release or iteration.
///
/// The `number` is the tracker-side handle used to filter issue listings;
/// lookup by `title` goes through [`find_milestone`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

/// Reference to the pull request linked to an issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// When the pull request was merged. `None` means it was closed
    /// without merging.
    pub merged_at: Option<DateTime<Utc>>,
}

/// A closed issue, optionally linked to a pull request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedIssue {
    pub number: u64,
    pub pull_request: Option<PullRequestRef>,
}

/// Milestone state filter for listing calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneState {
    Open,
    Closed,
    All,
}

impl MilestoneState {
    /// Query-string representation used by the GitHub REST API.
    pub fn as_str(self) -> &'static str {
        match self {
            MilestoneState::Open => "open",
            MilestoneState::Closed => "closed",
            MilestoneState::All => "all",
        }
    }
}

/// Read-only view of an issue tracker.
///
/// Implementations own pagination, authentication, and rate limiting;
/// errors from the remote side propagate as-is.
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// All milestones of `repo` matching `state`.
    async fn list_milestones(&self, repo: &RepoId, state: MilestoneState)
        -> Result<Vec<Milestone>>;

    /// All closed issues filed under `milestone` in `repo`.
    async fn list_closed_issues(
        &self,
        repo: &RepoId,
        milestone: &Milestone,
    ) -> Result<Vec<ClosedIssue>>;
}

/// Looks up a milestone by exact title.
///
/// Scans milestones in every state (open and closed) and returns the first
/// whose title equals `title`. Matching is case- and whitespace-sensitive;
/// `None` means no such milestone exists and callers must handle it.
pub async fn find_milestone<T: IssueTracker>(
    tracker: &T,
    repo: &RepoId,
    title: &str,
) -> Result<Option<Milestone>> {
    let milestones = tracker.list_milestones(repo, MilestoneState::All).await?;
    Ok(milestones.into_iter().find(|m| m.title == title))
}
