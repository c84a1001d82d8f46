//! GitHub-backed implementation of the [`IssueTracker`] capability.
//!
//! Uses the REST milestones and issues endpoints directly (via octocrab's
//! generic client) because the issue listing carries the linked pull
//! request's `merged_at` field, which the typed pull-request models do not
//! expose on issues.

use crate::config::RepoId;
use crate::tracker::{ClosedIssue, IssueTracker, Milestone, MilestoneState, PullRequestRef};
use anyhow::Result;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

const PER_PAGE: u8 = 100;

#[derive(Debug, Deserialize)]
struct MilestonePayload {
    number: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct IssuePayload {
    number: u64,
    pull_request: Option<PullRequestLink>,
}

#[derive(Debug, Deserialize)]
struct PullRequestLink {
    #[serde(default)]
    merged_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct MilestoneListParams {
    state: &'static str,
    per_page: u8,
    page: u32,
}

#[derive(Serialize)]
struct IssueListParams {
    milestone: u64,
    state: &'static str,
    per_page: u8,
    page: u32,
}

#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    max_pages: u32,
}

impl GitHubClient {
    pub fn new(token: Option<String>, max_pages: u32) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        Ok(Self {
            octocrab: builder.build()?,
            max_pages,
        })
    }

    fn repo_route(repo: &RepoId, resource: &str) -> String {
        // Sanitize inputs to prevent path traversal or unintended endpoint access
        let owner = repo.owner.trim().replace("..", "");
        let name = repo.repo.trim().replace("..", "");
        format!("/repos/{owner}/{name}/{resource}")
    }

    /// Fetches every page of a listing endpoint, up to the configured
    /// page limit.
    async fn get_paged<R, P>(&self, route: &str, params_for_page: impl Fn(u32) -> P) -> Result<Vec<R>>
    where
        R: serde::de::DeserializeOwned,
        P: Serialize,
    {
        let mut items = Vec::new();

        for page in 1..=self.max_pages {
            let batch: Vec<R> = self
                .octocrab
                .get(route, Some(&params_for_page(page)))
                .await?;
            let last_page = batch.len() < PER_PAGE as usize;
            items.extend(batch);

            if last_page {
                return Ok(items);
            }
        }

        tracing::warn!(
            route,
            max_pages = self.max_pages,
            "Hit page limit before exhausting listing. Data may be incomplete."
        );
        Ok(items)
    }
}

impl IssueTracker for GitHubClient {
    async fn list_milestones(
        &self,
        repo: &RepoId,
        state: MilestoneState,
    ) -> Result<Vec<Milestone>> {
        let route = Self::repo_route(repo, "milestones");
        let payloads: Vec<MilestonePayload> = self
            .get_paged(&route, |page| MilestoneListParams {
                state: state.as_str(),
                per_page: PER_PAGE,
                page,
            })
            .await?;

        tracing::debug!(repo = %repo, count = payloads.len(), "Fetched milestones");

        Ok(payloads
            .into_iter()
            .map(|m| Milestone {
                number: m.number,
                title: m.title,
            })
            .collect())
    }

    async fn list_closed_issues(
        &self,
        repo: &RepoId,
        milestone: &Milestone,
    ) -> Result<Vec<ClosedIssue>> {
        let route = Self::repo_route(repo, "issues");
        let payloads: Vec<IssuePayload> = self
            .get_paged(&route, |page| IssueListParams {
                milestone: milestone.number,
                state: "closed",
                per_page: PER_PAGE,
                page,
            })
            .await?;

        tracing::debug!(
            repo = %repo,
            milestone = %milestone.title,
            count = payloads.len(),
            "Fetched closed issues"
        );

        Ok(payloads
            .into_iter()
            .map(|issue| ClosedIssue {
                number: issue.number,
                pull_request: issue.pull_request.map(|pr| PullRequestRef {
                    merged_at: pr.merged_at,
                }),
            })
            .collect())
    }
}
