//! Pure release-metric computations.
//!
//! Everything here is a single pass over already-fetched data; the remote
//! reads live in [`crate::github`] and [`crate::querier`].

use crate::error::MetricsError;
use crate::tracker::ClosedIssue;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// How the merged pull requests of a milestone fall around a cutoff date.
///
/// `total` always equals `before_cutoff + on_cutoff + after_cutoff`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrCounts {
    pub total: u64,
    pub before_cutoff: u64,
    pub on_cutoff: u64,
    pub after_cutoff: u64,
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_day(input: &str) -> Result<NaiveDate, MetricsError> {
    NaiveDate::parse_from_str(input, DAY_FORMAT).map_err(|source| MetricsError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Whole days elapsed between a cutoff date and a release date.
///
/// Negative when the release precedes the cutoff; no validation rejects
/// that ordering.
pub fn release_lead_time(cutoff_date: &str, release_date: &str) -> Result<i64, MetricsError> {
    let release = parse_day(release_date)?;
    let cutoff = parse_day(cutoff_date)?;

    Ok(release.signed_duration_since(cutoff).num_days())
}

/// Buckets a milestone's issues by their pull request's merge date.
///
/// Issues without a linked pull request, and pull requests that were
/// closed without merging, are excluded from every bucket.
pub fn count_merged_prs(issues: &[ClosedIssue], cutoff: NaiveDate) -> PrCounts {
    let mut counts = PrCounts::default();

    for issue in issues {
        let Some(merged_at) = issue.pull_request.as_ref().and_then(|pr| pr.merged_at) else {
            continue;
        };

        match merged_at.date_naive().cmp(&cutoff) {
            Ordering::Less => counts.before_cutoff += 1,
            Ordering::Equal => counts.on_cutoff += 1,
            Ordering::Greater => counts.after_cutoff += 1,
        }
    }

    counts.total = counts.before_cutoff + counts.on_cutoff + counts.after_cutoff;
    counts
}
