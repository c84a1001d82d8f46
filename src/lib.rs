//! Release engineering metrics for a GitHub-hosted project.
//!
//! Two computations: the lead time between a cutoff date and a release
//! date, and a breakdown of how many pull requests merged into a milestone
//! landed before, on, or after the cutoff. Data comes from an
//! [`tracker::IssueTracker`] capability; [`github::GitHubClient`] is the
//! production implementation.

pub mod config;
pub mod error;
pub mod github;
pub mod metrics;
pub mod querier;
pub mod tracker;

pub use error::MetricsError;
pub use metrics::{release_lead_time, PrCounts};
pub use querier::ReleaseMetricsQuerier;
