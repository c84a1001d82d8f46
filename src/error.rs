//! Typed errors for the metrics computations.
//!
//! Remote/transport failures stay `anyhow::Error` and propagate untouched;
//! the variants here cover the failures callers are expected to match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// No milestone with the requested title exists in the repository.
    /// An absent milestone is never silently passed down to the issue
    /// listing; callers get this error instead.
    #[error("milestone {title:?} not found in {repo}")]
    MilestoneNotFound { repo: String, title: String },
}
