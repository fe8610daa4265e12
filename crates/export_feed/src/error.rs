//! Export pipeline errors

use chrono::NaiveDateTime;
use thiserror::Error;

use core_kernel::{PolicyId, TemporalError};

/// A mandatory related entity or field required for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDependency {
    CalcResult,
    ResultStorage,
    InsuredObject,
    PolicyNumber,
    ValidityWindow,
}

impl std::fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MissingDependency::CalcResult => "calculation result",
            MissingDependency::ResultStorage => "result storage",
            MissingDependency::InsuredObject => "insured object",
            MissingDependency::PolicyNumber => "policy number",
            MissingDependency::ValidityWindow => "validity window",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in the export pipeline
#[derive(Debug, Error)]
pub enum FeedError {
    /// A mandatory related entity or field is absent
    #[error("Feed attributes require a {missing} (policy id {policy_id})")]
    MissingDependency {
        policy_id: PolicyId,
        missing: MissingDependency,
    },

    /// The validity window is inverted
    #[error("Invalid validity window: {valid_from} is after {valid_to}")]
    InvalidWindow {
        valid_from: NaiveDateTime,
        valid_to: NaiveDateTime,
    },

    /// Calendar arithmetic failed
    #[error(transparent)]
    Temporal(#[from] TemporalError),
}

impl FeedError {
    pub fn missing(policy_id: PolicyId, missing: MissingDependency) -> Self {
        FeedError::MissingDependency { policy_id, missing }
    }
}
