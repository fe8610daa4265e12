//! Print period calculation
//!
//! Printed policy forms show the validity window broken into consecutive
//! one-year sub-periods. Each period ends one day before the next one
//! starts; the last period ends at the overall `valid_to`.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use core_kernel::add_months;
use domain_policy::Policy;

use crate::error::{FeedError, MissingDependency};

/// One yearly sub-period of a policy validity window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyPeriod {
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
}

/// Splits a validity window into consecutive one-year periods
///
/// The result is ordered, covers the whole window, and has no gaps or
/// overlaps. A window shorter than a year yields a single period ending
/// at `valid_to`.
///
/// # Errors
///
/// Returns [`FeedError::InvalidWindow`] when `valid_from > valid_to`.
pub fn split_periods(
    valid_from: NaiveDateTime,
    valid_to: NaiveDateTime,
) -> Result<Vec<PolicyPeriod>, FeedError> {
    if valid_from > valid_to {
        return Err(FeedError::InvalidWindow {
            valid_from,
            valid_to,
        });
    }

    let mut periods = Vec::new();
    let mut start = valid_from;
    loop {
        let next_start = add_months(start, 12)?;
        let end = next_start - Duration::days(1);
        if end >= valid_to {
            periods.push(PolicyPeriod {
                valid_from: start,
                valid_to,
            });
            return Ok(periods);
        }
        periods.push(PolicyPeriod {
            valid_from: start,
            valid_to: end,
        });
        start = next_start;
    }
}

/// Splits a policy's validity window into print periods
///
/// # Errors
///
/// Returns [`FeedError::MissingDependency`] when the policy has no
/// `valid_to`, and [`FeedError::InvalidWindow`] for inverted windows.
pub fn policy_periods(policy: &Policy) -> Result<Vec<PolicyPeriod>, FeedError> {
    let valid_to = policy
        .valid_to
        .ok_or_else(|| FeedError::missing(policy.id, MissingDependency::ValidityWindow))?;
    split_periods(policy.valid_from, valid_to)
}
