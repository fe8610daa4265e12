//! Pre-export policy validation
//!
//! Export fails fast when a mandatory related entity is absent; every
//! other computation downstream degrades to empty values instead.

use tracing::warn;

use domain_policy::Policy;

use crate::error::{FeedError, MissingDependency};

/// Checks that a policy carries everything the feed requires
///
/// Verifies, in order: the calculation result, its premium storage, the
/// insured object, and a non-empty policy number. Pure check with no
/// side effects.
///
/// # Errors
///
/// Returns [`FeedError::MissingDependency`] naming the policy id and the
/// first missing dependency.
pub fn validate_policy(policy: &Policy) -> Result<(), FeedError> {
    let missing = first_missing(policy);
    if let Some(missing) = missing {
        warn!(policy_id = %policy.id, %missing, "policy is not exportable");
        return Err(FeedError::missing(policy.id, missing));
    }
    Ok(())
}

fn first_missing(policy: &Policy) -> Option<MissingDependency> {
    let result = match &policy.result {
        Some(result) => result,
        None => return Some(MissingDependency::CalcResult),
    };
    if result.storage.is_none() {
        return Some(MissingDependency::ResultStorage);
    }
    if policy.insured_object.is_none() {
        return Some(MissingDependency::InsuredObject);
    }
    match &policy.number {
        Some(number) if !number.is_empty() => None,
        _ => Some(MissingDependency::PolicyNumber),
    }
}
