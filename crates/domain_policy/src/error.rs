//! Policy domain errors

use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The raw previous-policies payload is not a JSON object, array,
    /// or string
    #[error("Invalid previous policies payload: {0}")]
    InvalidPreviousPolicies(String),
}
