//! Party domain errors

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartyError {
    /// National tax identifier has the wrong length
    #[error("INN must be exactly {expected} characters long")]
    InvalidInnLength { expected: usize },
}
