//! Field-level validation rules

use crate::error::PartyError;

/// Required length of the national tax identifier
pub const INN_LENGTH: usize = 10;

/// Validates the national tax identifier ("INN") length
///
/// # Errors
///
/// Returns [`PartyError::InvalidInnLength`] naming the expected length
/// when the value is not exactly [`INN_LENGTH`] characters.
pub fn validate_inn(inn: &str) -> Result<(), PartyError> {
    if inn.chars().count() != INN_LENGTH {
        return Err(PartyError::InvalidInnLength {
            expected: INN_LENGTH,
        });
    }
    Ok(())
}
