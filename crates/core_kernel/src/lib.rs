//! Core Kernel - Foundational types for the policy export core
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for domain entities
//! - Temporal helpers for feed timestamps and calendar arithmetic

pub mod identifiers;
pub mod temporal;

pub use identifiers::{
    CarId, ContactId, CredentialId, InsuredObjectId, LegalPersonId,
    NaturalPersonId, PersonId, PolicyId, RecordId, ResultId, UserId,
};
pub use temporal::{add_months, feed_timestamp, inclusive_days, TemporalError};
