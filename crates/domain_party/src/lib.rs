//! Party Domain
//!
//! Identity entities of the export core: natural and legal persons, the
//! person records linking them to policies, creator accounts, and the
//! credential/contact registry. Also hosts the field-level validation
//! rules and the computed list/deep views these entities are serialized
//! through.

pub mod credential;
pub mod error;
pub mod person;
pub mod validation;
pub mod views;

pub use credential::{
    Contact, ContactTypeCode, Credential, CredentialRegistry, CredentialTypeCode, OwnerRef,
};
pub use error::PartyError;
pub use person::{resolve_beneficiary, LegalPerson, NaturalPerson, Person, PersonSubject, User};
pub use validation::{validate_inn, INN_LENGTH};
pub use views::{ContactView, CredentialView, LegalPersonView, NaturalPersonView};
