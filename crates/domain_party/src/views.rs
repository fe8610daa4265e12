//! Serialized views of party entities
//!
//! Read-only representations assembled for list and detail responses.
//! Computed fields (beneficiary, driving experience) are resolved here
//! from already-loaded records, not stored on the entities.

use serde::Serialize;

use core_kernel::{ContactId, CredentialId, LegalPersonId, NaturalPersonId};

use crate::credential::{Contact, ContactTypeCode, Credential, CredentialTypeCode, OwnerRef};
use crate::person::{resolve_beneficiary, LegalPerson, NaturalPerson, Person};

/// List/detail view of a natural person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NaturalPersonView {
    pub id: NaturalPersonId,
    pub first_name: String,
    pub last_name: String,
    pub driving_experience: Option<u32>,
    pub beneficiary: Option<String>,
}

impl NaturalPersonView {
    /// Builds the view from the person and its associated person records
    pub fn build(natural_person: &NaturalPerson, persons: &[Person]) -> Self {
        Self {
            id: natural_person.id,
            first_name: natural_person.first_name.clone(),
            last_name: natural_person.last_name.clone(),
            driving_experience: natural_person.driving_experience,
            beneficiary: resolve_beneficiary(persons).map(str::to_string),
        }
    }
}

/// List/detail view of a legal person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalPersonView {
    pub id: LegalPersonId,
    pub title: String,
    pub inn: String,
    pub beneficiary: Option<String>,
}

impl LegalPersonView {
    pub fn build(legal_person: &LegalPerson, persons: &[Person]) -> Self {
        Self {
            id: legal_person.id,
            title: legal_person.title.clone(),
            inn: legal_person.inn.clone(),
            beneficiary: resolve_beneficiary(persons).map(str::to_string),
        }
    }
}

/// Serialized view of a credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialView {
    pub id: CredentialId,
    pub credential_type: CredentialTypeCode,
    pub owner: OwnerRef,
    pub series: String,
    pub number: String,
    pub issue_date: Option<chrono::NaiveDate>,
    pub issue_point: Option<String>,
    pub expiration_date: Option<chrono::NaiveDate>,
    pub external_id: Option<String>,
}

impl From<&Credential> for CredentialView {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id,
            credential_type: credential.credential_type,
            owner: credential.owner,
            series: credential.series.clone(),
            number: credential.number.clone(),
            issue_date: credential.issue_date,
            issue_point: credential.issue_point.clone(),
            expiration_date: credential.expiration_date,
            external_id: credential.external_id.clone(),
        }
    }
}

/// Serialized view of a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub id: ContactId,
    pub contact_type: ContactTypeCode,
    pub owner: OwnerRef,
    pub data: String,
    pub notes: Option<String>,
}

impl From<&Contact> for ContactView {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            contact_type: contact.contact_type,
            owner: contact.owner,
            data: contact.data.clone(),
            notes: contact.notes.clone(),
        }
    }
}
