//! Credentials and contacts
//!
//! The upstream system attaches credentials and contacts to arbitrary
//! entities through a generic relation. Here the owner is an explicit
//! tagged reference and the records live in a typed registry, so lookups
//! like "the vehicle registration certificate of this car" stay
//! type-checked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, ContactId, CredentialId, LegalPersonId, NaturalPersonId};

/// The entity a credential or contact belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerRef {
    NaturalPerson(NaturalPersonId),
    LegalPerson(LegalPersonId),
    Car(CarId),
}

/// Credential type codes from the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialTypeCode {
    Passport,
    DriverLicense,
    VehicleRegistration,
}

/// An identity or registration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: CredentialId,
    pub credential_type: CredentialTypeCode,
    pub owner: OwnerRef,
    pub series: String,
    pub number: String,
    pub issue_date: Option<NaiveDate>,
    pub issue_point: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    /// Identifier of the document in an external system, if synchronized
    pub external_id: Option<String>,
}

impl Credential {
    pub fn new(credential_type: CredentialTypeCode, owner: OwnerRef) -> Self {
        Self {
            id: CredentialId::new(),
            credential_type,
            owner,
            series: String::new(),
            number: String::new(),
            issue_date: None,
            issue_point: None,
            expiration_date: None,
            external_id: None,
        }
    }

    pub fn with_series_number(
        mut self,
        series: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        self.series = series.into();
        self.number = number.into();
        self
    }
}

/// Contact type codes from the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactTypeCode {
    Phone,
    Email,
}

/// A contact channel attached to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub contact_type: ContactTypeCode,
    pub owner: OwnerRef,
    pub data: String,
    pub notes: Option<String>,
}

impl Contact {
    pub fn new(contact_type: ContactTypeCode, owner: OwnerRef, data: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            contact_type,
            owner,
            data: data.into(),
            notes: None,
        }
    }
}

/// Typed reference table of credentials and contacts
///
/// Replaces the generic-relation lookups of the upstream system with
/// explicit queries keyed by owner reference.
#[derive(Debug, Clone, Default)]
pub struct CredentialRegistry {
    credentials: Vec<Credential>,
    contacts: Vec<Contact>,
}

impl CredentialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_credential(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// First credential of the given type owned by `owner`
    pub fn find_credential(
        &self,
        owner: OwnerRef,
        credential_type: CredentialTypeCode,
    ) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.owner == owner && c.credential_type == credential_type)
    }

    /// All credentials owned by `owner`
    pub fn credentials_of(&self, owner: OwnerRef) -> impl Iterator<Item = &Credential> {
        self.credentials.iter().filter(move |c| c.owner == owner)
    }

    /// All contacts owned by `owner`
    pub fn contacts_of(&self, owner: OwnerRef) -> impl Iterator<Item = &Contact> {
        self.contacts.iter().filter(move |c| c.owner == owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_credential_by_owner_and_type() {
        let car = CarId::new();
        let mut registry = CredentialRegistry::new();
        registry.add_credential(
            Credential::new(CredentialTypeCode::VehicleRegistration, OwnerRef::Car(car))
                .with_series_number("77", "123456"),
        );

        let found = registry
            .find_credential(OwnerRef::Car(car), CredentialTypeCode::VehicleRegistration)
            .unwrap();
        assert_eq!(found.number, "123456");
    }

    #[test]
    fn test_find_credential_misses_other_owner() {
        let mut registry = CredentialRegistry::new();
        registry.add_credential(Credential::new(
            CredentialTypeCode::VehicleRegistration,
            OwnerRef::Car(CarId::new()),
        ));

        assert!(registry
            .find_credential(
                OwnerRef::Car(CarId::new()),
                CredentialTypeCode::VehicleRegistration
            )
            .is_none());
    }

    #[test]
    fn test_contacts_of_filters_by_owner() {
        let person = NaturalPersonId::new();
        let mut registry = CredentialRegistry::new();
        registry.add_contact(Contact::new(
            ContactTypeCode::Phone,
            OwnerRef::NaturalPerson(person),
            "123456",
        ));
        registry.add_contact(Contact::new(
            ContactTypeCode::Email,
            OwnerRef::NaturalPerson(NaturalPersonId::new()),
            "someone@example.com",
        ));

        let contacts: Vec<_> = registry
            .contacts_of(OwnerRef::NaturalPerson(person))
            .collect();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].data, "123456");
    }
}
