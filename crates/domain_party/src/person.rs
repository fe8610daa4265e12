//! Persons and user accounts
//!
//! A `Person` record links a policy role (such as beneficiary) to an
//! identity subject, which is either a natural or a legal person. One
//! subject can accumulate several person records over time; the most
//! recent one carries the current beneficiary designation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use core_kernel::{LegalPersonId, NaturalPersonId, PersonId, UserId};

/// A natural person identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalPerson {
    pub id: NaturalPersonId,
    pub first_name: String,
    pub last_name: String,
    /// Driving experience in years
    pub driving_experience: Option<u32>,
}

impl NaturalPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: NaturalPersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            driving_experience: None,
        }
    }

    pub fn with_driving_experience(mut self, years: u32) -> Self {
        self.driving_experience = Some(years);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A legal person (organization) identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPerson {
    pub id: LegalPersonId,
    pub title: String,
    /// National tax identifier
    pub inn: String,
}

impl LegalPerson {
    pub fn new(title: impl Into<String>, inn: impl Into<String>) -> Self {
        Self {
            id: LegalPersonId::new(),
            title: title.into(),
            inn: inn.into(),
        }
    }
}

/// The identity subject behind a person record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonSubject {
    Natural(NaturalPersonId),
    Legal(LegalPersonId),
}

impl PersonSubject {
    pub fn natural_person(&self) -> Option<NaturalPersonId> {
        match self {
            PersonSubject::Natural(id) => Some(*id),
            PersonSubject::Legal(_) => None,
        }
    }
}

/// A person record attaching a role to an identity subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub created: NaiveDateTime,
    /// Beneficiary designation, e.g. the financing bank
    pub beneficiary: Option<String>,
    pub subject: Option<PersonSubject>,
}

impl Person {
    pub fn new(created: NaiveDateTime) -> Self {
        Self {
            id: PersonId::new(),
            created,
            beneficiary: None,
            subject: None,
        }
    }

    pub fn with_beneficiary(mut self, beneficiary: impl Into<String>) -> Self {
        self.beneficiary = Some(beneficiary.into());
        self
    }

    pub fn with_subject(mut self, subject: PersonSubject) -> Self {
        self.subject = Some(subject);
        self
    }
}

/// A user account (policy or person creator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Resolves the current beneficiary designation from a subject's person
/// records
///
/// Picks the most recent record and returns its beneficiary label, if
/// any. Pure function over already-loaded records.
pub fn resolve_beneficiary(persons: &[Person]) -> Option<&str> {
    persons
        .iter()
        .max_by_key(|person| person.created)
        .and_then(|person| person.beneficiary.as_deref())
}
