//! The policy entity
//!
//! A policy is issued from a calculation result for an insured object.
//! Its validity window may be open-ended (`valid_to` unset) until the
//! configured duration resolves it at export time.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use core_kernel::PolicyId;
use domain_party::User;

use crate::error::PolicyError;
use crate::insured_object::InsuredObject;
use crate::result::CalcResult;

/// Policy lifecycle status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    /// Saved as a draft, not yet issued
    Saved,
    /// Issued and in force
    Issued,
    /// Annulled after issue
    Annulled,
}

/// Identifiers of the policies this one replaces
///
/// The create/update surface historically accepted this field as a raw
/// JSON payload that could be an object, an array, or an
/// already-formatted string. It is normalized into a tagged variant once
/// on load instead of being re-detected at every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviousPolicies {
    Mapping(BTreeMap<String, String>),
    List(Vec<String>),
    Formatted(String),
}

impl PreviousPolicies {
    /// Normalizes the raw boundary payload
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPreviousPolicies`] when the payload
    /// is not valid JSON or is a JSON scalar other than a string.
    pub fn parse(raw: &str) -> Result<Self, PolicyError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|_| PolicyError::InvalidPreviousPolicies(raw.to_string()))?;
        match value {
            Value::Object(map) => Ok(PreviousPolicies::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, scalar_to_string(value)))
                    .collect(),
            )),
            Value::Array(items) => Ok(PreviousPolicies::List(
                items.into_iter().map(scalar_to_string).collect(),
            )),
            Value::String(s) => Ok(PreviousPolicies::Formatted(s)),
            other => Err(PolicyError::InvalidPreviousPolicies(other.to_string())),
        }
    }

    /// Renders the feed representation: identifiers joined by `", "`
    ///
    /// Mappings join their values in key order, lists preserve their
    /// order. A value that arrived already formatted renders as an empty
    /// string; the feed has always emitted nothing for those and
    /// downstream consumers rely on it.
    pub fn formatted(&self) -> String {
        match self {
            PreviousPolicies::Mapping(map) => {
                map.values().cloned().collect::<Vec<_>>().join(", ")
            }
            PreviousPolicies::List(items) => items.join(", "),
            PreviousPolicies::Formatted(_) => String::new(),
        }
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// An insurance policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    /// Human-readable policy number, e.g. `5/12/002765/KAZ/17`
    pub number: Option<String>,
    pub status: PolicyStatus,
    pub created: NaiveDateTime,
    pub valid_from: NaiveDateTime,
    pub valid_to: Option<NaiveDateTime>,
    pub result: Option<CalcResult>,
    pub insured_object: Option<InsuredObject>,
    pub creator: Option<User>,
    pub previous_policies: Option<PreviousPolicies>,
}

impl Policy {
    /// Creates a saved policy with the given validity start
    pub fn new(valid_from: NaiveDateTime) -> Self {
        Self {
            id: PolicyId::new(),
            number: None,
            status: PolicyStatus::Saved,
            created: valid_from,
            valid_from,
            valid_to: None,
            result: None,
            insured_object: None,
            creator: None,
            previous_policies: None,
        }
    }

    /// Whether this policy can be annulled as of `today`
    pub fn is_annulment_allowed(&self, today: NaiveDate) -> bool {
        is_annulment_allowed(self.status, Some(self.valid_from), today)
    }
}

/// Annulment rule
///
/// A policy may be annulled only while it is issued and its validity
/// start date is strictly in the past. Policies starting today or later,
/// or with no start date, cannot be annulled.
pub fn is_annulment_allowed(
    status: PolicyStatus,
    valid_from: Option<NaiveDateTime>,
    today: NaiveDate,
) -> bool {
    if status != PolicyStatus::Issued {
        return false;
    }
    valid_from.is_some_and(|from| from.date() < today)
}
