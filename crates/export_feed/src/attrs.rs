//! Feed attribute extraction
//!
//! Maps a validated policy and its related entities into the flat,
//! string-keyed attribute groups the external feed consumes. Three
//! groups are produced: policy-level, record-level, and (for vehicles)
//! car-level attributes.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use core_kernel::{
    add_months, feed_timestamp, inclusive_days, CarId, CredentialId, NaturalPersonId, PolicyId,
    RecordId,
};
use domain_party::{CredentialRegistry, CredentialTypeCode, OwnerRef, User};
use domain_policy::{
    Car, InsuranceTypeCode, InsuredObject, Policy, PreviousPolicies, ProductCatalog, Record,
    ResultStorage, RiskCode,
};

use crate::error::{FeedError, MissingDependency};
use crate::validate::validate_policy;

/// Fixed feed label of the optional-equipment risk
const OPTIONAL_EQUIPMENT_TITLE: &str = "Optional equipment";

/// One line of the risks table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskLine {
    pub insurance_sum: Decimal,
    pub title: String,
    pub insurance_premium: Decimal,
}

/// Policy-level feed attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyAttrs {
    pub policy: PolicyId,
    pub series: String,
    pub number: String,
    pub created: String,
    pub valid_from: String,
    pub valid_to: String,
    pub days_duration: i64,
    pub beneficiary: Option<NaturalPersonId>,
    pub creator_full_name: String,
    pub previous_policies: String,
}

/// Record-level feed attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordAttrs {
    pub record: RecordId,
    pub risks: Vec<RiskLine>,
    pub insurance_program_title: String,
    pub deductible_value: String,
}

/// Car detail attributes, present only when the mark/model reference
/// chain is complete
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarDetails {
    pub car_mark_model: String,
    pub rsa_car_id: String,
    pub car_credential: Option<CredentialId>,
}

/// Car-level feed attributes
///
/// A car with a missing mark, model, or model group degrades to the bare
/// reference; partial detail combinations are never produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarAttrs {
    pub car: CarId,
    #[serde(flatten)]
    pub details: Option<CarDetails>,
}

/// The complete attribute mapping for one policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedAttrs {
    pub policy: PolicyAttrs,
    pub record: RecordAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<CarAttrs>,
}

/// Extracts feed attributes from validated policies
///
/// Holds the reference data extraction needs: the insurance-type title
/// catalog and the credential registry. Each `extract` call is
/// independent and read-only.
pub struct FeedExporter<'a> {
    catalog: &'a ProductCatalog,
    credentials: &'a CredentialRegistry,
}

impl<'a> FeedExporter<'a> {
    pub fn new(catalog: &'a ProductCatalog, credentials: &'a CredentialRegistry) -> Self {
        Self {
            catalog,
            credentials,
        }
    }

    /// Produces the full attribute mapping for a policy
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingDependency`] when a mandatory related
    /// entity is absent; optional data never fails, it degrades to empty
    /// values.
    pub fn extract(&self, policy: &Policy) -> Result<FeedAttrs, FeedError> {
        validate_policy(policy)?;
        debug!(policy_id = %policy.id, "extracting feed attributes");

        let result = policy
            .result
            .as_ref()
            .ok_or_else(|| FeedError::missing(policy.id, MissingDependency::CalcResult))?;
        let storage = result
            .storage
            .as_ref()
            .ok_or_else(|| FeedError::missing(policy.id, MissingDependency::ResultStorage))?;
        let insured = policy
            .insured_object
            .as_ref()
            .ok_or_else(|| FeedError::missing(policy.id, MissingDependency::InsuredObject))?;

        Ok(FeedAttrs {
            policy: self.policy_attrs(policy, &result.record, insured)?,
            record: self.record_attrs(&result.record, storage),
            car: self.car_attrs(insured),
        })
    }

    fn policy_attrs(
        &self,
        policy: &Policy,
        record: &Record,
        insured: &InsuredObject,
    ) -> Result<PolicyAttrs, FeedError> {
        let (series, number) = policy
            .number
            .as_deref()
            .and_then(split_policy_number)
            .unwrap_or_default();

        let (valid_from, valid_to) = resolve_window(policy, record)?;

        let beneficiary = insured
            .beneficiary
            .as_ref()
            .and_then(|person| person.subject)
            .and_then(|subject| subject.natural_person());

        Ok(PolicyAttrs {
            policy: policy.id,
            series,
            number,
            created: feed_timestamp(policy.created),
            valid_from: feed_timestamp(valid_from),
            valid_to: feed_timestamp(valid_to),
            days_duration: inclusive_days(valid_from, valid_to),
            beneficiary,
            creator_full_name: policy
                .creator
                .as_ref()
                .map(User::full_name)
                .unwrap_or_default(),
            previous_policies: policy
                .previous_policies
                .as_ref()
                .map(PreviousPolicies::formatted)
                .unwrap_or_default(),
        })
    }

    fn record_attrs(&self, record: &Record, storage: &ResultStorage) -> RecordAttrs {
        let mut risks = vec![RiskLine {
            insurance_sum: record.insurance_sum,
            title: record.insurance_type.title.clone(),
            insurance_premium: storage.premium(RiskCode::Kasko),
        }];

        if record.is_gap_calculated {
            risks.push(RiskLine {
                insurance_sum: record.car_cost,
                title: self.catalog.title(InsuranceTypeCode::Gap).to_string(),
                insurance_premium: storage.premium(RiskCode::Gap),
            });
        }

        if record.is_accident_insured {
            risks.push(RiskLine {
                insurance_sum: record.casualty_cost,
                title: self.catalog.title(InsuranceTypeCode::Accident).to_string(),
                insurance_premium: storage.premium(RiskCode::Accident),
            });
        }

        if record.is_help_in_accident_insured {
            risks.push(RiskLine {
                insurance_sum: record.help_in_accident_cost,
                title: self
                    .catalog
                    .title(InsuranceTypeCode::HelpInAccident)
                    .to_string(),
                insurance_premium: storage.premium(RiskCode::HelpInAccident),
            });
        }

        if record.is_optional_equipment_insured {
            // An enabled flag without an equipment item contributes
            // nothing rather than a zero-sum line.
            if let Some(equipment) = &record.optional_equipment {
                risks.push(RiskLine {
                    insurance_sum: equipment.insurance_amount,
                    title: OPTIONAL_EQUIPMENT_TITLE.to_string(),
                    insurance_premium: storage.premium(RiskCode::OptionalEquipment),
                });
            }
        }

        RecordAttrs {
            record: record.id,
            risks,
            insurance_program_title: insurance_program_title(record),
            deductible_value: deductible_value(record),
        }
    }

    fn car_attrs(&self, insured: &InsuredObject) -> Option<CarAttrs> {
        let car = insured.item.as_car()?;
        Some(CarAttrs {
            car: car.id,
            details: self.car_details(car),
        })
    }

    fn car_details(&self, car: &Car) -> Option<CarDetails> {
        let mark = car.mark.as_ref()?;
        let model = car.model.as_ref()?;
        let group = model.model_group.as_ref()?;

        let car_credential = self
            .credentials
            .find_credential(OwnerRef::Car(car.id), CredentialTypeCode::VehicleRegistration)
            .map(|credential| credential.id);

        Some(CarDetails {
            car_mark_model: format!("{} {}", mark.title, group.title),
            rsa_car_id: model.rsa_car_id.clone(),
            car_credential,
        })
    }
}

/// Splits a policy number into `(series, number)`
///
/// The number format is `AAAA/BB/NNNNNN/REGION/YY`; the third segment is
/// the number, and the series is the remaining segments with a dash in
/// the number's place. Returns `None` for numbers that do not match the
/// template.
fn split_policy_number(policy_number: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = policy_number.split('/').collect();
    let [prefix, office, number, region, year] = segments.as_slice() else {
        return None;
    };
    let series = format!("{prefix}/{office}/-{region}/{year}");
    Some((series, (*number).to_string()))
}

/// Resolves the policy validity window
///
/// An unset `valid_to` is computed from `valid_from` plus the record's
/// configured duration in months, inclusive of the final day.
fn resolve_window(policy: &Policy, record: &Record) -> Result<(NaiveDateTime, NaiveDateTime), FeedError> {
    if let Some(valid_to) = policy.valid_to {
        return Ok((policy.valid_from, valid_to));
    }
    let duration = record
        .duration
        .ok_or_else(|| FeedError::missing(policy.id, MissingDependency::ValidityWindow))?;
    let valid_to = add_months(policy.valid_from, duration.months)? - Duration::days(1);
    Ok((policy.valid_from, valid_to))
}

/// Extracts the numeric value from the deductible title
///
/// `"16 000 rub"` becomes `"16000"`; a record without a deductible
/// yields an empty string.
fn deductible_value(record: &Record) -> String {
    record
        .deductible
        .as_ref()
        .map(|deductible| {
            deductible
                .title
                .chars()
                .filter(char::is_ascii_digit)
                .collect()
        })
        .unwrap_or_default()
}

/// Resolves the insurance program title shown in the feed
///
/// Only Kasko records with a program group have one: special groups show
/// the concrete program's title, regular groups their own.
fn insurance_program_title(record: &Record) -> String {
    if record.insurance_type.code != InsuranceTypeCode::Kasko {
        return String::new();
    }
    match &record.program_group {
        None => String::new(),
        Some(group) if group.is_special() => record
            .program
            .as_ref()
            .map(|program| program.title.clone())
            .unwrap_or_default(),
        Some(group) => group.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_policy::Deductible;
    use domain_policy::InsuranceType;

    #[test]
    fn test_split_policy_number() {
        let (series, number) = split_policy_number("5/12/002765/KAZ/17").unwrap();
        assert_eq!(series, "5/12/-KAZ/17");
        assert_eq!(number, "002765");
    }

    #[test]
    fn test_split_policy_number_rejects_wrong_segment_count() {
        assert!(split_policy_number("5/12/002765").is_none());
        assert!(split_policy_number("").is_none());
    }

    #[test]
    fn test_deductible_value_strips_non_digits() {
        let mut record = Record::new(InsuranceType::new(InsuranceTypeCode::Kasko, "Kasko"));
        record.deductible = Some(Deductible::new("16 000 rub"));
        assert_eq!(deductible_value(&record), "16000");
    }

    #[test]
    fn test_deductible_value_empty_without_deductible() {
        let record = Record::new(InsuranceType::new(InsuranceTypeCode::Kasko, "Kasko"));
        assert_eq!(deductible_value(&record), "");
    }
}
