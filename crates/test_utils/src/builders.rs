//! Test data builders
//!
//! Builder patterns for constructing exportable policies with sensible
//! defaults. Person and user names are generated with `fake`, mirroring
//! how reference data looks in production.

use fake::faker::internet::en::Username;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_party::{NaturalPerson, Person, PersonSubject, User};
use domain_policy::{
    CalcResult, Car, CarMark, CarModel, CarModelGroup, InsuranceType, InsuranceTypeCode,
    InsuredObject, Policy, PolicyStatus, PreviousPolicies, Record, ResultStorage,
};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// A user account with generated names
pub fn test_creator() -> User {
    User::new(
        Username().fake::<String>(),
        FirstName().fake::<String>(),
        LastName().fake::<String>(),
    )
}

/// A natural person with generated names
pub fn test_natural_person() -> NaturalPerson {
    NaturalPerson::new(FirstName().fake::<String>(), LastName().fake::<String>())
}

/// A person record designating `natural_person` as beneficiary subject
pub fn beneficiary_person(natural_person: &NaturalPerson) -> Person {
    Person::new(TemporalFixtures::valid_from())
        .with_beneficiary("bank")
        .with_subject(PersonSubject::Natural(natural_person.id))
}

/// A car with the full mark/model/model-group reference chain
pub fn complete_car() -> Car {
    Car::new()
        .with_mark(CarMark::new("BMW"))
        .with_model(CarModel::new("111").with_model_group(CarModelGroup::new("46")))
}

/// Builder for risk records
pub struct TestRecordBuilder {
    record: Record,
}

impl TestRecordBuilder {
    /// A Kasko record with the canonical insurance sum and no optional
    /// risks
    pub fn new() -> Self {
        let mut record = Record::new(InsuranceType::new(InsuranceTypeCode::Kasko, "Kasko"));
        record.insurance_sum = dec!(700000);
        Self { record }
    }

    pub fn with_insurance_type(mut self, insurance_type: InsuranceType) -> Self {
        self.record.insurance_type = insurance_type;
        self
    }

    pub fn with_insurance_sum(mut self, sum: Decimal) -> Self {
        self.record.insurance_sum = sum;
        self
    }

    /// Applies any mutation to the record under construction
    pub fn map(mut self, f: impl FnOnce(&mut Record)) -> Self {
        f(&mut self.record);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

impl Default for TestRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for exportable policies
///
/// Defaults to an issued policy with the canonical number and validity
/// window, a Kasko record with empty premium storage, and a bare car as
/// the insured object.
pub struct TestPolicyBuilder {
    policy: Policy,
}

impl TestPolicyBuilder {
    pub fn new() -> Self {
        let record = TestRecordBuilder::new().build();
        let mut policy = Policy::new(TemporalFixtures::valid_from());
        policy.number = Some(StringFixtures::policy_number().to_string());
        policy.status = PolicyStatus::Issued;
        policy.valid_to = Some(TemporalFixtures::valid_to());
        policy.result =
            Some(CalcResult::new(record, "Test Insurance Co").with_storage(ResultStorage::new()));
        policy.insured_object = Some(InsuredObject::car(Car::new()));
        policy.creator = Some(test_creator());
        Self { policy }
    }

    pub fn with_number(mut self, number: Option<&str>) -> Self {
        self.policy.number = number.map(str::to_string);
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.policy.result =
            Some(CalcResult::new(record, "Test Insurance Co").with_storage(ResultStorage::new()));
        self
    }

    pub fn with_storage(mut self, storage: ResultStorage) -> Self {
        if let Some(result) = &mut self.policy.result {
            result.storage = Some(storage);
        }
        self
    }

    pub fn without_result(mut self) -> Self {
        self.policy.result = None;
        self
    }

    pub fn without_storage(mut self) -> Self {
        if let Some(result) = &mut self.policy.result {
            result.storage = None;
        }
        self
    }

    pub fn with_insured_object(mut self, insured_object: Option<InsuredObject>) -> Self {
        self.policy.insured_object = insured_object;
        self
    }

    pub fn with_creator(mut self, creator: Option<User>) -> Self {
        self.policy.creator = creator;
        self
    }

    pub fn with_previous_policies(mut self, previous: Option<PreviousPolicies>) -> Self {
        self.policy.previous_policies = previous;
        self
    }

    /// Applies any mutation to the policy under construction
    pub fn map(mut self, f: impl FnOnce(&mut Policy)) -> Self {
        f(&mut self.policy);
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
