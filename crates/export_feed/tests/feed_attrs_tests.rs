//! Unit tests for the feed export pipeline
//!
//! Covers pre-export validation, the three attribute groups, and the
//! degradation rules for absent optional data.

use rust_decimal_macros::dec;

use domain_party::{Credential, CredentialRegistry, CredentialTypeCode, OwnerRef};
use domain_policy::{
    Car, CarMark, CarModel, CarModelGroup, Deductible, InsuranceDuration, InsuranceProgram,
    InsuranceProgramGroup, InsuranceType, InsuranceTypeCode, InsuredItem, InsuredObject,
    OptionalEquipment, PreviousPolicies, ProductCatalog, ProgramGroupKind, ResultStorage,
    RiskCode,
};
use export_feed::{FeedAttrs, FeedError, FeedExporter};
use test_utils::{
    beneficiary_person, complete_car, test_natural_person, StringFixtures, TemporalFixtures,
    TestPolicyBuilder, TestRecordBuilder,
};

fn extract(policy: &domain_policy::Policy) -> Result<FeedAttrs, FeedError> {
    let catalog = ProductCatalog::standard();
    let registry = CredentialRegistry::new();
    FeedExporter::new(&catalog, &registry).extract(policy)
}

mod validation {
    use super::*;
    use export_feed::validate_policy;

    #[test]
    fn test_exportable_policy_passes() {
        let policy = TestPolicyBuilder::new().build();
        assert!(validate_policy(&policy).is_ok());
    }

    #[test]
    fn test_missing_result() {
        let policy = TestPolicyBuilder::new().without_result().build();
        let err = validate_policy(&policy).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("calculation result"), "{message}");
        assert!(message.contains(&policy.id.to_string()), "{message}");
    }

    #[test]
    fn test_missing_storage() {
        let policy = TestPolicyBuilder::new().without_storage().build();
        let err = validate_policy(&policy).unwrap_err();
        assert!(err.to_string().contains("result storage"));
    }

    #[test]
    fn test_missing_insured_object() {
        let policy = TestPolicyBuilder::new().with_insured_object(None).build();
        let err = validate_policy(&policy).unwrap_err();
        assert!(err.to_string().contains("insured object"));
    }

    #[test]
    fn test_missing_policy_number() {
        let policy = TestPolicyBuilder::new().with_number(None).build();
        let err = validate_policy(&policy).unwrap_err();
        assert!(err.to_string().contains("policy number"));
    }

    #[test]
    fn test_empty_policy_number() {
        let policy = TestPolicyBuilder::new().with_number(Some("")).build();
        assert!(validate_policy(&policy).is_err());
    }
}

mod policy_attrs {
    use super::*;

    #[test]
    fn test_number_and_series() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.series, StringFixtures::policy_series());
        assert_eq!(attrs.policy.number, "002765");
    }

    #[test]
    fn test_malformed_number_degrades_to_empty() {
        let policy = TestPolicyBuilder::new().with_number(Some("FREEFORM-1")).build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.series, "");
        assert_eq!(attrs.policy.number, "");
    }

    #[test]
    fn test_timestamps_and_duration() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.created, "2018-05-05T05:05:05");
        assert_eq!(attrs.policy.valid_from, "2018-05-05T05:05:05");
        assert_eq!(attrs.policy.valid_to, "2019-04-04T05:05:05");
        assert_eq!(attrs.policy.days_duration, 335);
    }

    #[test]
    fn test_valid_to_resolved_from_duration() {
        let record = TestRecordBuilder::new()
            .map(|r| r.duration = Some(InsuranceDuration::new(11)))
            .build();
        let policy = TestPolicyBuilder::new()
            .with_record(record)
            .map(|p| p.valid_to = None)
            .build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.valid_to, "2019-04-04T05:05:05");
        assert_eq!(attrs.policy.days_duration, 335);
    }

    #[test]
    fn test_unresolvable_window_is_an_error() {
        let policy = TestPolicyBuilder::new().map(|p| p.valid_to = None).build();
        let err = extract(&policy).unwrap_err();
        assert!(err.to_string().contains("validity window"));
    }

    #[test]
    fn test_beneficiary_reference() {
        let natural_person = test_natural_person();
        let insured = InsuredObject::car(Car::new())
            .with_beneficiary(beneficiary_person(&natural_person));
        let policy = TestPolicyBuilder::new()
            .with_insured_object(Some(insured))
            .build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.beneficiary, Some(natural_person.id));
    }

    #[test]
    fn test_no_beneficiary() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.beneficiary, None);
    }

    #[test]
    fn test_creator_full_name() {
        let policy = TestPolicyBuilder::new().build();
        let expected = policy.creator.as_ref().unwrap().full_name();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.creator_full_name, expected);
    }

    #[test]
    fn test_mapping_previous_policies() {
        let previous = PreviousPolicies::parse(r#"{"0": "312", "1": "555"}"#).unwrap();
        let policy = TestPolicyBuilder::new()
            .with_previous_policies(Some(previous))
            .build();
        let attrs = extract(&policy).unwrap();
        assert!(["312, 555", "555, 312"].contains(&attrs.policy.previous_policies.as_str()));
    }

    #[test]
    fn test_list_previous_policies() {
        let previous = PreviousPolicies::parse(r#"["312", "555"]"#).unwrap();
        let policy = TestPolicyBuilder::new()
            .with_previous_policies(Some(previous))
            .build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.previous_policies, "312, 555");
    }

    #[test]
    fn test_already_formatted_previous_policies() {
        let previous = PreviousPolicies::Formatted("312, 555".to_string());
        let policy = TestPolicyBuilder::new()
            .with_previous_policies(Some(previous))
            .build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.policy.previous_policies, "");
    }
}

mod record_attrs {
    use super::*;

    fn storage_with(code: RiskCode, premium: rust_decimal::Decimal) -> ResultStorage {
        ResultStorage::new().with_premium(code, premium)
    }

    #[test]
    fn test_base_risk_is_unconditional() {
        let policy = TestPolicyBuilder::new()
            .with_storage(storage_with(RiskCode::Kasko, dec!(111)))
            .build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.risks.len(), 1);
        let kasko = &attrs.record.risks[0];
        assert_eq!(kasko.insurance_sum, dec!(700000));
        assert_eq!(kasko.title, "Kasko");
        assert_eq!(kasko.insurance_premium, dec!(111));
    }

    #[test]
    fn test_gap_risk() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.is_gap_calculated = true;
                r.car_cost = dec!(500000);
            })
            .build();
        let policy = TestPolicyBuilder::new()
            .with_record(record)
            .with_storage(storage_with(RiskCode::Gap, dec!(222)))
            .build();

        let attrs = extract(&policy).unwrap();
        let gap = attrs.record.risks.iter().find(|r| r.title == "GAP").unwrap();
        assert_eq!(gap.insurance_sum, dec!(500000));
        assert_eq!(gap.insurance_premium, dec!(222));
    }

    #[test]
    fn test_accident_risk() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.is_accident_insured = true;
                r.casualty_cost = dec!(5000);
            })
            .build();
        let policy = TestPolicyBuilder::new()
            .with_record(record)
            .with_storage(storage_with(RiskCode::Accident, dec!(333)))
            .build();

        let attrs = extract(&policy).unwrap();
        let accident = attrs
            .record
            .risks
            .iter()
            .find(|r| r.title == "Accident insurance")
            .unwrap();
        assert_eq!(accident.insurance_sum, dec!(5000));
        assert_eq!(accident.insurance_premium, dec!(333));
    }

    #[test]
    fn test_help_in_accident_risk() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.is_help_in_accident_insured = true;
                r.help_in_accident_cost = dec!(100000);
            })
            .build();
        let policy = TestPolicyBuilder::new()
            .with_record(record)
            .with_storage(storage_with(RiskCode::HelpInAccident, dec!(444)))
            .build();

        let attrs = extract(&policy).unwrap();
        let help = attrs
            .record
            .risks
            .iter()
            .find(|r| r.title == "Help in accident")
            .unwrap();
        assert_eq!(help.insurance_sum, dec!(100000));
        assert_eq!(help.insurance_premium, dec!(444));
    }

    #[test]
    fn test_optional_equipment_risk_uses_fixed_label() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.is_optional_equipment_insured = true;
                r.optional_equipment = Some(OptionalEquipment {
                    cost: dec!(300000),
                    insurance_amount: dec!(50000),
                });
            })
            .build();
        let policy = TestPolicyBuilder::new()
            .with_record(record)
            .with_storage(storage_with(RiskCode::OptionalEquipment, dec!(555)))
            .build();

        let attrs = extract(&policy).unwrap();
        let equipment = attrs
            .record
            .risks
            .iter()
            .find(|r| r.title == "Optional equipment")
            .unwrap();
        assert_eq!(equipment.insurance_sum, dec!(50000));
        assert_eq!(equipment.insurance_premium, dec!(555));
    }

    #[test]
    fn test_enabled_equipment_flag_without_item_adds_no_line() {
        let record = TestRecordBuilder::new()
            .map(|r| r.is_optional_equipment_insured = true)
            .build();
        let policy = TestPolicyBuilder::new().with_record(record).build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.risks.len(), 1);
    }

    #[test]
    fn test_absent_premium_reads_as_zero() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.risks[0].insurance_premium, dec!(0));
    }

    #[test]
    fn test_deductible_value() {
        let record = TestRecordBuilder::new()
            .map(|r| r.deductible = Some(Deductible::new(StringFixtures::deductible_title())))
            .build();
        let policy = TestPolicyBuilder::new().with_record(record).build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.deductible_value, "16000");
    }

    #[test]
    fn test_empty_deductible_value() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.deductible_value, "");
    }

    #[test]
    fn test_program_title_empty_for_non_kasko() {
        let record = TestRecordBuilder::new()
            .with_insurance_type(InsuranceType::new(
                InsuranceTypeCode::HelpInAccident,
                "Help in accident",
            ))
            .map(|r| {
                r.program_group = Some(InsuranceProgramGroup::new(
                    ProgramGroupKind::Standard,
                    "first group",
                ));
            })
            .build();
        let policy = TestPolicyBuilder::new().with_record(record).build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.insurance_program_title, "");
    }

    #[test]
    fn test_program_title_empty_without_group() {
        let policy = TestPolicyBuilder::new().build();
        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.insurance_program_title, "");
    }

    #[test]
    fn test_program_title_from_special_group() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.program_group = Some(InsuranceProgramGroup::new(
                    ProgramGroupKind::Special,
                    "Specials",
                ));
                r.program = Some(InsuranceProgram::new("first program"));
            })
            .build();
        let policy = TestPolicyBuilder::new().with_record(record).build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.insurance_program_title, "first program");
    }

    #[test]
    fn test_program_title_from_standard_group() {
        let record = TestRecordBuilder::new()
            .map(|r| {
                r.program_group = Some(InsuranceProgramGroup::new(
                    ProgramGroupKind::Standard,
                    "first group",
                ));
            })
            .build();
        let policy = TestPolicyBuilder::new().with_record(record).build();

        let attrs = extract(&policy).unwrap();
        assert_eq!(attrs.record.insurance_program_title, "first group");
    }
}

mod car_attrs {
    use super::*;

    fn policy_with_car(car: Car) -> domain_policy::Policy {
        TestPolicyBuilder::new()
            .with_insured_object(Some(InsuredObject::car(car)))
            .build()
    }

    #[test]
    fn test_complete_car_with_credential() {
        let car = complete_car();
        let credential = Credential::new(
            CredentialTypeCode::VehicleRegistration,
            OwnerRef::Car(car.id),
        );
        let credential_id = credential.id;

        let mut registry = CredentialRegistry::new();
        registry.add_credential(credential);

        let catalog = ProductCatalog::standard();
        let exporter = FeedExporter::new(&catalog, &registry);
        let attrs = exporter.extract(&policy_with_car(car)).unwrap();

        let car_attrs = attrs.car.unwrap();
        let details = car_attrs.details.unwrap();
        assert_eq!(details.car_mark_model, "BMW 46");
        assert_eq!(details.rsa_car_id, "111");
        assert_eq!(details.car_credential, Some(credential_id));
    }

    #[test]
    fn test_complete_car_without_credential() {
        let attrs = extract(&policy_with_car(complete_car())).unwrap();
        let details = attrs.car.unwrap().details.unwrap();
        assert_eq!(details.car_credential, None);
    }

    #[test]
    fn test_car_without_mark_degrades() {
        let mut car = complete_car();
        car.mark = None;
        let attrs = extract(&policy_with_car(car)).unwrap();
        assert!(attrs.car.unwrap().details.is_none());
    }

    #[test]
    fn test_car_without_model_degrades() {
        let mut car = complete_car();
        car.model = None;
        let attrs = extract(&policy_with_car(car)).unwrap();
        assert!(attrs.car.unwrap().details.is_none());
    }

    #[test]
    fn test_car_without_model_group_degrades() {
        let car = Car::new()
            .with_mark(CarMark::new("BMW"))
            .with_model(CarModel::new("111"));
        let attrs = extract(&policy_with_car(car)).unwrap();
        assert!(attrs.car.unwrap().details.is_none());
    }

    #[test]
    fn test_non_vehicle_insured_object_has_no_car_attrs() {
        let insured = InsuredObject::new(InsuredItem::Other {
            description: "equipment".to_string(),
        });
        let policy = TestPolicyBuilder::new()
            .with_insured_object(Some(insured))
            .build();
        let attrs = extract(&policy).unwrap();
        assert!(attrs.car.is_none());
    }

    #[test]
    fn test_degraded_car_serializes_bare_reference() {
        let mut car = complete_car();
        car.mark = None;
        let attrs = extract(&policy_with_car(car)).unwrap();

        let json = serde_json::to_value(&attrs).unwrap();
        let car_map = json["car"].as_object().unwrap();
        assert_eq!(car_map.len(), 1);
        assert!(car_map.contains_key("car"));
    }
}
