//! Risk records
//!
//! A `Record` holds the financial attributes of the insured item and the
//! flags that enable each optional risk. It is the input to premium
//! calculation and the source of most record-level feed attributes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::RecordId;

use crate::insurance::{InsuranceProgram, InsuranceProgramGroup, InsuranceType};

/// Configured insurance duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceDuration {
    pub months: u32,
}

impl InsuranceDuration {
    pub fn new(months: u32) -> Self {
        Self { months }
    }
}

/// Optional equipment covered alongside the car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalEquipment {
    pub cost: Decimal,
    pub insurance_amount: Decimal,
}

/// A deductible option as configured in the product reference data
///
/// The title is a human-readable amount (for example `"16 000 rub"`);
/// the feed extracts the digits from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductible {
    pub title: String,
}

impl Deductible {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Insured-item financial attributes and risk enablement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Sum insured under the base Kasko risk
    pub insurance_sum: Decimal,
    /// Car cost, insured under GAP when enabled
    pub car_cost: Decimal,
    /// Casualty cost, insured under the accident risk when enabled
    pub casualty_cost: Decimal,
    /// Cover limit of the help-in-accident risk when enabled
    pub help_in_accident_cost: Decimal,
    pub is_gap_calculated: bool,
    pub is_accident_insured: bool,
    pub is_help_in_accident_insured: bool,
    pub is_optional_equipment_insured: bool,
    pub optional_equipment: Option<OptionalEquipment>,
    pub insurance_type: InsuranceType,
    pub program_group: Option<InsuranceProgramGroup>,
    pub program: Option<InsuranceProgram>,
    pub deductible: Option<Deductible>,
    pub duration: Option<InsuranceDuration>,
}

impl Record {
    /// Creates a record with all risks disabled and zero sums
    pub fn new(insurance_type: InsuranceType) -> Self {
        Self {
            id: RecordId::new(),
            insurance_sum: Decimal::ZERO,
            car_cost: Decimal::ZERO,
            casualty_cost: Decimal::ZERO,
            help_in_accident_cost: Decimal::ZERO,
            is_gap_calculated: false,
            is_accident_insured: false,
            is_help_in_accident_insured: false,
            is_optional_equipment_insured: false,
            optional_equipment: None,
            insurance_type,
            program_group: None,
            program: None,
            deductible: None,
            duration: None,
        }
    }
}
