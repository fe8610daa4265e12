//! Calculation results and premium storage
//!
//! A `CalcResult` ties a risk record to the insurance company it was
//! priced for. Its `ResultStorage` keeps the per-risk premium amounts
//! keyed by the fixed risk codes the feed expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::ResultId;

use crate::record::Record;

/// Fixed risk codes used as premium storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCode {
    #[serde(rename = "Skasko")]
    Kasko,
    #[serde(rename = "Sgap")]
    Gap,
    #[serde(rename = "Sns")]
    Accident,
    #[serde(rename = "Sdgo")]
    HelpInAccident,
    #[serde(rename = "Sdo")]
    OptionalEquipment,
}

impl RiskCode {
    /// Wire name of the storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCode::Kasko => "Skasko",
            RiskCode::Gap => "Sgap",
            RiskCode::Accident => "Sns",
            RiskCode::HelpInAccident => "Sdgo",
            RiskCode::OptionalEquipment => "Sdo",
        }
    }
}

/// Per-risk premium amounts attached to a calculation result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultStorage {
    data: HashMap<RiskCode, Decimal>,
}

impl ResultStorage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the premium for a risk code
    pub fn with_premium(mut self, code: RiskCode, premium: Decimal) -> Self {
        self.data.insert(code, premium);
        self
    }

    pub fn set_premium(&mut self, code: RiskCode, premium: Decimal) {
        self.data.insert(code, premium);
    }

    /// Premium for a risk code; absent codes read as zero
    pub fn premium(&self, code: RiskCode) -> Decimal {
        self.data.get(&code).copied().unwrap_or(Decimal::ZERO)
    }
}

/// The computed insurance calculation a policy was issued from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    pub id: ResultId,
    pub record: Record,
    pub storage: Option<ResultStorage>,
    pub insurance_company: String,
}

impl CalcResult {
    pub fn new(record: Record, insurance_company: impl Into<String>) -> Self {
        Self {
            id: ResultId::new(),
            record,
            storage: None,
            insurance_company: insurance_company.into(),
        }
    }

    pub fn with_storage(mut self, storage: ResultStorage) -> Self {
        self.storage = Some(storage);
        self
    }
}
