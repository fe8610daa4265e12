//! Policy Domain
//!
//! This crate models the policy side of the export core: the policy
//! entity with its validity window and status, the insurance calculation
//! it was issued from (result, risk record, premium storage), and the
//! insured object (a car with its mark/model hierarchy).
//!
//! The domain layer is infrastructure-agnostic. Entities arrive here
//! already loaded by an external persistence layer; everything in this
//! crate is synchronous, read-only computation over those values.

pub mod error;
pub mod insurance;
pub mod insured_object;
pub mod policy;
pub mod record;
pub mod result;

pub use error::PolicyError;
pub use insurance::{
    InsuranceProgram, InsuranceProgramGroup, InsuranceType, InsuranceTypeCode,
    ProductCatalog, ProgramGroupKind,
};
pub use insured_object::{Car, CarMark, CarModel, CarModelGroup, InsuredItem, InsuredObject};
pub use policy::{is_annulment_allowed, Policy, PolicyStatus, PreviousPolicies};
pub use record::{Deductible, InsuranceDuration, OptionalEquipment, Record};
pub use result::{CalcResult, ResultStorage, RiskCode};
