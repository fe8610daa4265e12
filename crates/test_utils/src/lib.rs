//! Shared test utilities for the policy export core
//!
//! Builders construct exportable policies with sensible defaults so
//! tests only specify the fields they care about; fixtures provide the
//! canonical timestamps and strings the feed tests assert against.

pub mod builders;
pub mod fixtures;

pub use builders::{
    beneficiary_person, complete_car, test_creator, test_natural_person, TestPolicyBuilder,
    TestRecordBuilder,
};
pub use fixtures::{StringFixtures, TemporalFixtures};
