//! Policy Export Pipeline
//!
//! Turns an already-loaded, issued policy into the flat attribute
//! mapping submitted to the external insurer feed, and computes the
//! yearly sub-periods shown on printed policy forms.
//!
//! Data flows one way:
//!
//! ```text
//! Policy (+ related entities) -> validate -> extract -> FeedAttrs
//! ```
//!
//! Extraction is synchronous and side-effect-free. The only failure mode
//! is a missing mandatory dependency caught up front by the validator;
//! absent optional data degrades to empty values instead of failing.

pub mod attrs;
pub mod error;
pub mod periods;
pub mod validate;

pub use attrs::{CarAttrs, CarDetails, FeedAttrs, FeedExporter, PolicyAttrs, RecordAttrs, RiskLine};
pub use error::{FeedError, MissingDependency};
pub use periods::{policy_periods, split_periods, PolicyPeriod};
pub use validate::validate_policy;
