//! Insurance products: types, programs, and the title catalog
//!
//! A risk record is priced against one insurance type (Kasko, GAP,
//! accident, help-in-accident). Kasko records may additionally carry a
//! program group; "special" groups resolve titles from the specific
//! program, regular groups from the group itself.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed insurance type codes known to the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceTypeCode {
    /// Base comprehensive motor insurance
    Kasko,
    /// Guaranteed asset protection
    Gap,
    /// Accident (casualty) insurance
    Accident,
    /// Help-in-accident liability extension
    HelpInAccident,
}

/// An insurance type as configured for a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceType {
    pub code: InsuranceTypeCode,
    pub title: String,
}

impl InsuranceType {
    pub fn new(code: InsuranceTypeCode, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
        }
    }
}

/// Program group classification
///
/// Special groups point at a concrete program whose title is shown in
/// the feed; standard groups are shown by their own title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramGroupKind {
    Special,
    Standard,
}

/// A group of insurance programs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceProgramGroup {
    pub kind: ProgramGroupKind,
    pub title: String,
}

impl InsuranceProgramGroup {
    pub fn new(kind: ProgramGroupKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }

    pub fn is_special(&self) -> bool {
        self.kind == ProgramGroupKind::Special
    }
}

/// A concrete insurance program within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceProgram {
    pub title: String,
}

impl InsuranceProgram {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

static STANDARD_TITLES: Lazy<HashMap<InsuranceTypeCode, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (InsuranceTypeCode::Kasko, "Kasko"),
        (InsuranceTypeCode::Gap, "GAP"),
        (InsuranceTypeCode::Accident, "Accident insurance"),
        (InsuranceTypeCode::HelpInAccident, "Help in accident"),
    ])
});

/// Lookup table of insurance type titles
///
/// The upstream system keeps these in a reference table; here they are
/// supplied by the caller (or taken from the standard catalog) so that
/// attribute extraction stays a pure function.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    titles: HashMap<InsuranceTypeCode, String>,
}

impl ProductCatalog {
    /// Catalog with the standard feed titles
    pub fn standard() -> Self {
        Self {
            titles: STANDARD_TITLES
                .iter()
                .map(|(code, title)| (*code, (*title).to_string()))
                .collect(),
        }
    }

    /// Creates an empty catalog
    pub fn empty() -> Self {
        Self {
            titles: HashMap::new(),
        }
    }

    /// Overrides the title for a type code
    pub fn with_title(mut self, code: InsuranceTypeCode, title: impl Into<String>) -> Self {
        self.titles.insert(code, title.into());
        self
    }

    /// Returns the title for a type code, or an empty string if the
    /// catalog does not know it
    pub fn title(&self, code: InsuranceTypeCode) -> &str {
        self.titles.get(&code).map(String::as_str).unwrap_or("")
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_knows_all_codes() {
        let catalog = ProductCatalog::standard();
        assert_eq!(catalog.title(InsuranceTypeCode::Gap), "GAP");
        assert!(!catalog.title(InsuranceTypeCode::HelpInAccident).is_empty());
    }

    #[test]
    fn test_unknown_code_yields_empty_title() {
        let catalog = ProductCatalog::empty();
        assert_eq!(catalog.title(InsuranceTypeCode::Kasko), "");
    }

    #[test]
    fn test_with_title_overrides() {
        let catalog = ProductCatalog::standard().with_title(InsuranceTypeCode::Kasko, "KASKO");
        assert_eq!(catalog.title(InsuranceTypeCode::Kasko), "KASKO");
    }

    #[test]
    fn test_special_group() {
        let group = InsuranceProgramGroup::new(ProgramGroupKind::Special, "Specials");
        assert!(group.is_special());
    }
}
