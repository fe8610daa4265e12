//! Pre-built test fixtures
//!
//! Canonical, predictable values shared across the test suite.

use chrono::{NaiveDate, NaiveDateTime};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Canonical policy validity start (2018-05-05T05:05:05)
    pub fn valid_from() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 5, 5)
            .unwrap()
            .and_hms_opt(5, 5, 5)
            .unwrap()
    }

    /// Canonical policy validity end (2019-04-04T05:05:05)
    pub fn valid_to() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 4, 4)
            .unwrap()
            .and_hms_opt(5, 5, 5)
            .unwrap()
    }

    /// Start of the canonical two-year print window
    pub fn print_window_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 4, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// End of the canonical two-year print window
    pub fn print_window_end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 4, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Canonical policy number in the feed template
    pub fn policy_number() -> &'static str {
        "5/12/002765/КАЗ/17"
    }

    /// Series expected for the canonical policy number
    pub fn policy_series() -> &'static str {
        "5/12/-КАЗ/17"
    }

    /// Deductible reference title with grouped digits
    pub fn deductible_title() -> &'static str {
        "16 000 руб"
    }
}
