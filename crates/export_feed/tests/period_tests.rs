//! Unit and property tests for print period calculation

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use export_feed::{policy_periods, split_periods, FeedError, PolicyPeriod};
use test_utils::{TemporalFixtures, TestPolicyBuilder};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_canonical_two_year_split() {
    let periods = split_periods(
        TemporalFixtures::print_window_start(),
        TemporalFixtures::print_window_end(),
    )
    .unwrap();

    assert_eq!(
        periods,
        vec![
            PolicyPeriod {
                valid_from: dt(2018, 4, 4),
                valid_to: dt(2019, 4, 3),
            },
            PolicyPeriod {
                valid_from: dt(2019, 4, 4),
                valid_to: dt(2020, 4, 3),
            },
        ]
    );
}

#[test]
fn test_window_slightly_over_one_year() {
    let periods = split_periods(dt(2018, 4, 4), dt(2019, 4, 4)).unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].valid_to, dt(2019, 4, 3));
    assert_eq!(periods[1].valid_from, dt(2019, 4, 4));
    assert_eq!(periods[1].valid_to, dt(2019, 4, 4));
}

#[test]
fn test_policy_periods_uses_policy_window() {
    let policy = TestPolicyBuilder::new()
        .map(|p| {
            p.valid_from = TemporalFixtures::print_window_start();
            p.valid_to = Some(TemporalFixtures::print_window_end());
        })
        .build();

    let periods = policy_periods(&policy).unwrap();
    assert_eq!(periods.len(), 2);
}

#[test]
fn test_policy_periods_requires_valid_to() {
    let policy = TestPolicyBuilder::new().map(|p| p.valid_to = None).build();
    let err = policy_periods(&policy).unwrap_err();
    assert!(matches!(err, FeedError::MissingDependency { .. }));
}

proptest! {
    /// Periods always cover the whole window in order, with no gaps and
    /// no overlaps.
    #[test]
    fn prop_periods_tile_the_window(offset_days in 0i64..1460) {
        let valid_from = dt(2015, 6, 15);
        let valid_to = valid_from + Duration::days(offset_days);

        let periods = split_periods(valid_from, valid_to).unwrap();

        prop_assert!(!periods.is_empty());
        prop_assert_eq!(periods.first().unwrap().valid_from, valid_from);
        prop_assert_eq!(periods.last().unwrap().valid_to, valid_to);

        for window in periods.windows(2) {
            prop_assert_eq!(
                window[1].valid_from,
                window[0].valid_to + Duration::days(1)
            );
        }

        for period in &periods {
            prop_assert!(period.valid_from <= period.valid_to);
            // No sub-period may exceed one calendar year.
            prop_assert!(period.valid_to - period.valid_from < Duration::days(366));
        }
    }
}
