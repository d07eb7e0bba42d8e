//! Property tests for daily streak reconciliation.

use chrono::{Duration, NaiveDate};
use lumbapp_core::{reconcile, StreakTransition};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~80 years
    (0i64..30_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn first_visit_ignores_previous_streak(today in any_date(), streak in any::<u32>()) {
        let r = reconcile(None, streak, today);
        prop_assert_eq!(r.streak, 1);
        prop_assert_eq!(r.last_visit, today);
        prop_assert_eq!(r.transition, StreakTransition::FirstVisit);
    }

    #[test]
    fn consecutive_day_increments(today in any_date(), streak in 0u32..1_000_000) {
        let r = reconcile(Some(today - Duration::days(1)), streak, today);
        prop_assert_eq!(r.streak, streak + 1);
        prop_assert_eq!(r.last_visit, today);
    }

    #[test]
    fn gap_of_two_or_more_resets(today in any_date(), gap in 2i64..5_000, streak in any::<u32>()) {
        let r = reconcile(Some(today - Duration::days(gap)), streak, today);
        prop_assert_eq!(r.streak, 1);
        prop_assert_eq!(r.last_visit, today);
        prop_assert_eq!(r.transition, StreakTransition::Reset);
    }

    #[test]
    fn future_last_visit_resets(today in any_date(), ahead in 1i64..5_000, streak in any::<u32>()) {
        let r = reconcile(Some(today + Duration::days(ahead)), streak, today);
        prop_assert_eq!(r.streak, 1);
        prop_assert_eq!(r.last_visit, today);
    }

    #[test]
    fn same_day_reconciliation_is_idempotent(
        previous in proptest::option::of(any_date()),
        streak in 0u32..1_000_000,
        today in any_date(),
    ) {
        let first = reconcile(previous, streak, today);
        let second = reconcile(Some(first.last_visit), first.streak, today);
        prop_assert_eq!(second.streak, first.streak);
        prop_assert_eq!(second.last_visit, first.last_visit);
        prop_assert!(!second.needs_persist());
    }
}

#[test]
fn concrete_week_of_visits() {
    let d = |day| NaiveDate::from_ymd_opt(2025, 10, day).unwrap();

    let r = reconcile(Some(d(20)), 3, d(21));
    assert_eq!((r.streak, r.last_visit), (4, d(21)));

    let again = reconcile(Some(r.last_visit), r.streak, d(21));
    assert_eq!((again.streak, again.last_visit), (4, d(21)));

    let later = reconcile(Some(d(20)), 3, d(25));
    assert_eq!((later.streak, later.last_visit), (1, d(25)));
}
