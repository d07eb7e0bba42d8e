//! Daily visit streak reconciliation.
//!
//! Once per session the stored `(last_visit, streak)` pair is compared with
//! the local calendar date. Comparison is done on calendar dates rather than
//! elapsed time, so a daylight-saving shift can never turn "yesterday" into
//! "two days ago".

use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Which branch of the reconciliation was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// No visit was ever recorded.
    FirstVisit,
    /// Already counted today.
    SameDay,
    /// The previous visit was yesterday.
    Continued,
    /// Missed at least one day, or the clock went backwards.
    Reset,
}

/// Result of reconciling the stored streak against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub transition: StreakTransition,
    pub streak: u32,
    pub last_visit: NaiveDate,
}

impl Reconciliation {
    /// Whether the new state must be written out immediately.
    pub fn needs_persist(&self) -> bool {
        self.transition != StreakTransition::SameDay
    }
}

/// Today's date on the local wall clock.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Decide the new `(streak, last_visit)` for a session opened on `today`.
///
/// A stored streak without a stored visit date is inconsistent and is
/// treated as a first visit.
pub fn reconcile(
    previous_last_visit: Option<NaiveDate>,
    previous_streak: u32,
    today: NaiveDate,
) -> Reconciliation {
    let Some(previous) = previous_last_visit else {
        return Reconciliation {
            transition: StreakTransition::FirstVisit,
            streak: 1,
            last_visit: today,
        };
    };

    match days_between(previous, today) {
        0 => Reconciliation {
            transition: StreakTransition::SameDay,
            streak: previous_streak,
            last_visit: previous,
        },
        1 => Reconciliation {
            transition: StreakTransition::Continued,
            streak: previous_streak.saturating_add(1),
            last_visit: today,
        },
        _ => Reconciliation {
            transition: StreakTransition::Reset,
            streak: 1,
            last_visit: today,
        },
    }
}
