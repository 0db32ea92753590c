//! Period indexing: calendar date -> period index and period key.
//!
//! # Responsibility
//! - Count periods since a fixed reference per frequency.
//! - Produce the stable, human-legible period key namespace
//!   (`D:`/`W:`/`M:` prefixes).
//! - Expose the next period boundary instant for presentation wake-ups.
//!
//! # Invariants
//! - All math runs on local wall-clock calendar dates.
//! - Week numbering is deliberately NOT ISO-8601: weeks are counted from
//!   Jan 1 of each calendar year and reset at the year boundary. Historical
//!   period keys depend on this exact formula; never substitute ISO weeks.
//! - Period keys are unpadded (`D:2026-8-7`), matching every key ever
//!   written; padding would fork the namespace.

use crate::model::chore::{ChoreId, Frequency};
use crate::model::state::HouseholdState;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Sentinel period key for a chore reference that no longer resolves.
///
/// Callers must treat it as "uncategorizable" and never merge it with a real
/// period.
pub const UNKNOWN_PERIOD_KEY: &str = "unknown";

/// `num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Integer period number for a frequency on a calendar date.
///
/// Advances by exactly 1 per day / week / month of the frequency. Daily
/// counts days since the Unix epoch; weekly uses the simplified in-year week
/// number; monthly counts `year * 12 + month`.
pub fn period_index(frequency: Frequency, date: NaiveDate) -> i64 {
    match frequency {
        Frequency::Daily => days_since_epoch(date),
        Frequency::Weekly => week_of_year(date),
        Frequency::Monthly => i64::from(date.year()) * 12 + i64::from(date.month0()),
    }
}

/// Stable period key for a frequency on a calendar date.
pub fn period_key_for(frequency: Frequency, date: NaiveDate) -> String {
    match frequency {
        Frequency::Daily => format!("D:{}-{}-{}", date.year(), date.month(), date.day()),
        Frequency::Weekly => format!("W:{}-W{}", date.year(), week_of_year(date)),
        Frequency::Monthly => format!("M:{}-{}", date.year(), date.month()),
    }
}

/// Period key for a chore looked up by id in the household state.
///
/// Degrades to [`UNKNOWN_PERIOD_KEY`] when the chore has been removed, so a
/// stale reference stays storable without inventing a real period.
pub fn period_key(state: &HouseholdState, chore_id: ChoreId, date: NaiveDate) -> String {
    match state.chore_by_id(chore_id) {
        Some(chore) => period_key_for(chore.frequency, date),
        None => UNKNOWN_PERIOD_KEY.to_string(),
    }
}

/// Instant at which the current period of `frequency` ends.
///
/// Daily rolls at the next local midnight, weekly at the next Monday 00:00
/// (a full seven days out when `now` is already a Monday), monthly at the
/// first of the next month.
pub fn next_boundary(frequency: Frequency, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date();
    let boundary_date = match frequency {
        Frequency::Daily => today + Duration::days(1),
        Frequency::Weekly => {
            let weekday = i64::from(today.weekday().number_from_monday());
            let days_until_monday = match (8 - weekday) % 7 {
                0 => 7,
                days => days,
            };
            today + Duration::days(days_until_monday)
        }
        Frequency::Monthly => first_of_next_month(today),
    };
    boundary_date.and_time(NaiveTime::MIN)
}

fn days_since_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Simplified week number: `ceil((day_of_year + jan1_weekday - 1) / 7)` with
/// Monday=1 .. Sunday=7 for the Jan 1 weekday, so weeks break on Mondays.
fn week_of_year(date: NaiveDate) -> i64 {
    let day_of_year = i64::from(date.ordinal());
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("Jan 1 exists for every year");
    let jan1_weekday = i64::from(jan1.weekday().number_from_monday());
    (day_of_year + jan1_weekday - 1 + 6) / 7
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month exists for every year")
}
