//! Substitute holidays (振替休日) derived from the statutory entries of a
//! [`HolidayTable`]. Custom holidays never take part.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::time::calendar::holidaytable::HolidayTable;

pub const SUBSTITUTE_HOLIDAY_NAME: &str = "振替休日";

/// Longest run of consecutive statutory holidays the Sunday walk will follow.
pub const MAX_HOLIDAY_RUN: usize = 30;

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A non-statutory weekday whose neighbours are both statutory holidays.
pub fn is_sandwiched_substitute(table: &HolidayTable, d: NaiveDate) -> bool {
    if is_weekend(d) || table.is_statutory(d) {
        return false;
    }
    match (d.pred_opt(), d.succ_opt()) {
        (Some(before), Some(after)) => table.is_statutory(before) && table.is_statutory(after),
        _ => false
    }
}

/// The first weekday after a run of statutory holidays that started on a Sunday.
pub fn is_sunday_substitute(table: &HolidayTable, d: NaiveDate) -> bool {
    if is_weekend(d) {
        return false;
    }

    let mut current = d;
    for _ in 0..MAX_HOLIDAY_RUN {
        current = match current.pred_opt() {
            Some(previous) => previous,
            None => return false
        };
        if !table.is_statutory(current) {
            return false;
        }
        if current.weekday() == Weekday::Sun {
            return true;
        }
    }

    warn!(
        date = %d,
        limit = MAX_HOLIDAY_RUN,
        "statutory holiday run exceeds limit, holiday data looks corrupt"
    );
    false
}

pub fn is_substitute_holiday(table: &HolidayTable, d: NaiveDate) -> bool {
    is_sandwiched_substitute(table, d) || is_sunday_substitute(table, d)
}
