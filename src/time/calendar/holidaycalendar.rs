use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::time::utility::days_of_month;

const ONE_DAY: Days = Days::new(1);

/// Business-day navigation over any calendar that can tell days off apart.
///
/// `Send + Sync` so a calendar can sit behind an `Arc` shared between threads.
pub trait HolidayCalendar: Send + Sync {
    /// True for any non-working day.
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Every non-working day of `year`, weekends included.
    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    /// Moves `n` business days away from `horizon`, backwards when `n` is negative.
    /// `horizon` itself is never counted. Stops at the edge of the date range.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            match shift_one_day(d) {
                Some(next) => d = next,
                None => break
            }
            m -= self.is_business_day(d) as u32;
        }
        d
    }

    fn next_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, -1)
    }

    /// `None` when `month` is invalid or the whole month is off.
    fn last_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        let mut eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))?;
        while self.is_holiday(eom) {
            if eom == fom {
                return None;
            }
            eom = eom - ONE_DAY;
        }
        Some(eom)
    }

    /// `None` when `month` is invalid or the whole month is off.
    fn first_business_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))?;
        let mut fom = NaiveDate::from_ymd_opt(year, month, 1)?;
        while self.is_holiday(fom) {
            if fom == eom {
                return None;
            }
            fom = fom + ONE_DAY;
        }
        Some(fom)
    }
}
