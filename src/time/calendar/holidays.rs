use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;

use crate::configuration::HolidaySourceConfig;
use crate::holidayerror::HolidayError;
use crate::source::csvholidaysource::CsvHolidaySource;
use crate::source::sourceencoding::SourceEncoding;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaytable::HolidayTable;
use crate::time::calendar::substituteholiday::{
    self,
    SUBSTITUTE_HOLIDAY_NAME
};
use crate::time::utility::make_date;

/// Cabinet Office holiday list (国民の祝日), Shift_JIS.
const BUNDLED_HOLIDAYS: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/syukujitsu.csv"));

/// Japanese public-holiday calendar.
///
/// Holds the holiday table and answers every query from it on demand:
/// - public holiday: any table entry, or a derived substitute holiday
/// - day off: weekend or public holiday
/// - day before / after: public holiday on the next / previous day
///
/// Substitute holidays are derived from statutory entries only, see
/// [`substituteholiday`]. Custom holidays added with
/// [`insert_public_holiday`](Holidays::insert_public_holiday) count as public
/// holidays but never produce substitutes.
#[derive(Debug, Clone)]
pub struct Holidays {
    table: HolidayTable
}

impl Holidays {
    /// Calendar built from the bundled holiday list. Placeholder rows are
    /// dropped and re-derived.
    pub fn new() -> Result<Holidays, HolidayError> {
        let records = CsvHolidaySource::from_bytes(BUNDLED_HOLIDAYS, true)?;
        let table = HolidayTable::from_records(records, SourceEncoding::shift_jis(), true)?;
        Ok(Holidays { table })
    }

    /// Calendar built from a Shift_JIS holiday file. Every row is imported
    /// as-is, placeholder rows included.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Holidays, HolidayError> {
        let records = CsvHolidaySource::from_path(path, true)?;
        let table = HolidayTable::from_records(records, SourceEncoding::shift_jis(), false)?;
        Ok(Holidays { table })
    }

    pub fn from_source(config: &HolidaySourceConfig) -> Result<Holidays, HolidayError> {
        let records = CsvHolidaySource::from_path(config.path(), config.has_header())?;
        let table = HolidayTable::from_records(records, config.encoding(), config.skip_placeholder())?;
        let mut holidays = Holidays { table };
        for additional in config.additional_holidays() {
            holidays.insert_public_holiday(additional.date(), additional.name());
        }
        Ok(holidays)
    }

    pub fn from_table(table: HolidayTable) -> Holidays {
        Holidays { table }
    }

    pub fn table(&self) -> &HolidayTable {
        &self.table
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        substituteholiday::is_weekend(d)
    }

    pub fn is_substitute_holiday(&self, d: NaiveDate) -> bool {
        substituteholiday::is_substitute_holiday(&self.table, d)
    }

    pub fn is_public_holiday(&self, d: NaiveDate) -> bool {
        self.table.contains(d) || self.is_substitute_holiday(d)
    }

    pub fn public_holiday_name(&self, d: NaiveDate) -> Option<&str> {
        match self.table.lookup(d) {
            Some(record) => Some(record.name()),
            None if self.is_substitute_holiday(d) => Some(SUBSTITUTE_HOLIDAY_NAME),
            None => None
        }
    }

    pub fn is_day_off(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_public_holiday(d)
    }

    pub fn is_day_before_public_holiday(&self, d: NaiveDate) -> bool {
        d.succ_opt().is_some_and(|next| self.is_public_holiday(next))
    }

    pub fn is_day_after_public_holiday(&self, d: NaiveDate) -> bool {
        d.pred_opt().is_some_and(|previous| self.is_public_holiday(previous))
    }

    /// Adds a custom holiday, replacing any entry already at `d`.
    pub fn insert_public_holiday(&mut self, d: NaiveDate, name: impl Into<String>) {
        self.table.insert(d, name.into());
    }

    /// Every public holiday in `year` with its name, substitutes included.
    pub fn public_holidays(&self, year: i32) -> BTreeMap<NaiveDate, &str> {
        let mut result = BTreeMap::new();
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31)
        ) else {
            return result;
        };
        for d in start.iter_days().take_while(|d| *d <= end) {
            if let Some(name) = self.public_holiday_name(d) {
                result.insert(d, name);
            }
        }
        result
    }

    pub fn check_public_holiday(&self, year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
        Ok(self.is_public_holiday(make_date(year, month, day)?))
    }

    pub fn get_public_holiday_name(&self, year: i32, month: u32, day: u32) -> Result<Option<String>, HolidayError> {
        let d = make_date(year, month, day)?;
        Ok(self.public_holiday_name(d).map(str::to_owned))
    }

    pub fn check_day_before_public_holiday(&self, year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
        Ok(self.is_day_before_public_holiday(make_date(year, month, day)?))
    }

    pub fn check_day_after_public_holiday(&self, year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
        Ok(self.is_day_after_public_holiday(make_date(year, month, day)?))
    }

    /// Day off: weekend or public holiday.
    pub fn check_holiday(&self, year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
        Ok(self.is_day_off(make_date(year, month, day)?))
    }

    pub fn add_public_holiday(&mut self,
                              year: i32,
                              month: u32,
                              day: u32,
                              name: impl Into<String>) -> Result<(), HolidayError> {
        let d = make_date(year, month, day)?;
        self.insert_public_holiday(d, name);
        Ok(())
    }
}

impl HolidayCalendar for Holidays {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.is_day_off(d)
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::with_capacity(125);
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31)
        ) else {
            return holiday_set;
        };
        holiday_set.extend(
            start.iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| self.is_day_off(*d))
        );
        holiday_set
    }
}
