use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::source::csvholidaysource::RawHolidayRecord;
use crate::source::datasourceerror::DataSourceError;
use crate::source::sourceencoding::SourceEncoding;
use crate::time::calendar::holidayrecord::HolidayRecord;
use crate::time::utility::parse_source_date;

/// Name the holiday source uses for days it has already marked as substitute
/// holidays. Those are derived by the engine instead.
pub const SUBSTITUTE_PLACEHOLDER: &str = "休日";

#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    holidays: HashMap<NaiveDate, HolidayRecord>
}

impl HolidayTable {
    pub fn new() -> HolidayTable {
        HolidayTable::default()
    }

    /// Builds the table from undecoded source rows.
    ///
    /// Every record is decoded with `encoding` and stored as statutory.
    /// With `skip_placeholder` set, rows named [`SUBSTITUTE_PLACEHOLDER`] are dropped.
    /// The first malformed row fails the whole load.
    pub fn from_records<I>(records: I,
                           encoding: SourceEncoding,
                           skip_placeholder: bool) -> Result<HolidayTable, DataSourceError>
    where
        I: IntoIterator<Item = RawHolidayRecord>
    {
        let mut holidays = HashMap::new();
        let mut skipped = 0usize;

        for record in records {
            let (date_str, _) = encoding.decode(record.date());
            let date = parse_source_date(&date_str).ok_or_else(|| {
                DataSourceError::malformed(record.line(), format!("unparsable date '{}'", date_str))
            })?;
            let (name, lossy) = encoding.decode(record.name());
            if lossy {
                warn!(
                    line = record.line(),
                    %date,
                    encoding = encoding.name(),
                    "undecodable bytes in holiday name replaced"
                );
            }

            if skip_placeholder && name == SUBSTITUTE_PLACEHOLDER {
                debug!(%date, "skipping substitute-holiday placeholder");
                skipped += 1;
                continue;
            }
            holidays.insert(date, HolidayRecord::statutory(name));
        }

        info!(
            loaded = holidays.len(),
            skipped,
            encoding = encoding.name(),
            "holiday table loaded"
        );
        Ok(HolidayTable { holidays })
    }

    /// Builds the table from already-decoded `(date, name)` pairs, all statutory.
    pub fn from_pairs<I, D, N>(pairs: I) -> Result<HolidayTable, DataSourceError>
    where
        I: IntoIterator<Item = (D, N)>,
        D: AsRef<str>,
        N: Into<String>
    {
        let mut holidays = HashMap::new();
        for (idx, (date_str, name)) in pairs.into_iter().enumerate() {
            let date_str = date_str.as_ref();
            let date = parse_source_date(date_str).ok_or_else(|| {
                DataSourceError::malformed(idx as u64 + 1, format!("unparsable date '{}'", date_str))
            })?;
            holidays.insert(date, HolidayRecord::statutory(name.into()));
        }
        Ok(HolidayTable { holidays })
    }

    pub fn lookup(&self, d: NaiveDate) -> Option<&HolidayRecord> {
        self.holidays.get(&d)
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.holidays.contains_key(&d)
    }

    pub(crate) fn is_statutory(&self, d: NaiveDate) -> bool {
        self.holidays.get(&d).is_some_and(HolidayRecord::is_statutory)
    }

    /// Inserts a custom holiday, overwriting whatever the date held before.
    pub fn insert(&mut self, d: NaiveDate, name: String) {
        if let Some(previous) = self.holidays.insert(d, HolidayRecord::custom(name)) {
            if previous.is_statutory() {
                debug!(date = %d, replaced = previous.name(), "custom holiday overrides statutory holiday");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &HolidayRecord)> {
        self.holidays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(line: u64, d: &str, name: &str) -> RawHolidayRecord {
        RawHolidayRecord::new(line, d, name)
    }

    #[test]
    fn test_placeholder_skipped_when_requested() {
        let records = vec![raw(2, "2023/5/5", "こどもの日"), raw(3, "2024/2/12", SUBSTITUTE_PLACEHOLDER)];
        let table = HolidayTable::from_records(records.clone(), SourceEncoding::utf_8(), true).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup(date(2024, 2, 12)).is_none());

        let table = HolidayTable::from_records(records, SourceEncoding::utf_8(), false).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.is_statutory(date(2024, 2, 12)));
    }

    #[test]
    fn test_placeholder_must_match_exactly() {
        let records = vec![raw(2, "2019/5/1", "休日（祝日扱い）")];
        let table = HolidayTable::from_records(records, SourceEncoding::utf_8(), true).unwrap();
        assert_eq!(table.lookup(date(2019, 5, 1)).map(HolidayRecord::name), Some("休日（祝日扱い）"));
    }

    #[test]
    fn test_undecodable_name_is_kept() {
        let records = vec![RawHolidayRecord::new(4, "2023/3/21", b"\x82\xff".to_vec())];
        let table = HolidayTable::from_records(records, SourceEncoding::utf_8(), true).unwrap();
        let name = table.lookup(date(2023, 3, 21)).map(HolidayRecord::name);
        assert_eq!(name, Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn test_bad_date_fails_whole_load() {
        let records = vec![raw(2, "2023/3/21", "春分の日"), raw(3, "2023/02/30", "x")];
        let result = HolidayTable::from_records(records, SourceEncoding::utf_8(), true);
        assert!(matches!(result, Err(DataSourceError::MalformedRecord { line: 3, .. })));
    }

    #[test]
    fn test_insert_overrides_statutory() {
        let mut table = HolidayTable::from_pairs([("2023/3/21", "春分の日")]).unwrap();
        assert!(table.is_statutory(date(2023, 3, 21)));

        table.insert(date(2023, 3, 21), "custom".to_owned());
        let record = table.lookup(date(2023, 3, 21)).unwrap();
        assert_eq!(record.name(), "custom");
        assert!(!record.is_statutory());
        assert!(!table.is_statutory(date(2023, 3, 21)));
    }

    #[test]
    fn test_insert_idempotent() {
        let mut table = HolidayTable::new();
        table.insert(date(2023, 3, 20), "custom".to_owned());
        let first = table.lookup(date(2023, 3, 20)).cloned();
        table.insert(date(2023, 3, 20), "custom".to_owned());
        assert_eq!(table.lookup(date(2023, 3, 20)).cloned(), first);
        assert_eq!(table.len(), 1);
    }
}
