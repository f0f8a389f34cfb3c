use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::datasourceerror::DataSourceError;

/// One undecoded data row of the holiday source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHolidayRecord {
    line: u64,
    date: Vec<u8>,
    name: Vec<u8>
}

impl RawHolidayRecord {
    pub fn new(line: u64, date: impl Into<Vec<u8>>, name: impl Into<Vec<u8>>) -> RawHolidayRecord {
        RawHolidayRecord { line, date: date.into(), name: name.into() }
    }

    /// 1-based line number in the source, used in error reports.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn date(&self) -> &[u8] {
        &self.date
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }
}

/// Reads the two-column `date,name` holiday CSV.
///
/// Fields are kept as raw bytes because the source is usually not UTF-8;
/// decoding happens when the table is built. Rows with fewer than two
/// fields are rejected, extra fields are ignored.
pub struct CsvHolidaySource;

impl CsvHolidaySource {
    pub fn from_path<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Vec<RawHolidayRecord>, DataSourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataSourceError::Open {
            path: path.display().to_string(),
            source
        })?;
        CsvHolidaySource::from_reader(BufReader::new(file), has_header)
    }

    pub fn from_reader<R: Read>(mut reader: R, has_header: bool) -> Result<Vec<RawHolidayRecord>, DataSourceError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        CsvHolidaySource::from_bytes(&bytes, has_header)
    }

    pub fn from_bytes(bytes: &[u8], has_header: bool) -> Result<Vec<RawHolidayRecord>, DataSourceError> {
        // Header is skipped by hand: csv would try to read it as UTF-8.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for (idx, result) in reader.byte_records().enumerate() {
            let record = result?;
            if has_header && idx == 0 {
                continue;
            }

            let line = record.position().map_or(idx as u64 + 1, |p| line_at(bytes, p.byte()));
            match (record.get(0), record.get(1)) {
                (Some(date), Some(name)) => records.push(RawHolidayRecord::new(line, date, name)),
                _ => {
                    return Err(DataSourceError::malformed(
                        line,
                        format!("expected at least 2 fields, found {}", record.len())
                    ));
                }
            }
        }

        Ok(records)
    }
}

/// 1-based line of byte offset `offset`, counting `\n` so that CRLF and LF agree.
fn line_at(bytes: &[u8], offset: u64) -> u64 {
    let end = usize::try_from(offset).map_or(bytes.len(), |o| o.min(bytes.len()));
    bytes[..end].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}
