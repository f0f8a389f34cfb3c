use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::source::sourceencoding::SourceEncoding;
use crate::time::calendar::holidaysmanager::HolidaysManager;

/// A custom holiday declared in the configuration. Applied after loading,
/// so it never drives substitute-holiday derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionalHoliday {
    date: NaiveDate,
    name: String
}

impl AdditionalHoliday {
    pub fn new(date: NaiveDate, name: String) -> AdditionalHoliday {
        AdditionalHoliday { date, name }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn default_has_header() -> bool {
    true
}

/// Where a holiday table comes from and how to read it.
///
/// ```json
/// { "name": "japan", "path": "syukujitsu.csv", "encoding": "Shift_JIS",
///   "has_header": true, "skip_placeholder": true,
///   "additional_holidays": [ { "date": "2024-12-30", "name": "年末休暇" } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaySourceConfig {
    name: String,
    path: PathBuf,
    #[serde(default)]
    encoding: SourceEncoding,
    #[serde(default = "default_has_header")]
    has_header: bool,
    #[serde(default)]
    skip_placeholder: bool,
    #[serde(default)]
    additional_holidays: Vec<AdditionalHoliday>
}

impl HolidaySourceConfig {
    /// Shift_JIS with a header row, placeholder rows imported as-is.
    pub fn new(name: String, path: PathBuf) -> HolidaySourceConfig {
        HolidaySourceConfig {
            name,
            path,
            encoding: SourceEncoding::default(),
            has_header: default_has_header(),
            skip_placeholder: false,
            additional_holidays: Vec::new()
        }
    }

    pub fn with_encoding(mut self, encoding: SourceEncoding) -> HolidaySourceConfig {
        self.encoding = encoding;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> HolidaySourceConfig {
        self.has_header = has_header;
        self
    }

    pub fn with_skip_placeholder(mut self, skip_placeholder: bool) -> HolidaySourceConfig {
        self.skip_placeholder = skip_placeholder;
        self
    }

    pub fn with_additional_holiday(mut self, holiday: AdditionalHoliday) -> HolidaySourceConfig {
        self.additional_holidays.push(holiday);
        self
    }

    /// Relative paths are taken relative to `base`.
    pub fn resolved_against(mut self, base: &Path) -> HolidaySourceConfig {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn skip_placeholder(&self) -> bool {
        self.skip_placeholder
    }

    pub fn additional_holidays(&self) -> &[AdditionalHoliday] {
        &self.additional_holidays
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_sources: Vec<serde_json::Value>
}

pub struct Configuration {
    holidays_manager: HolidaysManager
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { holidays_manager: HolidaysManager::new() }
    }

    pub fn holidays_manager(&self) -> &HolidaysManager {
        &self.holidays_manager
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let base_dir = file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.holidays_manager.insert_obj_from_json_vec(&json_prop.holiday_sources, &base_dir)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
