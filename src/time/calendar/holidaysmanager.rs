use std::cell::{RefCell, RefMut};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::configuration::HolidaySourceConfig;
use crate::manager::manager::IManager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidays::Holidays;

pub type SharedHolidays = Arc<RwLock<Holidays>>;

/// Named holiday calendars, one per configured holiday source.
///
/// The `supports` directory is where relative source paths are resolved,
/// normally the directory of the configuration file.
pub struct HolidaysManager {
    map_cell: RefCell<HashMap<String, SharedHolidays>>
}

impl HolidaysManager {
    pub fn new() -> HolidaysManager {
        HolidaysManager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl Default for HolidaysManager {
    fn default() -> Self {
        HolidaysManager::new()
    }
}

impl IManager<SharedHolidays, PathBuf> for HolidaysManager {
    fn map(&self) -> RefMut<'_, HashMap<String, SharedHolidays>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &PathBuf) -> Result<(), ManagerError> {
        let source: HolidaySourceConfig = parse_json_value(json_value)?;
        let source = source.resolved_against(supports);
        let holidays = Holidays::from_source(&source)?;
        info!(
            name = source.name(),
            path = %source.path().display(),
            entries = holidays.table().len(),
            "holiday source registered"
        );
        self.map().insert(source.name().to_owned(), Arc::new(RwLock::new(holidays)));
        Ok(())
    }
}
