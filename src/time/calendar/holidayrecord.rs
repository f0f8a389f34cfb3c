#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    name: String,
    statutory: bool
}

impl HolidayRecord {
    /// A holiday read from the authoritative holiday source.
    pub fn statutory(name: String) -> HolidayRecord {
        HolidayRecord { name, statutory: true }
    }

    /// A holiday added at runtime. Never takes part in substitute-holiday derivation.
    pub fn custom(name: String) -> HolidayRecord {
        HolidayRecord { name, statutory: false }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_statutory(&self) -> bool {
        self.statutory
    }
}
