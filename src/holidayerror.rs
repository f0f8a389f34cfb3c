use thiserror::Error;

use crate::source::datasourceerror::DataSourceError;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error("no such operation '{0}'")]
    UnsupportedOperation(String),

    #[error("invalid date {year}/{month}/{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("operation '{0}' requires a holiday name")]
    MissingHolidayName(String),

    #[error("operation '{0}' modifies the calendar and needs mutable access")]
    MutatingOperation(String)
}
