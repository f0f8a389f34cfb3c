use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::holidayerror::HolidayError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    HolidayError(#[from] HolidayError),

    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String)
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: DeserializeOwned
{
    Ok(serde_json::from_value(json_value)?)
}
