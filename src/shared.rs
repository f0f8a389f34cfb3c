//! Process-wide calendar built from the bundled holiday list on first use.
//!
//! Optional convenience: everything here is also available on an explicitly
//! constructed [`Holidays`]. Custom holidays added through
//! [`add_public_holiday`] stay for the rest of the process.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::holidayerror::HolidayError;
use crate::query::operation::{Operation, Response};
use crate::time::calendar::holidays::Holidays;

static SHARED: OnceLock<RwLock<Holidays>> = OnceLock::new();

pub fn shared() -> Result<&'static RwLock<Holidays>, HolidayError> {
    if let Some(holidays) = SHARED.get() {
        return Ok(holidays);
    }
    // Two racing threads may both build; the loser's copy is dropped.
    let holidays = Holidays::new()?;
    Ok(SHARED.get_or_init(|| RwLock::new(holidays)))
}

// Inserts are single map writes, so a poisoned lock still guards a consistent table.
fn read() -> Result<RwLockReadGuard<'static, Holidays>, HolidayError> {
    Ok(shared()?.read().unwrap_or_else(PoisonError::into_inner))
}

fn write() -> Result<RwLockWriteGuard<'static, Holidays>, HolidayError> {
    Ok(shared()?.write().unwrap_or_else(PoisonError::into_inner))
}

pub fn check_public_holiday(year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
    read()?.check_public_holiday(year, month, day)
}

pub fn get_public_holiday_name(year: i32, month: u32, day: u32) -> Result<Option<String>, HolidayError> {
    read()?.get_public_holiday_name(year, month, day)
}

pub fn check_day_before_public_holiday(year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
    read()?.check_day_before_public_holiday(year, month, day)
}

pub fn check_day_after_public_holiday(year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
    read()?.check_day_after_public_holiday(year, month, day)
}

pub fn check_holiday(year: i32, month: u32, day: u32) -> Result<bool, HolidayError> {
    read()?.check_holiday(year, month, day)
}

pub fn add_public_holiday(year: i32, month: u32, day: u32, name: impl Into<String>) -> Result<(), HolidayError> {
    write()?.add_public_holiday(year, month, day, name)
}

/// Runs `operation` by name, taking the write lock only for `addPublicHoliday`.
pub fn call(operation: &str, year: i32, month: u32, day: u32, name: Option<&str>) -> Result<Response, HolidayError> {
    if operation.parse::<Operation>()?.is_mutating() {
        write()?.call(operation, year, month, day, name)
    } else {
        read()?.query(operation, year, month, day)
    }
}
