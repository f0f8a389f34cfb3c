use chrono::NaiveDate;

use crate::holidayerror::HolidayError;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 0 || month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Builds a date from a ymd triple, rejecting triples the calendar does not contain.
pub fn make_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::InvalidDate { year, month, day })
}

/// Parses a `YYYY/MM/DD` date as written in the holiday source.
/// Zero-padding of month and day is optional.
pub fn parse_source_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_of_month() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(2100, 2), 28);
        assert_eq!(days_of_month(2000, 2), 29);
        assert_eq!(days_of_month(2023, 13), 0);
    }

    #[test]
    fn test_parse_source_date_padding() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 1);
        assert_eq!(parse_source_date("2023/3/1"), expected);
        assert_eq!(parse_source_date("2023/03/01"), expected);
        assert_eq!(parse_source_date(" 2023/03/1 "), expected);
    }

    #[test]
    fn test_parse_source_date_rejects_garbage() {
        assert_eq!(parse_source_date("2023-03-01"), None);
        assert_eq!(parse_source_date("2023/13/40"), None);
        assert_eq!(parse_source_date("2023/3"), None);
        assert_eq!(parse_source_date("2023/3/1/1"), None);
        assert_eq!(parse_source_date(""), None);
    }

    #[test]
    fn test_make_date() {
        assert!(make_date(2023, 3, 21).is_ok());
        assert!(matches!(
            make_date(2023, 2, 29),
            Err(HolidayError::InvalidDate { year: 2023, month: 2, day: 29 })
        ));
    }
}
