use std::thread;

use syukujitsu::holidayerror::HolidayError;
use syukujitsu::query::operation::Response;
use syukujitsu::shared;
use syukujitsu::time::calendar::holidays::Holidays;

#[test]
fn test_shared_queries() {
    assert!(shared::check_public_holiday(2023, 3, 21).unwrap());
    assert!(!shared::check_public_holiday(2023, 3, 22).unwrap());
    assert!(shared::get_public_holiday_name(2023, 3, 21).unwrap().is_some());
    assert!(shared::check_day_before_public_holiday(2023, 3, 20).unwrap());
    assert!(shared::check_day_after_public_holiday(2023, 3, 22).unwrap());
    assert!(shared::check_holiday(2023, 3, 19).unwrap());
}

#[test]
fn test_shared_add_persists_and_stays_isolated() {
    shared::add_public_holiday(2031, 6, 10, "shared custom").unwrap();
    assert_eq!(
        shared::get_public_holiday_name(2031, 6, 10).unwrap().as_deref(),
        Some("shared custom")
    );

    let independent = Holidays::new().unwrap();
    assert_eq!(independent.get_public_holiday_name(2031, 6, 10).unwrap(), None);
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| shared::check_public_holiday(2023, 3, 21).unwrap()))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(std::ptr::eq(shared::shared().unwrap(), shared::shared().unwrap()));
}

#[test]
fn test_dynamic_queries_under_read_lock() {
    let guard = shared::shared().unwrap().read().unwrap();
    assert_eq!(guard.query("checkPublicHoliday", 2023, 3, 21).unwrap(), Response::Flag(true));
    assert_eq!(guard.query("check_day_before_public_holiday", 2023, 3, 20).unwrap(), Response::Flag(true));
    assert!(matches!(
        guard.query("addPublicHoliday", 2032, 6, 10),
        Err(HolidayError::MutatingOperation(_))
    ));
}

#[test]
fn test_shared_call() {
    assert_eq!(shared::call("checkHoliday", 2023, 3, 19, None).unwrap(), Response::Flag(true));
    assert_eq!(shared::call("addPublicHoliday", 2032, 7, 14, Some("shared call")).unwrap(), Response::Done);
    assert_eq!(
        shared::call("getPublicHolidayName", 2032, 7, 14, None).unwrap(),
        Response::Name(Some("shared call".to_owned()))
    );
    assert!(matches!(shared::call("nope", 2023, 3, 19, None), Err(HolidayError::UnsupportedOperation(_))));
}
