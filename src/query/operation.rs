use std::fmt;
use std::str::FromStr;

use crate::holidayerror::HolidayError;
use crate::time::calendar::holidays::Holidays;

/// Named operations for callers that pick the query at runtime.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    CheckPublicHoliday,
    GetPublicHolidayName,
    CheckDayBeforePublicHoliday,
    CheckDayAfterPublicHoliday,
    /// Day off, not just public holiday.
    CheckHoliday,
    AddPublicHoliday
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CheckPublicHoliday => "checkPublicHoliday",
            Operation::GetPublicHolidayName => "getPublicHolidayName",
            Operation::CheckDayBeforePublicHoliday => "checkDayBeforePublicHoliday",
            Operation::CheckDayAfterPublicHoliday => "checkDayAfterPublicHoliday",
            Operation::CheckHoliday => "checkHoliday",
            Operation::AddPublicHoliday => "addPublicHoliday"
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::AddPublicHoliday)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the camelCase names and their snake_case forms.
impl FromStr for Operation {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkPublicHoliday" | "check_public_holiday" => Ok(Operation::CheckPublicHoliday),
            "getPublicHolidayName" | "get_public_holiday_name" => Ok(Operation::GetPublicHolidayName),
            "checkDayBeforePublicHoliday" | "check_day_before_public_holiday" => Ok(Operation::CheckDayBeforePublicHoliday),
            "checkDayAfterPublicHoliday" | "check_day_after_public_holiday" => Ok(Operation::CheckDayAfterPublicHoliday),
            "checkHoliday" | "check_holiday" => Ok(Operation::CheckHoliday),
            "addPublicHoliday" | "add_public_holiday" => Ok(Operation::AddPublicHoliday),
            _ => Err(HolidayError::UnsupportedOperation(s.to_owned()))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Response {
    Flag(bool),
    Name(Option<String>),
    Done
}

impl Holidays {
    /// Runs the read-only operation called `operation` on `year/month/day`.
    /// Works through a shared reference, e.g. a read guard; `addPublicHoliday`
    /// is refused with [`HolidayError::MutatingOperation`].
    pub fn query(&self, operation: &str, year: i32, month: u32, day: u32) -> Result<Response, HolidayError> {
        let operation: Operation = operation.parse()?;
        self.run_query(operation, year, month, day)
    }

    /// Runs any operation called `operation` on `year/month/day`.
    /// `name` is only read by `addPublicHoliday`, which requires it.
    pub fn call(&mut self,
                operation: &str,
                year: i32,
                month: u32,
                day: u32,
                name: Option<&str>) -> Result<Response, HolidayError> {
        let operation: Operation = operation.parse()?;
        if operation.is_mutating() {
            let name = name.ok_or_else(|| HolidayError::MissingHolidayName(operation.to_string()))?;
            self.add_public_holiday(year, month, day, name)?;
            return Ok(Response::Done);
        }
        self.run_query(operation, year, month, day)
    }

    fn run_query(&self, operation: Operation, year: i32, month: u32, day: u32) -> Result<Response, HolidayError> {
        match operation {
            Operation::CheckPublicHoliday => {
                self.check_public_holiday(year, month, day).map(Response::Flag)
            },
            Operation::GetPublicHolidayName => {
                self.get_public_holiday_name(year, month, day).map(Response::Name)
            },
            Operation::CheckDayBeforePublicHoliday => {
                self.check_day_before_public_holiday(year, month, day).map(Response::Flag)
            },
            Operation::CheckDayAfterPublicHoliday => {
                self.check_day_after_public_holiday(year, month, day).map(Response::Flag)
            },
            Operation::CheckHoliday => {
                self.check_holiday(year, month, day).map(Response::Flag)
            },
            Operation::AddPublicHoliday => Err(HolidayError::MutatingOperation(operation.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::holidaytable::HolidayTable;

    fn holidays() -> Holidays {
        Holidays::from_table(HolidayTable::from_pairs([("2023/3/21", "春分の日")]).unwrap())
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("checkHoliday".parse::<Operation>().unwrap(), Operation::CheckHoliday);
        assert_eq!("check_public_holiday".parse::<Operation>().unwrap(), Operation::CheckPublicHoliday);
        for op in [
            Operation::CheckPublicHoliday,
            Operation::GetPublicHolidayName,
            Operation::CheckDayBeforePublicHoliday,
            Operation::CheckDayAfterPublicHoliday,
            Operation::CheckHoliday,
            Operation::AddPublicHoliday
        ] {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operation() {
        let mut h = holidays();
        let result = h.call("deletePublicHoliday", 2023, 3, 21, None);
        assert!(matches!(result, Err(HolidayError::UnsupportedOperation(ref name)) if name == "deletePublicHoliday"));
    }

    #[test]
    fn test_call_queries() {
        let mut h = holidays();
        assert_eq!(h.call("checkPublicHoliday", 2023, 3, 21, None).unwrap(), Response::Flag(true));
        assert_eq!(
            h.call("getPublicHolidayName", 2023, 3, 21, None).unwrap(),
            Response::Name(Some("春分の日".to_owned()))
        );
        assert_eq!(h.call("checkDayBeforePublicHoliday", 2023, 3, 20, None).unwrap(), Response::Flag(true));
        assert_eq!(h.call("checkDayAfterPublicHoliday", 2023, 3, 22, None).unwrap(), Response::Flag(true));
        // Sunday: a day off but not a public holiday
        assert_eq!(h.call("checkHoliday", 2023, 3, 19, None).unwrap(), Response::Flag(true));
        assert_eq!(h.call("checkPublicHoliday", 2023, 3, 19, None).unwrap(), Response::Flag(false));
    }

    #[test]
    fn test_query_through_shared_reference() {
        let h = holidays();
        let shared = &h;
        assert_eq!(shared.query("checkPublicHoliday", 2023, 3, 21).unwrap(), Response::Flag(true));
        assert_eq!(shared.query("checkHoliday", 2023, 3, 19).unwrap(), Response::Flag(true));
        assert!(matches!(
            shared.query("addPublicHoliday", 2023, 3, 20),
            Err(HolidayError::MutatingOperation(ref name)) if name == "addPublicHoliday"
        ));
        assert!(matches!(shared.query("nope", 2023, 3, 20), Err(HolidayError::UnsupportedOperation(_))));
        assert_eq!(h.get_public_holiday_name(2023, 3, 20).unwrap(), None);
    }

    #[test]
    fn test_call_add() {
        let mut h = holidays();
        assert!(matches!(
            h.call("addPublicHoliday", 2023, 3, 20, None),
            Err(HolidayError::MissingHolidayName(_))
        ));
        assert_eq!(h.call("addPublicHoliday", 2023, 3, 20, Some("custom")).unwrap(), Response::Done);
        assert_eq!(
            h.call("getPublicHolidayName", 2023, 3, 20, None).unwrap(),
            Response::Name(Some("custom".to_owned()))
        );
    }
}
