pub mod configuration;
pub mod holidayerror;
pub mod shared;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod query {
    pub mod operation;
}

pub mod source {
    pub mod datasourceerror;
    pub mod sourceencoding;
    pub mod csvholidaysource;
}

pub mod time {
    pub mod utility;

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidayrecord;
        pub mod holidaytable;
        pub mod substituteholiday;
        pub mod holidays;
        pub mod holidaysmanager;
    }
}
