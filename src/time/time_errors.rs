use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum TimeErrors {
    YearOutOfRange(i32),
    DayOfYearOutOfRange(f64),
    InvalidCivilDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },
    UnrepresentableDate(f64),
    /// Offset in days that is not finite or leaves the tick range.
    SpanOutOfRange(f64),
}

impl fmt::Display for TimeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeErrors::YearOutOfRange(year) => write!(
                f,
                "Year {} outside supported range {}-{}",
                year,
                crate::constants::MIN_YEAR,
                crate::constants::MAX_YEAR
            ),
            TimeErrors::DayOfYearOutOfRange(day) => {
                write!(f, "Day of year {} outside range [1, 367)", day)
            }
            TimeErrors::InvalidCivilDate {
                year,
                month,
                day,
                hour,
                minute,
                second,
                millisecond,
            } => write!(
                f,
                "Invalid civil date {:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
                year, month, day, hour, minute, second, millisecond
            ),
            TimeErrors::UnrepresentableDate(jd) => {
                write!(f, "Julian date {} has no civil representation", jd)
            }
            TimeErrors::SpanOutOfRange(days) => {
                write!(f, "Offset of {} days cannot be represented", days)
            }
        }
    }
}

impl Error for TimeErrors {}
