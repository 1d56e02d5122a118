use super::sidereal::{greenwich_mean_sidereal_angle, local_mean_sidereal_angle};
use super::time_errors::TimeErrors;
use crate::constants::*;
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};
use hifitime::{Duration, Epoch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Continuous day count from noon, 1 January 4713 BC (UTC).
///
/// Held internally as 100 ns ticks so that repeated small advances and
/// differences stay exact; `date()` exposes it as fractional days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JulianDate {
    ticks: i64,
}

impl JulianDate {
    pub const J2000: JulianDate = JulianDate {
        ticks: 2451545 * TICKS_PER_DAY,
    };

    /// Wraps a raw day count without range checks, rounded to the tick.
    pub fn new(date: f64) -> Self {
        Self {
            ticks: (date * TICKS_PER_DAY as f64).round() as i64,
        }
    }

    /// Builds a Julian date from a UTC calendar date and time of day.
    pub fn from_civil(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, TimeErrors> {
        check_year(year)?;

        let invalid = || TimeErrors::InvalidCivilDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        };
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(invalid());
        }
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        let millis_of_day = (hour as i64 * 3600 + minute as i64 * 60 + second as i64) * 1000
            + millisecond as i64;
        Ok(Self {
            ticks: new_years_ticks(year)
                + date.ordinal() as i64 * TICKS_PER_DAY
                + millis_of_day * TICKS_PER_MILLISECOND,
        })
    }

    /// Builds a Julian date from a year and a fractional day of year,
    /// where 1.0 is 1 January 00:00 UTC.
    pub fn from_year_day(year: i32, day_of_year: f64) -> Result<Self, TimeErrors> {
        check_year(year)?;
        if !(1.0..367.0).contains(&day_of_year) {
            return Err(TimeErrors::DayOfYearOutOfRange(day_of_year));
        }

        let ticks = days_to_ticks(day_of_year).ok_or(TimeErrors::DayOfYearOutOfRange(day_of_year))?;
        Ok(Self {
            ticks: new_years_ticks(year) + ticks,
        })
    }

    pub fn from_datetime(datetime: &DateTime<Utc>) -> Result<Self, TimeErrors> {
        // Leap seconds are carried by chrono as nanoseconds >= 1e9
        let nanos = datetime.nanosecond().min(999_999_999) as i64;
        Self::from_ordinal(
            datetime.year(),
            datetime.ordinal(),
            datetime.num_seconds_from_midnight() as i64,
            nanos,
        )
    }

    pub fn from_epoch(epoch: &Epoch) -> Result<Self, TimeErrors> {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        let date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .ok_or(TimeErrors::YearOutOfRange(year))?;
        let seconds_of_day = hour as i64 * 3600 + minute as i64 * 60 + second as i64;
        Self::from_ordinal(year, date.ordinal(), seconds_of_day, nanos as i64)
    }

    fn from_ordinal(
        year: i32,
        ordinal: u32,
        seconds_of_day: i64,
        nanos: i64,
    ) -> Result<Self, TimeErrors> {
        check_year(year)?;
        let tick_nanos = NANOSECONDS_PER_TICK as i64;
        Ok(Self {
            ticks: new_years_ticks(year)
                + ordinal as i64 * TICKS_PER_DAY
                + seconds_of_day * 1000 * TICKS_PER_MILLISECOND
                + (nanos + tick_nanos / 2) / tick_nanos,
        })
    }

    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::new(UNIX_EPOCH_JULIAN_DATE + seconds / SECONDS_PER_DAY)
    }

    pub fn date(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_DAY as f64
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.days_since(&Self::J2000)
    }

    /// Days since 1950-01-00 00:00 UTC, the day count used by SGP4.
    pub fn days_since_1950(&self) -> f64 {
        self.days_since(&Self::new(JAN_1_1950_JULIAN_DATE))
    }

    /// Converts back to a UTC calendar date, rounded to the millisecond.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeErrors> {
        let unrepresentable = || TimeErrors::UnrepresentableDate(self.date());

        // Civil days start at midnight, half a day after the Julian day boundary
        let shifted = self
            .ticks
            .checked_add(TICKS_PER_DAY / 2)
            .ok_or_else(unrepresentable)?;
        let z = shifted.div_euclid(TICKS_PER_DAY) as f64;
        let ticks_of_day = shifted.rem_euclid(TICKS_PER_DAY);

        let a = if z < 2299161.0 {
            z
        } else {
            let alpha = ((z - 1867216.25) / 36524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor();
        let month = if e <= 13.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let midnight = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(unrepresentable)?;

        let millis = (ticks_of_day + TICKS_PER_MILLISECOND / 2) / TICKS_PER_MILLISECOND;
        let naive = midnight
            .checked_add_signed(TimeDelta::milliseconds(millis))
            .ok_or_else(unrepresentable)?;

        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }

    pub fn to_epoch(&self) -> Result<Epoch, TimeErrors> {
        let datetime = self.to_datetime()?;
        Ok(Epoch::from_gregorian_utc(
            datetime.year(),
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
            datetime.nanosecond(),
        ))
    }

    /// Signed span `self - earlier` at 100 ns resolution.
    pub fn difference(&self, earlier: &JulianDate) -> Duration {
        Duration::from_total_nanoseconds((self.ticks - earlier.ticks) as i128 * NANOSECONDS_PER_TICK)
    }

    pub fn days_since(&self, earlier: &JulianDate) -> f64 {
        (self.ticks - earlier.ticks) as f64 / TICKS_PER_DAY as f64
    }

    pub fn minutes_since(&self, earlier: &JulianDate) -> f64 {
        (self.ticks - earlier.ticks) as f64 / TICKS_PER_MINUTE as f64
    }

    /// Moves the date by `days`. A non-finite offset or one that leaves the
    /// tick range is rejected and the date is left unchanged.
    pub fn add_days(&mut self, days: f64) -> Result<(), TimeErrors> {
        let ticks = days_to_ticks(days).ok_or(TimeErrors::SpanOutOfRange(days))?;
        self.shift(ticks, days)
    }

    pub fn add_hours(&mut self, hours: f64) -> Result<(), TimeErrors> {
        self.add_days(hours / HOURS_PER_DAY)
    }

    pub fn add_minutes(&mut self, minutes: f64) -> Result<(), TimeErrors> {
        self.add_days(minutes / MINUTES_PER_DAY)
    }

    pub fn add_seconds(&mut self, seconds: f64) -> Result<(), TimeErrors> {
        self.add_days(seconds / SECONDS_PER_DAY)
    }

    pub fn advance(&mut self, span: Duration) -> Result<(), TimeErrors> {
        let days = span.to_seconds() / SECONDS_PER_DAY;
        let ticks = i64::try_from(span.total_nanoseconds() / NANOSECONDS_PER_TICK)
            .map_err(|_| TimeErrors::SpanOutOfRange(days))?;
        self.shift(ticks, days)
    }

    fn shift(&mut self, ticks: i64, days: f64) -> Result<(), TimeErrors> {
        self.ticks = self
            .ticks
            .checked_add(ticks)
            .ok_or(TimeErrors::SpanOutOfRange(days))?;
        Ok(())
    }

    /// Greenwich Mean Sidereal Time in radians, [0, 2π).
    pub fn sidereal_angle(&self) -> f64 {
        greenwich_mean_sidereal_angle(self.date())
    }

    /// Local Mean Sidereal Time in radians, [0, 2π), at an east longitude (radians).
    pub fn local_sidereal_angle(&self, longitude: f64) -> f64 {
        local_mean_sidereal_angle(self.date(), longitude)
    }
}

fn days_to_ticks(days: f64) -> Option<i64> {
    let ticks = (days * TICKS_PER_DAY as f64).round();
    // 2^63 is exact in f64; anything at or past it does not fit
    if ticks.is_finite() && ticks.abs() < i64::MAX as f64 {
        Some(ticks as i64)
    } else {
        None
    }
}

/// Ticks at 0 January 00:00 UTC of `year`, with the Gregorian century correction.
fn new_years_ticks(year: i32) -> i64 {
    let y = year - 1;
    let a = y / 100;
    let b = 2 - a + a / 4;
    let whole_days = (365.25 * y as f64).floor() as i64 + (30.6001_f64 * 14.0).floor() as i64;
    // 1720994.5 days, split to keep the half day exact
    (whole_days + 1720994 + b as i64) * TICKS_PER_DAY + TICKS_PER_DAY / 2
}

fn check_year(year: i32) -> Result<(), TimeErrors> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeErrors::YearOutOfRange(year))
    }
}

impl Sub for JulianDate {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        self.difference(&other)
    }
}

impl Add<Duration> for JulianDate {
    type Output = Result<JulianDate, TimeErrors>;

    fn add(mut self, span: Duration) -> Self::Output {
        self.advance(span)?;
        Ok(self)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.3f UTC")),
            Err(_) => write!(f, "JD {}", self.date()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use hifitime::Unit;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    #[test_case(1990, 1, 1, 0, 0, 0, 0, 2447892.5; "1990 new year")]
    #[test_case(2000, 1, 1, 12, 0, 0, 0, 2451545.0; "J2000")]
    #[test_case(1900, 1, 1, 0, 0, 0, 0, 2415020.5; "1900 new year")]
    #[test_case(2100, 12, 31, 0, 0, 0, 0, 2488433.5; "last supported day")]
    #[test_case(2024, 2, 29, 18, 0, 0, 0, 2460370.25; "leap day evening")]
    fn from_civil_fixed_points(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        expected: f64,
    ) {
        let jd = JulianDate::from_civil(year, month, day, hour, minute, second, millisecond).unwrap();
        assert_abs_diff_eq!(jd.date(), expected, epsilon = 1e-9);
    }

    #[test_case(1899; "before window")]
    #[test_case(2101; "after window")]
    fn year_outside_window(year: i32) {
        assert_eq!(
            JulianDate::from_civil(year, 6, 1, 0, 0, 0, 0),
            Err(TimeErrors::YearOutOfRange(year))
        );
        assert_eq!(
            JulianDate::from_year_day(year, 100.0),
            Err(TimeErrors::YearOutOfRange(year))
        );
    }

    #[test_case(0.5; "before first day")]
    #[test_case(367.0; "past last day")]
    #[test_case(f64::NAN; "not a number")]
    fn day_of_year_outside_range(day: f64) {
        assert!(matches!(
            JulianDate::from_year_day(2000, day),
            Err(TimeErrors::DayOfYearOutOfRange(_))
        ));
    }

    #[test]
    fn invalid_civil_fields() {
        assert!(matches!(
            JulianDate::from_civil(2023, 2, 29, 0, 0, 0, 0),
            Err(TimeErrors::InvalidCivilDate { .. })
        ));
        assert!(matches!(
            JulianDate::from_civil(2023, 1, 1, 24, 0, 0, 0),
            Err(TimeErrors::InvalidCivilDate { .. })
        ));
        assert!(matches!(
            JulianDate::from_civil(2023, 1, 1, 0, 0, 0, 1000),
            Err(TimeErrors::InvalidCivilDate { .. })
        ));
    }

    #[test]
    fn year_day_matches_civil() {
        let from_day = JulianDate::from_year_day(2000, 179.78495062).unwrap();
        let from_civil = JulianDate::from_civil(2000, 6, 27, 18, 50, 19, 733).unwrap();
        assert_abs_diff_eq!(from_day.date(), from_civil.date(), epsilon = 1e-8);
    }

    #[test]
    fn civil_round_trip_within_a_millisecond() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..5000 {
            let millis = rng.gen_range(0..(200_i64 * 365 * 86_400_000));
            let datetime = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap()
                + TimeDelta::milliseconds(millis);
            let jd = JulianDate::from_datetime(&datetime).unwrap();
            let back = jd.to_datetime().unwrap();
            let error = (back - datetime).num_milliseconds().abs();
            assert!(error <= 1, "{} -> {} -> {}", datetime, jd.date(), back);
        }
    }

    #[test]
    fn civil_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
        for _ in 0..2000 {
            let t1 = start + TimeDelta::milliseconds(rng.gen_range(0..3_000_000_000_000));
            let t2 = t1 + TimeDelta::milliseconds(rng.gen_range(1..86_400_000));
            let jd1 = JulianDate::from_datetime(&t1).unwrap();
            let jd2 = JulianDate::from_datetime(&t2).unwrap();
            assert!(jd1 < jd2, "{} !< {}", t1, t2);
        }
    }

    #[test]
    fn to_datetime_carries_rounding_into_next_day() {
        let mut jd = JulianDate::from_civil(2000, 1, 1, 23, 59, 59, 999).unwrap();
        jd.add_seconds(0.0006).unwrap();
        let datetime = jd.to_datetime().unwrap();
        assert_eq!(datetime, Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn ordering_follows_ticks() {
        let a = JulianDate::new(2451545.0);
        let mut b = a;
        b.add_seconds(1e-6).unwrap();
        assert!(a < b);
        assert_eq!((b - a).total_nanoseconds(), 1000);
    }

    #[test]
    fn epoch_round_trip() {
        let epoch = Epoch::from_gregorian_utc(2019, 12, 9, 16, 38, 29, 363_000_000);
        let jd = JulianDate::from_epoch(&epoch).unwrap();
        let back = jd.to_epoch().unwrap();
        assert_abs_diff_eq!((back - epoch).to_seconds(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn difference_uses_ticks() {
        let a = JulianDate::from_civil(2000, 1, 1, 12, 0, 0, 0).unwrap();
        let b = JulianDate::from_civil(2000, 1, 2, 13, 30, 0, 0).unwrap();
        let span = b - a;
        assert_eq!(span.total_nanoseconds() % 100, 0);
        assert_abs_diff_eq!(span.to_seconds(), 91_800.0, epsilon = 1e-3);
        assert_abs_diff_eq!((a - b).to_seconds(), -91_800.0, epsilon = 1e-3);
    }

    #[test]
    fn advancing_moves_the_same_date() {
        let mut jd = JulianDate::from_civil(2000, 1, 1, 0, 0, 0, 0).unwrap();
        jd.add_days(1.0).unwrap();
        jd.add_hours(12.0).unwrap();
        jd.add_minutes(30.0).unwrap();
        jd.add_seconds(15.0).unwrap();
        let datetime = jd.to_datetime().unwrap();
        assert_eq!(datetime, Utc.with_ymd_and_hms(2000, 1, 2, 12, 30, 15).unwrap());

        let later = (jd + Duration::from_seconds(45.0)).unwrap();
        assert_eq!(
            later.to_datetime().unwrap(),
            Utc.with_ymd_and_hms(2000, 1, 2, 12, 31, 0).unwrap()
        );
    }

    #[test_case(f64::NAN; "not a number")]
    #[test_case(f64::INFINITY; "positive infinity")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    #[test_case(1.0e13; "past the tick range")]
    fn unrepresentable_offsets_leave_date_unchanged(days: f64) {
        let start = JulianDate::from_civil(2020, 5, 1, 0, 0, 0, 0).unwrap();
        let mut jd = start;
        assert!(matches!(jd.add_days(days), Err(TimeErrors::SpanOutOfRange(_))));
        assert_eq!(jd, start);
    }

    #[test]
    fn advancing_past_the_last_tick_is_an_error() {
        let mut jd = JulianDate::new(1.0e7);
        assert!(jd.advance(1.0e9 * Unit::Day).is_err());
        let near_end = JulianDate::new(1.0e12);
        assert!((near_end + 1.0 * Unit::Day).is_err());
        assert_eq!(jd, JulianDate::new(1.0e7));
    }

    #[test]
    fn many_small_advances_stay_on_the_millisecond() {
        let mut jd = JulianDate::from_civil(2010, 3, 4, 5, 6, 7, 0).unwrap();
        for _ in 0..3600 {
            jd.advance(Duration::from_milliseconds(250.0)).unwrap();
        }
        let datetime = jd.to_datetime().unwrap();
        assert_eq!(datetime, Utc.with_ymd_and_hms(2010, 3, 4, 5, 21, 7).unwrap());
    }

    #[test]
    fn sidereal_angle_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let jd = JulianDate::new(rng.gen_range(2415020.5..2488433.5));
            let gmst = jd.sidereal_angle();
            assert!((0.0..TWO_PI).contains(&gmst));
            let lmst = jd.local_sidereal_angle(rng.gen_range(-PI..PI));
            assert!((0.0..TWO_PI).contains(&lmst));
        }
    }

    #[test]
    fn display_renders_utc() {
        let jd = JulianDate::from_civil(2000, 6, 27, 18, 50, 19, 733).unwrap();
        assert_eq!(jd.to_string(), "2000-06-27 18:50:19.733 UTC");
    }
}
