// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;
pub const DEG2RAD: f64 = PI / 180.0;

// Time
pub const HOURS_PER_DAY: f64 = 24.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const TICKS_PER_DAY: i64 = 864_000_000_000; // 100 ns ticks
pub const TICKS_PER_MINUTE: i64 = 600_000_000;
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const NANOSECONDS_PER_TICK: i128 = 100;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
pub const J2000_JULIAN_DATE: f64 = 2451545.0; // 2000-01-01 12:00:00 UTC
pub const JAN_1_1950_JULIAN_DATE: f64 = 2433281.5; // 1950-01-00 00:00:00 UTC, SGP4 day count origin
pub const UNIX_EPOCH_JULIAN_DATE: f64 = 2440587.5;
pub const EARTH_ROTATIONS_PER_SIDEREAL_DAY: f64 = 1.00273790934;

// Calendar window accepted by the Julian date conversions
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

// Two-line element sets
pub const TLE_LINE_LENGTH: usize = 69;
pub const DEEP_SPACE_PERIOD_MINUTES: f64 = 225.0;

// Earth (WGS-72 is the reference model for element sets)
pub const WGS72_RADIUS_KM: f64 = 6378.135;
pub const WGS72_F: f64 = 1.0 / 298.26; // Flattening
pub const WGS72_MU: f64 = 398600.8; // km³/s²
pub const WGS84_RADIUS_KM: f64 = 6378.137;
pub const WGS84_MU: f64 = 398600.5;
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.292115e-5; // Earth's rotation rate (rad/s)
