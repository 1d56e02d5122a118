pub mod julian_date;
pub mod sidereal;
pub mod time_errors;

pub use julian_date::JulianDate;
pub use time_errors::TimeErrors;
