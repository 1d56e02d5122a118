pub mod elements;
pub mod fields;
pub mod tle_errors;

pub use elements::{ChecksumMismatch, OrbitalElements};
pub use tle_errors::TleErrors;
