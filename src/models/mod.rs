pub mod eci;
pub mod satellite;
pub mod satellite_errors;

pub use eci::Eci;
pub use satellite::Satellite;
pub use satellite_errors::SatelliteErrors;
