//! SGP4/SDP4 orbit propagation from two-line element sets, with the
//! Julian-date time system and frame conversions it depends on.

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod models;
pub mod numerics;
pub mod propagation;
pub mod time;
pub mod tle;

pub use config::PropagatorConfig;
pub use models::{Eci, Satellite, SatelliteErrors};
pub use time::JulianDate;
pub use tle::OrbitalElements;
