pub mod geodetic;
pub mod site;

pub use geodetic::Geodetic;
pub use site::{Site, Topocentric};
