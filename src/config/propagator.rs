use crate::constants::{WGS72_MU, WGS72_RADIUS_KM, WGS84_MU, WGS84_RADIUS_KM};
use serde::{Deserialize, Serialize};

/// Earth gravity field used to derive the propagator constants.
///
/// Element sets are generated against WGS-72, so that is the default.
/// The other two exist for comparison with published test vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityModel {
    Wgs72Old,
    #[default]
    Wgs72,
    Wgs84,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityConstants {
    pub mu: f64,        // km³/s²
    pub radius_km: f64, // Equatorial radius
    pub xke: f64,       // sqrt(mu) in Earth radii^1.5 per minute
    pub tumin: f64,     // Minutes per time unit
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    pub j3oj2: f64,
}

impl GravityModel {
    pub fn constants(&self) -> GravityConstants {
        let (mu, radius_km, xke, j2, j3, j4) = match self {
            GravityModel::Wgs72Old => (
                398600.79964,
                WGS72_RADIUS_KM,
                0.0743669161,
                0.001082616,
                -0.00000253881,
                -0.00000165597,
            ),
            GravityModel::Wgs72 => (
                WGS72_MU,
                WGS72_RADIUS_KM,
                60.0 / (WGS72_RADIUS_KM.powi(3) / WGS72_MU).sqrt(),
                0.001082616,
                -0.00000253881,
                -0.00000165597,
            ),
            GravityModel::Wgs84 => (
                WGS84_MU,
                WGS84_RADIUS_KM,
                60.0 / (WGS84_RADIUS_KM.powi(3) / WGS84_MU).sqrt(),
                0.00108262998905,
                -0.00000253215306,
                -0.00000161098761,
            ),
        };

        GravityConstants {
            mu,
            radius_km,
            xke,
            tumin: 1.0 / xke,
            j2,
            j3,
            j4,
            j3oj2: j3 / j2,
        }
    }
}

/// Selects between the historical AFSPC behaviour and the improved
/// formulation for the epoch sidereal time and the low-inclination
/// node wrap in the lunar-solar periodics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Afspc,
    #[default]
    Improved,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagatorConfig {
    pub gravity: GravityModel,
    pub mode: OperationMode,
    pub kepler_tolerance: f64,
    pub kepler_max_iterations: u32,
}

impl PropagatorConfig {
    pub const KEPLER_TOLERANCE: f64 = 1.0e-12;
    pub const KEPLER_MAX_ITERATIONS: u32 = 10;

    pub fn with_gravity(mut self, gravity: GravityModel) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_mode(mut self, mode: OperationMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            gravity: GravityModel::default(),
            mode: OperationMode::default(),
            kepler_tolerance: Self::KEPLER_TOLERANCE,
            kepler_max_iterations: Self::KEPLER_MAX_ITERATIONS,
        }
    }
}
