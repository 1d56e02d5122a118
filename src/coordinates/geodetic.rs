use crate::constants::*;
use crate::models::Eci;
use nalgebra as na;
use serde::{Deserialize, Serialize};

const MAX_LATITUDE_ITERATIONS: usize = 10;
const LATITUDE_TOLERANCE: f64 = 1e-12;

/// Geodetic position on the WGS-72 ellipsoid. Angles in radians, longitude
/// east-positive in (-π, π].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
}

/// Rotates an inertial vector into the Earth-fixed frame given the
/// Greenwich sidereal angle.
pub fn eci_to_ecef(position: &na::Vector3<f64>, sidereal_angle: f64) -> na::Vector3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), -sidereal_angle) * position
}

pub fn ecef_to_eci(position: &na::Vector3<f64>, sidereal_angle: f64) -> na::Vector3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), sidereal_angle) * position
}

impl Geodetic {
    pub fn from_degrees(latitude: f64, longitude: f64, altitude_km: f64) -> Self {
        Geodetic {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
            altitude_km,
        }
    }

    /// Sub-satellite point of an inertial state, using the mean sidereal
    /// angle at the state's time.
    pub fn from_eci(eci: &Eci) -> Self {
        let gmst = eci.julian_date.sidereal_angle();
        Self::from_ecef(&eci_to_ecef(&eci.position, gmst))
    }

    /// Earth-fixed Cartesian (km) to geodetic, iterating on latitude.
    pub fn from_ecef(position: &na::Vector3<f64>) -> Self {
        let (x, y, z) = (position.x, position.y, position.z);
        let a = WGS72_RADIUS_KM;
        let f = WGS72_F;
        let b = a * (1.0 - f);
        let e2 = 2.0 * f - f * f;

        let longitude = y.atan2(x);
        let p = (x * x + y * y).sqrt();

        // On the polar axis
        if p < 1e-10 {
            let latitude = if z < 0.0 { -PI / 2.0 } else { PI / 2.0 };
            return Geodetic {
                latitude,
                longitude: 0.0,
                altitude_km: z.abs() - b,
            };
        }

        let mut latitude = z.atan2(p * (1.0 - e2));
        for _ in 0..MAX_LATITUDE_ITERATIONS {
            let sin_lat = latitude.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            let h = p / latitude.cos() - n;

            let previous = latitude;
            latitude = (z / p).atan2(1.0 - e2 * n / (n + h));
            if (latitude - previous).abs() < LATITUDE_TOLERANCE {
                break;
            }
        }

        let sin_lat = latitude.sin();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        Geodetic {
            latitude,
            longitude,
            altitude_km: p / latitude.cos() - n,
        }
    }

    pub fn to_ecef(&self) -> na::Vector3<f64> {
        let f = WGS72_F;
        let e2 = 2.0 * f - f * f;
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let n = WGS72_RADIUS_KM / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        na::Vector3::new(
            (n + self.altitude_km) * cos_lat * cos_lon,
            (n + self.altitude_km) * cos_lat * sin_lon,
            (n * (1.0 - e2) + self.altitude_km) * sin_lat,
        )
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude.to_degrees()
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude.to_degrees()
    }
}
