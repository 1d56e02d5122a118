use super::geodetic::{ecef_to_eci, Geodetic};
use crate::constants::*;
use crate::models::Eci;
use crate::time::JulianDate;
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Direction and distance from an observer to a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Topocentric {
    /// Clockwise from north, [0, 2π).
    pub azimuth: f64,
    pub elevation: f64,
    pub range_km: f64,
    /// Positive when the target is receding. Zero when the target sits on
    /// the observer.
    pub range_rate_km_s: f64,
}

impl Topocentric {
    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth.to_degrees()
    }

    pub fn elevation_deg(&self) -> f64 {
        self.elevation.to_degrees()
    }

    pub fn is_visible(&self) -> bool {
        self.elevation > 0.0
    }
}

/// A fixed observer on the rotating Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Site {
    location: Geodetic,
}

impl Site {
    pub fn new(location: Geodetic) -> Self {
        Site { location }
    }

    pub fn from_degrees(latitude: f64, longitude: f64, altitude_km: f64) -> Self {
        Site::new(Geodetic::from_degrees(latitude, longitude, altitude_km))
    }

    pub fn location(&self) -> &Geodetic {
        &self.location
    }

    /// Inertial position (km) and velocity (km/s) of the observer.
    pub fn eci(&self, date: &JulianDate) -> (na::Vector3<f64>, na::Vector3<f64>) {
        let position = ecef_to_eci(&self.location.to_ecef(), date.sidereal_angle());
        let omega = na::Vector3::new(0.0, 0.0, EARTH_ANGULAR_VELOCITY);
        (position, omega.cross(&position))
    }

    pub fn look_angle(&self, target: &Eci) -> Topocentric {
        let (site_position, site_velocity) = self.eci(&target.julian_date);
        let range = target.position - site_position;
        let range_rate = target.velocity - site_velocity;
        let range_km = range.norm();

        // South-east-zenith frame at the observer
        let theta = target.julian_date.local_sidereal_angle(self.location.longitude);
        let (sin_lat, cos_lat) = self.location.latitude.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let south = sin_lat * cos_theta * range.x + sin_lat * sin_theta * range.y - cos_lat * range.z;
        let east = -sin_theta * range.x + cos_theta * range.y;
        let zenith = cos_lat * cos_theta * range.x + cos_lat * sin_theta * range.y + sin_lat * range.z;

        let mut azimuth = (-east).atan2(south) + PI;
        if azimuth >= TWO_PI {
            azimuth -= TWO_PI;
        }

        Topocentric {
            azimuth,
            elevation: zenith.atan2(south.hypot(east)),
            range_km,
            range_rate_km_s: if range_km > 0.0 {
                range.dot(&range_rate) / range_km
            } else {
                0.0
            },
        }
    }
}
