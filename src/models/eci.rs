use crate::propagation::{ConvergenceWarning, MeanElements};
use crate::time::JulianDate;
use nalgebra as na;

/// Position (km) and velocity (km/s) in the TEME Earth-centred inertial
/// frame, valid at `julian_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Eci {
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
    pub julian_date: JulianDate,
    pub minutes_since_epoch: f64,
    /// Mean elements after secular and deep-space updates, before the
    /// short-period corrections.
    pub mean_elements: MeanElements,
    pub convergence: Option<ConvergenceWarning>,
}

impl Eci {
    pub fn radius_km(&self) -> f64 {
        self.position.norm()
    }

    pub fn speed_km_s(&self) -> f64 {
        self.velocity.norm()
    }

    /// Specific orbital energy (km²/s²) about a body with gravitational
    /// parameter `mu`.
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * self.velocity.norm_squared() - mu / self.radius_km()
    }

    /// Specific angular momentum vector (km²/s).
    pub fn angular_momentum(&self) -> na::Vector3<f64> {
        self.position.cross(&self.velocity)
    }

    pub fn converged(&self) -> bool {
        self.convergence.is_none()
    }
}
