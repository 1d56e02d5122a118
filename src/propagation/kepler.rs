use super::propagation_errors::ConvergenceWarning;
use crate::config::PropagatorConfig;

/// Largest Newton step allowed per iteration (radians).
const MAX_STEP: f64 = 0.95;

#[derive(Debug, Clone, Copy)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct KeplerSolution {
    /// Eccentric longitude E + ω (radians).
    pub eccentric_longitude: f64,
    pub iterations: u32,
    pub warning: Option<ConvergenceWarning>,
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        KeplerSolver {
            tolerance,
            max_iterations,
        }
    }

    /// Solves Kepler's equation in the equinoctial form used by SGP4,
    /// `u = E - axn·sin(E) + ayn·cos(E)`, by Newton-Raphson starting at
    /// `E = u`. With `ayn = 0` this reduces to the classical `M = E - e·sin(E)`.
    ///
    /// Never loops past `max_iterations`: the last iterate is returned with a
    /// warning instead.
    pub fn solve(&self, u: f64, axn: f64, ayn: f64) -> KeplerSolution {
        let mut eccentric_longitude = u;
        let mut step = f64::INFINITY;
        let mut iterations = 0;

        while step.abs() >= self.tolerance && iterations < self.max_iterations {
            let (sin_e, cos_e) = eccentric_longitude.sin_cos();
            step = (u - ayn * cos_e + axn * sin_e - eccentric_longitude)
                / (1.0 - cos_e * axn - sin_e * ayn);
            step = step.clamp(-MAX_STEP, MAX_STEP);
            eccentric_longitude += step;
            iterations += 1;
        }

        let warning = (step.abs() >= self.tolerance).then_some(ConvergenceWarning {
            iterations,
            residual: step.abs(),
        });

        KeplerSolution {
            eccentric_longitude,
            iterations,
            warning,
        }
    }
}

impl From<&PropagatorConfig> for KeplerSolver {
    fn from(config: &PropagatorConfig) -> Self {
        KeplerSolver::new(config.kepler_tolerance, config.kepler_max_iterations)
    }
}
