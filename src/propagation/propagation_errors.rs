use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum PropagationErrors {
    /// Osculating radius fell below one Earth radius.
    Decayed { minutes: f64, radius_er: f64 },
    MeanEccentricity { minutes: f64, value: f64 },
    MeanMotion { minutes: f64, value: f64 },
    PerturbedEccentricity { minutes: f64, value: f64 },
    SemiLatusRectum { minutes: f64, value: f64 },
    /// The requested offset from epoch is NaN or infinite.
    NonFiniteTime(f64),
    TimeOutOfRange { minutes: f64, limit: f64 },
    InvalidElements(String),
}

impl fmt::Display for PropagationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationErrors::Decayed { minutes, radius_er } => write!(
                f,
                "Orbit decayed at {:.3} min past epoch (radius {:.6} Earth radii)",
                minutes, radius_er
            ),
            PropagationErrors::MeanEccentricity { minutes, value } => write!(
                f,
                "Mean eccentricity {} outside [0, 1) at {:.3} min past epoch",
                value, minutes
            ),
            PropagationErrors::MeanMotion { minutes, value } => write!(
                f,
                "Mean motion {} is not positive at {:.3} min past epoch",
                value, minutes
            ),
            PropagationErrors::PerturbedEccentricity { minutes, value } => write!(
                f,
                "Perturbed eccentricity {} outside [0, 1] at {:.3} min past epoch",
                value, minutes
            ),
            PropagationErrors::SemiLatusRectum { minutes, value } => write!(
                f,
                "Semi-latus rectum {} is negative at {:.3} min past epoch",
                value, minutes
            ),
            PropagationErrors::NonFiniteTime(minutes) => {
                write!(f, "Offset of {} min past epoch is not finite", minutes)
            }
            PropagationErrors::TimeOutOfRange { minutes, limit } => write!(
                f,
                "Offset of {} min past epoch exceeds the {} min limit",
                minutes, limit
            ),
            PropagationErrors::InvalidElements(msg) => write!(f, "Invalid elements: {}", msg),
        }
    }
}

impl Error for PropagationErrors {}

/// Kepler's equation stopped at its iteration cap before meeting the
/// tolerance. The position built from the last iterate is still returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceWarning {
    pub iterations: u32,
    pub residual: f64,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kepler solve did not converge after {} iterations (last step {:e} rad)",
            self.iterations, self.residual
        )
    }
}
