pub mod deep_space;
pub mod kepler;
pub mod propagation_errors;
pub mod sgp4;

pub use deep_space::ResonanceKind;
pub use propagation_errors::{ConvergenceWarning, PropagationErrors};
pub use sgp4::{MeanElements, Propagator, Regime, MAX_OFFSET_MINUTES};
