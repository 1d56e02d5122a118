pub mod propagator;

pub use propagator::{GravityConstants, GravityModel, OperationMode, PropagatorConfig};
