use crate::propagation::PropagationErrors;
use crate::time::TimeErrors;
use crate::tle::TleErrors;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SatelliteErrors {
    Tle(TleErrors),
    Time(TimeErrors),
    Propagation(PropagationErrors),
}

impl fmt::Display for SatelliteErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatelliteErrors::Tle(err) => write!(f, "Element set error: {}", err),
            SatelliteErrors::Time(err) => write!(f, "Time conversion error: {}", err),
            SatelliteErrors::Propagation(err) => write!(f, "Propagation error: {}", err),
        }
    }
}

impl Error for SatelliteErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SatelliteErrors::Tle(err) => Some(err),
            SatelliteErrors::Time(err) => Some(err),
            SatelliteErrors::Propagation(err) => Some(err),
        }
    }
}

impl From<TleErrors> for SatelliteErrors {
    fn from(err: TleErrors) -> Self {
        SatelliteErrors::Tle(err)
    }
}

impl From<TimeErrors> for SatelliteErrors {
    fn from(err: TimeErrors) -> Self {
        SatelliteErrors::Time(err)
    }
}

impl From<PropagationErrors> for SatelliteErrors {
    fn from(err: PropagationErrors) -> Self {
        SatelliteErrors::Propagation(err)
    }
}
