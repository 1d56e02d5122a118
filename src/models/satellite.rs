use super::eci::Eci;
use super::satellite_errors::SatelliteErrors;
use crate::config::PropagatorConfig;
use crate::propagation::{PropagationErrors, Propagator, MAX_OFFSET_MINUTES};
use crate::time::JulianDate;
use crate::tle::OrbitalElements;
use chrono::{DateTime, Utc};
use hifitime::{Duration, Epoch};
use log::debug;

/// A named object bound to its own propagator.
///
/// Immutable after construction. Every position query is a pure function
/// of the requested time, so one `Satellite` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Satellite {
    elements: OrbitalElements,
    propagator: Propagator,
}

impl Satellite {
    pub fn new(elements: OrbitalElements, config: PropagatorConfig) -> Result<Self, SatelliteErrors> {
        let propagator = Propagator::new(&elements, config)?;
        debug!("Created satellite {} ({})", elements.name(), elements.catalog_number());
        Ok(Satellite {
            elements,
            propagator,
        })
    }

    /// Builds a satellite from the two data lines with the default
    /// configuration. A non-blank `name` overrides the catalog number.
    pub fn parse(line1: &str, line2: &str, name: Option<&str>) -> Result<Self, SatelliteErrors> {
        let elements = OrbitalElements::parse(line1, line2, name)?;
        Self::new(elements, PropagatorConfig::default())
    }

    /// Accepts two data lines, or a name line followed by two data lines.
    pub fn from_lines(lines: &[&str], name: Option<&str>) -> Result<Self, SatelliteErrors> {
        let elements = OrbitalElements::from_lines(lines, name)?;
        Self::new(elements, PropagatorConfig::default())
    }

    pub fn name(&self) -> &str {
        self.elements.name()
    }

    pub fn catalog_number(&self) -> &str {
        self.elements.catalog_number()
    }

    /// Element set epoch rendered as a UTC timestamp.
    pub fn epoch_string(&self) -> String {
        self.elements.epoch().to_string()
    }

    pub fn epoch(&self) -> JulianDate {
        self.propagator.epoch()
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    pub fn period_minutes(&self) -> f64 {
        self.propagator.period_minutes()
    }

    pub fn position_at(&self, date: &JulianDate) -> Result<Eci, PropagationErrors> {
        self.propagator.propagate_julian(date)
    }

    pub fn position_at_minutes(&self, minutes: f64) -> Result<Eci, PropagationErrors> {
        self.propagator.propagate(minutes)
    }

    pub fn position_at_datetime(&self, datetime: &DateTime<Utc>) -> Result<Eci, SatelliteErrors> {
        let date = JulianDate::from_datetime(datetime)?;
        Ok(self.position_at(&date)?)
    }

    pub fn position_at_epoch(&self, epoch: &Epoch) -> Result<Eci, SatelliteErrors> {
        let date = JulianDate::from_epoch(epoch)?;
        Ok(self.position_at(&date)?)
    }

    /// `count` states starting at `start`, spaced by `step`. A failure at
    /// one time (e.g. decay) does not stop the later queries.
    pub fn ephemeris(
        &self,
        start: JulianDate,
        step: Duration,
        count: usize,
    ) -> Vec<Result<Eci, PropagationErrors>> {
        (0..count)
            .map(|k| {
                let offset = step * k as i64;
                match start + offset {
                    Ok(date) => self.position_at(&date),
                    Err(_) => Err(PropagationErrors::TimeOutOfRange {
                        minutes: start.minutes_since(&self.epoch()) + offset.to_seconds() / 60.0,
                        limit: MAX_OFFSET_MINUTES,
                    }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::Regime;
    use crate::tle::TleErrors;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;
    use hifitime::Unit;

    const ISS_1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    fn iss() -> Satellite {
        Satellite::parse(ISS_1, ISS_2, Some("ISS (ZARYA)")).unwrap()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn satellite_is_shareable() {
        assert_send_sync::<Satellite>();
    }

    #[test]
    fn identity_accessors() {
        let satellite = iss();
        assert_eq!(satellite.name(), "ISS (ZARYA)");
        assert_eq!(satellite.catalog_number(), "25544");
        assert_eq!(satellite.epoch_string(), "2008-09-20 12:25:40.104 UTC");
        assert_eq!(satellite.propagator().regime(), Regime::NearEarth);
        assert!((satellite.period_minutes() - satellite.elements().period_minutes()).abs() < 0.5);
    }

    #[test]
    fn name_defaults_to_catalog_number() {
        let satellite = Satellite::parse(ISS_1, ISS_2, Some("   ")).unwrap();
        assert_eq!(satellite.name(), "25544");
    }

    #[test]
    fn three_line_form() {
        let satellite = Satellite::from_lines(&["0 ISS (ZARYA)", ISS_1, ISS_2], None).unwrap();
        assert_eq!(satellite.name(), "ISS (ZARYA)");
    }

    #[test]
    fn malformed_line_constructs_nothing() {
        let err = Satellite::parse(&ISS_1[..60], ISS_2, None).unwrap_err();
        assert!(matches!(
            err,
            SatelliteErrors::Tle(TleErrors::InvalidLength { line: 1, length: 60 })
        ));
    }

    #[test]
    fn absolute_and_relative_queries_agree() {
        let satellite = iss();
        let mut date = satellite.epoch();
        date.add_minutes(45.0).unwrap();
        let by_date = satellite.position_at(&date).unwrap();
        let by_minutes = satellite.position_at_minutes(45.0).unwrap();
        assert_abs_diff_eq!(by_date.position, by_minutes.position, epsilon = 1e-6);
        assert_abs_diff_eq!(by_date.velocity, by_minutes.velocity, epsilon = 1e-9);
    }

    #[test]
    fn datetime_and_epoch_queries() {
        let satellite = iss();
        let datetime = Utc.with_ymd_and_hms(2008, 9, 20, 13, 25, 40).unwrap();
        let from_chrono = satellite.position_at_datetime(&datetime).unwrap();
        assert_abs_diff_eq!(from_chrono.minutes_since_epoch, 59.998263, epsilon = 1e-5);

        let epoch = Epoch::from_gregorian_utc_hms(2008, 9, 20, 13, 25, 40);
        let from_hifitime = satellite.position_at_epoch(&epoch).unwrap();
        assert_abs_diff_eq!(from_chrono.position, from_hifitime.position, epsilon = 1e-6);
    }

    #[test]
    fn ephemeris_past_the_time_range_reports_errors() {
        let satellite = iss();
        let states = satellite.ephemeris(satellite.epoch(), 1.0e9 * Unit::Day, 3);
        assert!(states[0].is_ok());
        for state in &states[1..] {
            assert!(matches!(state, Err(PropagationErrors::TimeOutOfRange { .. })));
        }
    }

    #[test]
    fn ephemeris_is_evenly_spaced() {
        let satellite = iss();
        let states = satellite.ephemeris(satellite.epoch(), 10.0 * Unit::Minute, 7);
        assert_eq!(states.len(), 7);
        for (k, state) in states.iter().enumerate() {
            let state = state.as_ref().unwrap();
            assert_abs_diff_eq!(state.minutes_since_epoch, 10.0 * k as f64, epsilon = 1e-9);
            let altitude = state.radius_km() - crate::constants::WGS72_RADIUS_KM;
            assert!((300.0..400.0).contains(&altitude), "{}", altitude);
        }
    }
}
