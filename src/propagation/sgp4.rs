use super::deep_space::{DeepSpace, ResonanceKind, SecularRates};
use super::kepler::KeplerSolver;
use super::propagation_errors::PropagationErrors;
use crate::config::{GravityConstants, OperationMode, PropagatorConfig};
use crate::constants::*;
use crate::models::Eci;
use crate::time::sidereal::{afspc_sidereal_angle, greenwich_mean_sidereal_angle};
use crate::time::JulianDate;
use crate::tle::OrbitalElements;
use log::{debug, trace, warn};
use nalgebra as na;
use serde::{Deserialize, Serialize};

/// Perigee height (km) below which the drag terms beyond second order are
/// dropped.
const SIMPLIFIED_PERIGEE_KM: f64 = 220.0;
const XLCOF_GUARD: f64 = 1.5e-12;
/// Largest offset from epoch (minutes, about 190 years) a query accepts.
pub const MAX_OFFSET_MINUTES: f64 = 1.0e8;

/// Single-averaged mean elements. Angles in radians, semi-major axis in
/// Earth radii, mean motion in radians per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub right_ascension: f64,
    pub argument_of_perigee: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    NearEarth,
    DeepSpace(ResonanceKind),
}

/// Constants derived once from the element set.
#[derive(Debug, Clone)]
struct PropagatorState {
    epoch_elements: MeanElements,
    bstar: f64,
    rates: SecularRates,
    simplified: bool,
    aycof: f64,
    con41: f64,
    x1mth2: f64,
    x7thm1: f64,
    xlcof: f64,
    cc1: f64,
    cc4: f64,
    cc5: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    delmo: f64,
    eta: f64,
    omgcof: f64,
    sinmao: f64,
    xmcof: f64,
    nodecf: f64,
    t2cof: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
    deep_space: Option<DeepSpace>,
}

/// SGP4/SDP4 propagator for one element set.
///
/// Every query is an independent function of the minutes past epoch, so a
/// shared `&Propagator` can be queried from any number of threads.
#[derive(Debug, Clone)]
pub struct Propagator {
    epoch: JulianDate,
    config: PropagatorConfig,
    gravity: GravityConstants,
    solver: KeplerSolver,
    state: PropagatorState,
}

impl Propagator {
    pub fn new(elements: &OrbitalElements, config: PropagatorConfig) -> Result<Self, PropagationErrors> {
        let gravity = config.gravity.constants();
        let GravityConstants {
            radius_km,
            xke,
            j2,
            j4,
            j3oj2,
            ..
        } = gravity;

        let ecco = elements.eccentricity();
        let inclo = elements.inclination_rad();
        let nodeo = elements.right_ascension_rad();
        let argpo = elements.argument_of_perigee_rad();
        let mo = elements.mean_anomaly_rad();
        let no_kozai = elements.mean_motion_rad_per_minute();
        let bstar = elements.bstar();

        if !(0.0..1.0).contains(&ecco) {
            return Err(PropagationErrors::InvalidElements(format!(
                "eccentricity {} outside [0, 1)",
                ecco
            )));
        }

        // Recover the Brouwer mean motion from the Kozai mean motion
        let eccsq = ecco * ecco;
        let omeosq = 1.0 - eccsq;
        let rteosq = omeosq.sqrt();
        let (sinio, cosio) = inclo.sin_cos();
        let cosio2 = cosio * cosio;

        let ak = (xke / no_kozai).powf(TWO_THIRDS);
        let d1 = 0.75 * j2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
        let del = d1 / (ak * ak);
        let adel = ak * (1.0 - del * del - del * (1.0 / 3.0 + 134.0 * del * del / 81.0));
        let del = d1 / (adel * adel);
        let no = no_kozai / (1.0 + del);
        if !(no.is_finite() && no > 0.0) {
            return Err(PropagationErrors::InvalidElements(format!(
                "recovered mean motion {} is not positive",
                no
            )));
        }

        let ao = (xke / no).powf(TWO_THIRDS);
        let po = ao * omeosq;
        let con42 = 1.0 - 5.0 * cosio2;
        let con41 = -con42 - cosio2 - cosio2;
        let posq = po * po;
        let rp = ao * (1.0 - ecco);

        let epoch = elements.epoch();
        let gsto = match config.mode {
            OperationMode::Afspc => afspc_sidereal_angle(epoch.days_since_1950()),
            OperationMode::Improved => greenwich_mean_sidereal_angle(epoch.date()),
        };

        // Atmospheric density fit parameters, adjusted for low perigees
        let mut simplified = rp < SIMPLIFIED_PERIGEE_KM / radius_km + 1.0;
        let perigee_km = (rp - 1.0) * radius_km;
        let (sfour, qzms24) = if perigee_km < 156.0 {
            let s = if perigee_km < 98.0 { 20.0 } else { perigee_km - 78.0 };
            (s / radius_km + 1.0, ((120.0 - s) / radius_km).powi(4))
        } else {
            (78.0 / radius_km + 1.0, ((120.0 - 78.0) / radius_km).powi(4))
        };

        let pinvsq = 1.0 / posq;
        let tsi = 1.0 / (ao - sfour);
        let eta = ao * ecco * tsi;
        let etasq = eta * eta;
        let eeta = ecco * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qzms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let cc2 = coef1
            * no
            * (ao * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.375 * j2 * tsi / psisq * con41 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let cc1 = bstar * cc2;
        let cc3 = if ecco > 1.0e-4 {
            -2.0 * coef * tsi * j3oj2 * no * sinio / ecco
        } else {
            0.0
        };
        let x1mth2 = 1.0 - cosio2;
        let cc4 = 2.0
            * no
            * coef1
            * ao
            * omeosq
            * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
                - j2 * tsi / (ao * psisq)
                    * (-3.0 * con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75 * x1mth2 * (2.0 * etasq - eeta * (1.0 + etasq)) * (2.0 * argpo).cos()));
        let cc5 = 2.0 * coef1 * ao * omeosq * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        // Secular rates from J2 and J4
        let cosio4 = cosio2 * cosio2;
        let temp1 = 1.5 * j2 * pinvsq * no;
        let temp2 = 0.5 * temp1 * j2 * pinvsq;
        let temp3 = -0.46875 * j4 * pinvsq * pinvsq * no;
        let mdot = no
            + 0.5 * temp1 * rteosq * con41
            + 0.0625 * temp2 * rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
        let argpdot = -0.5 * temp1 * con42
            + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
            + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
        let xhdot1 = -temp1 * cosio;
        let nodedot =
            xhdot1 + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2)) * cosio;
        let rates = SecularRates {
            mean_anomaly: mdot,
            argument_of_perigee: argpdot,
            right_ascension: nodedot,
        };

        let epoch_elements = MeanElements {
            semi_major_axis: ao,
            eccentricity: ecco,
            inclination: inclo,
            right_ascension: nodeo,
            argument_of_perigee: argpo,
            mean_anomaly: mo,
            mean_motion: no,
        };

        let deep_space = if TWO_PI / no >= DEEP_SPACE_PERIOD_MINUTES {
            simplified = true;
            Some(DeepSpace::new(
                epoch.days_since_1950(),
                &epoch_elements,
                &rates,
                gsto,
                xke,
            ))
        } else {
            None
        };

        let mut state = PropagatorState {
            epoch_elements,
            bstar,
            rates,
            simplified,
            aycof: -0.5 * j3oj2 * sinio,
            con41,
            x1mth2,
            x7thm1: 7.0 * cosio2 - 1.0,
            xlcof: long_period_coefficient(j3oj2, sinio, cosio),
            cc1,
            cc4,
            cc5,
            d2: 0.0,
            d3: 0.0,
            d4: 0.0,
            delmo: (1.0 + eta * mo.cos()).powi(3),
            eta,
            omgcof: bstar * cc3 * argpo.cos(),
            sinmao: mo.sin(),
            xmcof: if ecco > 1.0e-4 {
                -TWO_THIRDS * coef * bstar / eeta
            } else {
                0.0
            },
            nodecf: 3.5 * omeosq * xhdot1 * cc1,
            t2cof: 1.5 * cc1,
            t3cof: 0.0,
            t4cof: 0.0,
            t5cof: 0.0,
            deep_space,
        };

        if !state.simplified {
            let cc1sq = cc1 * cc1;
            let d2 = 4.0 * ao * tsi * cc1sq;
            let temp = d2 * tsi * cc1 / 3.0;
            let d3 = (17.0 * ao + sfour) * temp;
            let d4 = 0.5 * temp * ao * tsi * (221.0 * ao + 31.0 * sfour) * cc1;
            state.d2 = d2;
            state.d3 = d3;
            state.d4 = d4;
            state.t3cof = d2 + 2.0 * cc1sq;
            state.t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * cc1sq));
            state.t5cof =
                0.2 * (3.0 * d4 + 12.0 * cc1 * d3 + 6.0 * d2 * d2 + 15.0 * cc1sq * (2.0 * d2 + cc1sq));
        }

        let propagator = Propagator {
            epoch,
            config,
            gravity,
            solver: KeplerSolver::from(&config),
            state,
        };
        debug!(
            "Initialised {} propagator for {}: period {:.3} min, perigee {:.1} km, simplified drag {}",
            if propagator.is_deep_space() { "deep-space" } else { "near-earth" },
            elements.catalog_number(),
            TWO_PI / no,
            perigee_km,
            propagator.state.simplified
        );
        Ok(propagator)
    }

    pub fn epoch(&self) -> JulianDate {
        self.epoch
    }

    pub fn config(&self) -> &PropagatorConfig {
        &self.config
    }

    pub fn is_deep_space(&self) -> bool {
        self.state.deep_space.is_some()
    }

    pub fn regime(&self) -> Regime {
        match &self.state.deep_space {
            Some(deep_space) => Regime::DeepSpace(deep_space.resonance()),
            None => Regime::NearEarth,
        }
    }

    /// Recovered mean elements at epoch.
    pub fn epoch_elements(&self) -> &MeanElements {
        &self.state.epoch_elements
    }

    /// Period (minutes) from the recovered mean motion.
    pub fn period_minutes(&self) -> f64 {
        TWO_PI / self.state.epoch_elements.mean_motion
    }

    /// Position and velocity at an absolute time.
    pub fn propagate_julian(&self, date: &JulianDate) -> Result<Eci, PropagationErrors> {
        self.propagate(date.minutes_since(&self.epoch))
    }

    /// Position (km) and velocity (km/s) in the TEME inertial frame at
    /// `minutes` past epoch. Negative offsets propagate backwards.
    pub fn propagate(&self, minutes: f64) -> Result<Eci, PropagationErrors> {
        if !minutes.is_finite() {
            return Err(PropagationErrors::NonFiniteTime(minutes));
        }
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(PropagationErrors::TimeOutOfRange {
                minutes,
                limit: MAX_OFFSET_MINUTES,
            });
        }
        let mut julian_date = self.epoch;
        julian_date
            .add_minutes(minutes)
            .map_err(|_| PropagationErrors::TimeOutOfRange {
                minutes,
                limit: MAX_OFFSET_MINUTES,
            })?;

        let s = &self.state;
        let GravityConstants {
            radius_km,
            xke,
            j2,
            j3oj2,
            ..
        } = self.gravity;
        let epoch = &s.epoch_elements;
        let t = minutes;
        trace!("Propagating to {} min past epoch", t);

        // Secular gravity and drag
        let xmdf = epoch.mean_anomaly + s.rates.mean_anomaly * t;
        let argpdf = epoch.argument_of_perigee + s.rates.argument_of_perigee * t;
        let nodedf = epoch.right_ascension + s.rates.right_ascension * t;
        let t2 = t * t;
        let mut mean = MeanElements {
            semi_major_axis: epoch.semi_major_axis,
            eccentricity: epoch.eccentricity,
            inclination: epoch.inclination,
            right_ascension: nodedf + s.nodecf * t2,
            argument_of_perigee: argpdf,
            mean_anomaly: xmdf,
            mean_motion: epoch.mean_motion,
        };
        let mut tempa = 1.0 - s.cc1 * t;
        let mut tempe = s.bstar * s.cc4 * t;
        let mut templ = s.t2cof * t2;

        if !s.simplified {
            let delomg = s.omgcof * t;
            let delm = s.xmcof * ((1.0 + s.eta * xmdf.cos()).powi(3) - s.delmo);
            let temp = delomg + delm;
            mean.mean_anomaly = xmdf + temp;
            mean.argument_of_perigee = argpdf - temp;
            let t3 = t2 * t;
            let t4 = t3 * t;
            tempa -= s.d2 * t2 + s.d3 * t3 + s.d4 * t4;
            tempe += s.bstar * s.cc5 * (mean.mean_anomaly.sin() - s.sinmao);
            templ += s.t3cof * t3 + t4 * (s.t4cof + t * s.t5cof);
        }

        if let Some(deep_space) = &s.deep_space {
            deep_space.apply_secular(t, &mut mean);
        }

        if mean.mean_motion <= 0.0 {
            return Err(PropagationErrors::MeanMotion {
                minutes,
                value: mean.mean_motion,
            });
        }

        let am = (xke / mean.mean_motion).powf(TWO_THIRDS) * tempa * tempa;
        mean.semi_major_axis = am;
        mean.mean_motion = xke / am.powf(1.5);
        mean.eccentricity -= tempe;

        if mean.eccentricity >= 1.0 || mean.eccentricity < -0.001 {
            return Err(PropagationErrors::MeanEccentricity {
                minutes,
                value: mean.eccentricity,
            });
        }
        mean.eccentricity = mean.eccentricity.max(1.0e-6);

        mean.mean_anomaly += epoch.mean_motion * templ;
        let xlm = (mean.mean_anomaly + mean.argument_of_perigee + mean.right_ascension) % TWO_PI;
        mean.right_ascension %= TWO_PI;
        mean.argument_of_perigee %= TWO_PI;
        mean.mean_anomaly = (xlm - mean.argument_of_perigee - mean.right_ascension) % TWO_PI;

        // Lunar-solar periodics
        let mut osc = mean;
        let mut aycof = s.aycof;
        let mut xlcof = s.xlcof;
        let mut con41 = s.con41;
        let mut x1mth2 = s.x1mth2;
        let mut x7thm1 = s.x7thm1;

        if let Some(deep_space) = &s.deep_space {
            deep_space.apply_periodics(t, &mut osc, self.config.mode);
            if osc.inclination < 0.0 {
                osc.inclination = -osc.inclination;
                osc.right_ascension += PI;
                osc.argument_of_perigee -= PI;
            }
            if !(0.0..=1.0).contains(&osc.eccentricity) {
                return Err(PropagationErrors::PerturbedEccentricity {
                    minutes,
                    value: osc.eccentricity,
                });
            }

            let (sinip, cosip) = osc.inclination.sin_cos();
            let cosisq = cosip * cosip;
            aycof = -0.5 * j3oj2 * sinip;
            xlcof = long_period_coefficient(j3oj2, sinip, cosip);
            con41 = 3.0 * cosisq - 1.0;
            x1mth2 = 1.0 - cosisq;
            x7thm1 = 7.0 * cosisq - 1.0;
        }

        // Long-period periodics
        let ep = osc.eccentricity;
        let argpp = osc.argument_of_perigee;
        let nodep = osc.right_ascension;
        let axnl = ep * argpp.cos();
        let temp = 1.0 / (am * (1.0 - ep * ep));
        let aynl = ep * argpp.sin() + temp * aycof;
        let xl = osc.mean_anomaly + argpp + nodep + temp * xlcof * axnl;

        let u = (xl - nodep) % TWO_PI;
        let kepler = self.solver.solve(u, axnl, aynl);
        if let Some(warning) = &kepler.warning {
            warn!("{} at {} min past epoch", warning, minutes);
        }

        // Short-period preliminary quantities
        let (sineo1, coseo1) = kepler.eccentric_longitude.sin_cos();
        let ecose = axnl * coseo1 + aynl * sineo1;
        let esine = axnl * sineo1 - aynl * coseo1;
        let el2 = axnl * axnl + aynl * aynl;
        let pl = am * (1.0 - el2);
        if pl < 0.0 {
            return Err(PropagationErrors::SemiLatusRectum { minutes, value: pl });
        }

        let rl = am * (1.0 - ecose);
        let rdotl = am.sqrt() * esine / rl;
        let rvdotl = pl.sqrt() / rl;
        let betal = (1.0 - el2).sqrt();
        let temp = esine / (1.0 + betal);
        let sinu = am / rl * (sineo1 - aynl - axnl * temp);
        let cosu = am / rl * (coseo1 - axnl + aynl * temp);
        let su = sinu.atan2(cosu);
        let sin2u = (cosu + cosu) * sinu;
        let cos2u = 1.0 - 2.0 * sinu * sinu;
        let temp = 1.0 / pl;
        let temp1 = 0.5 * j2 * temp;
        let temp2 = temp1 * temp;

        // Short-period periodics
        let (sinip, cosip) = osc.inclination.sin_cos();
        let mrt = rl * (1.0 - 1.5 * temp2 * betal * con41) + 0.5 * temp1 * x1mth2 * cos2u;
        let su = su - 0.25 * temp2 * x7thm1 * sin2u;
        let xnode = nodep + 1.5 * temp2 * cosip * sin2u;
        let xinc = osc.inclination + 1.5 * temp2 * cosip * sinip * cos2u;
        let mvt = rdotl - mean.mean_motion * temp1 * x1mth2 * sin2u / xke;
        let rvdot = rvdotl + mean.mean_motion * temp1 * (x1mth2 * cos2u + 1.5 * con41) / xke;

        if mrt < 1.0 {
            return Err(PropagationErrors::Decayed {
                minutes,
                radius_er: mrt,
            });
        }

        // Orientation vectors
        let (sinsu, cossu) = su.sin_cos();
        let (snod, cnod) = xnode.sin_cos();
        let (sini, cosi) = xinc.sin_cos();
        let xmx = -snod * cosi;
        let xmy = cnod * cosi;
        let u_vec = na::Vector3::new(xmx * sinsu + cnod * cossu, xmy * sinsu + snod * cossu, sini * sinsu);
        let v_vec = na::Vector3::new(xmx * cossu - cnod * sinsu, xmy * cossu - snod * sinsu, sini * cossu);

        let km_per_second = radius_km * xke / 60.0;
        let position = u_vec * (mrt * radius_km);
        let velocity = (u_vec * mvt + v_vec * rvdot) * km_per_second;

        Ok(Eci {
            position,
            velocity,
            julian_date,
            minutes_since_epoch: minutes,
            mean_elements: mean,
            convergence: kepler.warning,
        })
    }
}

fn long_period_coefficient(j3oj2: f64, sini: f64, cosi: f64) -> f64 {
    let denominator = if (cosi + 1.0).abs() > XLCOF_GUARD {
        1.0 + cosi
    } else {
        XLCOF_GUARD
    };
    -0.25 * j3oj2 * sini * (3.0 + 5.0 * cosi) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GravityModel;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    const VANGUARD_1: &str = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
    const VANGUARD_2: &str = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";

    fn vanguard() -> Propagator {
        let elements = OrbitalElements::parse(VANGUARD_1, VANGUARD_2, None).unwrap();
        Propagator::new(&elements, PropagatorConfig::default()).unwrap()
    }

    #[test]
    fn near_earth_regime() {
        let propagator = vanguard();
        assert!(!propagator.is_deep_space());
        assert_eq!(propagator.regime(), Regime::NearEarth);
        assert!(propagator.period_minutes() < DEEP_SPACE_PERIOD_MINUTES);
    }

    #[test_case(0.0, [7022.46529266, -1400.08296755, 0.03995155], [1.893841015, 6.405893759, 4.534807250]; "epoch")]
    #[test_case(360.0, [-7154.03120202, -3783.17682504, -3536.19412294], [4.741887409, -4.151817765, -2.093935425]; "six hours")]
    fn vanguard_reference_states(minutes: f64, r: [f64; 3], v: [f64; 3]) {
        let state = vanguard().propagate(minutes).unwrap();
        assert_abs_diff_eq!(state.position, na::Vector3::from(r), epsilon = 1e-6);
        assert_abs_diff_eq!(state.velocity, na::Vector3::from(v), epsilon = 1e-8);
        assert!(state.convergence.is_none());
    }

    #[test]
    fn result_is_tagged_with_time() {
        let propagator = vanguard();
        let state = propagator.propagate(90.0).unwrap();
        assert_eq!(state.minutes_since_epoch, 90.0);
        assert_abs_diff_eq!(
            state.julian_date.minutes_since(&propagator.epoch()),
            90.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn mean_elements_are_reported() {
        let state = vanguard().propagate(0.0).unwrap();
        let mean = state.mean_elements;
        assert_abs_diff_eq!(mean.eccentricity, 0.1859667, epsilon = 1e-6);
        assert_abs_diff_eq!(mean.inclination, 34.2682_f64.to_radians(), epsilon = 1e-12);
        assert!(mean.semi_major_axis > 1.0);
    }

    #[test]
    fn gravity_model_changes_result() {
        let elements = OrbitalElements::parse(VANGUARD_1, VANGUARD_2, None).unwrap();
        let wgs72 = Propagator::new(&elements, PropagatorConfig::default()).unwrap();
        let wgs84 = Propagator::new(
            &elements,
            PropagatorConfig::default().with_gravity(GravityModel::Wgs84),
        )
        .unwrap();
        let a = wgs72.propagate(1440.0).unwrap().position;
        let b = wgs84.propagate(1440.0).unwrap().position;
        let difference = (a - b).norm();
        assert!(difference > 1e-3 && difference < 10.0, "{}", difference);
    }

    #[test]
    fn tight_iteration_cap_flags_convergence() {
        let elements = OrbitalElements::parse(VANGUARD_1, VANGUARD_2, None).unwrap();
        let config = PropagatorConfig {
            kepler_max_iterations: 1,
            ..PropagatorConfig::default()
        };
        let state = Propagator::new(&elements, config).unwrap().propagate(100.0).unwrap();
        let warning = state.convergence.unwrap();
        assert_eq!(warning.iterations, 1);
    }

    #[test_case(f64::NAN; "not a number")]
    #[test_case(f64::INFINITY; "positive infinity")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    fn non_finite_offsets_are_rejected(minutes: f64) {
        assert!(matches!(
            vanguard().propagate(minutes),
            Err(PropagationErrors::NonFiniteTime(_))
        ));
    }

    #[test_case(1.0e12; "far future")]
    #[test_case(-2.0e10; "far past")]
    fn offsets_beyond_the_limit_are_rejected(minutes: f64) {
        match vanguard().propagate(minutes) {
            Err(PropagationErrors::TimeOutOfRange { minutes: m, limit }) => {
                assert_eq!(m, minutes);
                assert_eq!(limit, MAX_OFFSET_MINUTES);
            }
            other => panic!("expected an out of range offset, got {:?}", other),
        }
        assert!(vanguard().propagate(-MAX_OFFSET_MINUTES * 2.0).is_err());
    }

    #[test]
    fn long_period_coefficient_guards_retrograde_equatorial() {
        assert!(long_period_coefficient(-2.345e-3, 0.0, -1.0).is_finite());
    }
}
