//! Lunar-solar perturbations and geopotential resonance for orbits with
//! periods of 225 minutes or more.
//!
//! All rates are per minute and all angles in radians. The resonance
//! integration always restarts from epoch, so a query never depends on
//! the queries made before it.

use super::sgp4::MeanElements;
use crate::config::OperationMode;
use crate::constants::{PI, TWO_PI, TWO_THIRDS};

// Solar and lunar mean motions (rad/min) and orbital eccentricities
const ZNS: f64 = 1.19459e-5;
const ZES: f64 = 0.01675;
const ZNL: f64 = 1.5835218e-4;
const ZEL: f64 = 0.05490;
const C1SS: f64 = 2.9864797e-6;
const C1L: f64 = 4.7968065e-7;

// Solar orbit orientation
const ZSINIS: f64 = 0.39785416;
const ZCOSIS: f64 = 0.91744867;
const ZCOSGS: f64 = 0.1945905;
const ZSINGS: f64 = -0.98088458;

// Earth rotation rate (rad/min) used by the resonance terms
const RPTIM: f64 = 4.37526908801129966e-3;

const STEP: f64 = 720.0;
const STEP2: f64 = 0.5 * STEP * STEP;

/// Inclination below which (or this close to 180°) node rates are dropped.
const NEAR_EQUATORIAL: f64 = 5.2359877e-2;
/// Inclination below which the periodics use the Lyddane modification.
const LYDDANE_INCLINATION: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
struct OrbitGeometry {
    sinim: f64,
    cosim: f64,
    sinomm: f64,
    cosomm: f64,
    em: f64,
    emsq: f64,
    betasq: f64,
    rtemsq: f64,
}

/// Orientation of a perturbing body's orbit relative to the satellite's.
#[derive(Debug, Clone, Copy)]
struct BodyOrientation {
    zcosg: f64,
    zsing: f64,
    zcosi: f64,
    zsini: f64,
    zcosh: f64,
    zsinh: f64,
}

/// Intermediate products of one perturbing body's geometry.
#[derive(Debug, Clone, Copy)]
struct BodyTerms {
    s1: f64,
    s2: f64,
    s3: f64,
    s4: f64,
    s5: f64,
    s6: f64,
    s7: f64,
    z1: f64,
    z2: f64,
    z3: f64,
    z11: f64,
    z12: f64,
    z13: f64,
    z21: f64,
    z22: f64,
    z23: f64,
    z31: f64,
    z32: f64,
    z33: f64,
}

impl BodyTerms {
    fn new(body: &BodyOrientation, cc: f64, xnoi: f64, orbit: &OrbitGeometry) -> Self {
        let BodyOrientation {
            zcosg,
            zsing,
            zcosi,
            zsini,
            zcosh,
            zsinh,
        } = *body;
        let (sinim, cosim) = (orbit.sinim, orbit.cosim);
        let (sinomm, cosomm) = (orbit.sinomm, orbit.cosomm);
        let emsq = orbit.emsq;

        let a1 = zcosg * zcosh + zsing * zcosi * zsinh;
        let a3 = -zsing * zcosh + zcosg * zcosi * zsinh;
        let a7 = -zcosg * zsinh + zsing * zcosi * zcosh;
        let a8 = zsing * zsini;
        let a9 = zsing * zsinh + zcosg * zcosi * zcosh;
        let a10 = zcosg * zsini;
        let a2 = cosim * a7 + sinim * a8;
        let a4 = cosim * a9 + sinim * a10;
        let a5 = -sinim * a7 + cosim * a8;
        let a6 = -sinim * a9 + cosim * a10;

        let x1 = a1 * cosomm + a2 * sinomm;
        let x2 = a3 * cosomm + a4 * sinomm;
        let x3 = -a1 * sinomm + a2 * cosomm;
        let x4 = -a3 * sinomm + a4 * cosomm;
        let x5 = a5 * sinomm;
        let x6 = a6 * sinomm;
        let x7 = a5 * cosomm;
        let x8 = a6 * cosomm;

        let z31 = 12.0 * x1 * x1 - 3.0 * x3 * x3;
        let z32 = 24.0 * x1 * x2 - 6.0 * x3 * x4;
        let z33 = 12.0 * x2 * x2 - 3.0 * x4 * x4;
        let z1 = 3.0 * (a1 * a1 + a2 * a2) + z31 * emsq;
        let z2 = 6.0 * (a1 * a3 + a2 * a4) + z32 * emsq;
        let z3 = 3.0 * (a3 * a3 + a4 * a4) + z33 * emsq;
        let z11 = -6.0 * a1 * a5 + emsq * (-24.0 * x1 * x7 - 6.0 * x3 * x5);
        let z12 = -6.0 * (a1 * a6 + a3 * a5)
            + emsq * (-24.0 * (x2 * x7 + x1 * x8) - 6.0 * (x3 * x6 + x4 * x5));
        let z13 = -6.0 * a3 * a6 + emsq * (-24.0 * x2 * x8 - 6.0 * x4 * x6);
        let z21 = 6.0 * a2 * a5 + emsq * (24.0 * x1 * x5 - 6.0 * x3 * x7);
        let z22 = 6.0 * (a4 * a5 + a2 * a6)
            + emsq * (24.0 * (x2 * x5 + x1 * x6) - 6.0 * (x4 * x7 + x3 * x8));
        let z23 = 6.0 * a4 * a6 + emsq * (24.0 * x2 * x6 - 6.0 * x4 * x8);

        let s3 = cc * xnoi;
        let s2 = -0.5 * s3 / orbit.rtemsq;
        let s4 = s3 * orbit.rtemsq;

        BodyTerms {
            s1: -15.0 * orbit.em * s4,
            s2,
            s3,
            s4,
            s5: x1 * x3 + x2 * x4,
            s6: x2 * x3 + x1 * x4,
            s7: x2 * x4 - x1 * x3,
            z1: 2.0 * z1 + orbit.betasq * z31,
            z2: 2.0 * z2 + orbit.betasq * z32,
            z3: 2.0 * z3 + orbit.betasq * z33,
            z11,
            z12,
            z13,
            z21,
            z22,
            z23,
            z31,
            z32,
            z33,
        }
    }

    /// Secular rates (e, i, M, ω + Ω·cos i, Ω·sin i) induced by the body.
    fn secular_rates(&self, zn: f64, emsq: f64) -> [f64; 5] {
        [
            self.s1 * zn * self.s5,
            self.s2 * zn * (self.z11 + self.z13),
            -zn * self.s3 * (self.z1 + self.z3 - 14.0 - 6.0 * emsq),
            self.s4 * zn * (self.z31 + self.z33 - 6.0),
            -zn * self.s2 * (self.z21 + self.z23),
        ]
    }
}

/// Long-period periodic coefficients contributed by the Sun or the Moon.
#[derive(Debug, Clone, Copy)]
struct ThirdBody {
    mean_anomaly: f64,
    mean_motion: f64,
    eccentricity: f64,
    e2: f64,
    e3: f64,
    i2: f64,
    i3: f64,
    l2: f64,
    l3: f64,
    l4: f64,
    gh2: f64,
    gh3: f64,
    gh4: f64,
    h2: f64,
    h3: f64,
}

impl ThirdBody {
    fn new(
        terms: &BodyTerms,
        mean_anomaly: f64,
        mean_motion: f64,
        eccentricity: f64,
        emsq: f64,
    ) -> Self {
        let t = terms;
        ThirdBody {
            mean_anomaly,
            mean_motion,
            eccentricity,
            e2: 2.0 * t.s1 * t.s6,
            e3: 2.0 * t.s1 * t.s7,
            i2: 2.0 * t.s2 * t.z12,
            i3: 2.0 * t.s2 * (t.z13 - t.z11),
            l2: -2.0 * t.s3 * t.z2,
            l3: -2.0 * t.s3 * (t.z3 - t.z1),
            l4: -2.0 * t.s3 * (-21.0 - 9.0 * emsq) * eccentricity,
            gh2: 2.0 * t.s4 * t.z32,
            gh3: 2.0 * t.s4 * (t.z33 - t.z31),
            gh4: -18.0 * t.s4 * eccentricity,
            h2: -2.0 * t.s2 * t.z22,
            h3: -2.0 * t.s2 * (t.z23 - t.z21),
        }
    }

    /// Periodic offsets (e, i, L, ω, Ω) at `t` minutes past epoch.
    fn periodics(&self, t: f64) -> [f64; 5] {
        let zm = self.mean_anomaly + self.mean_motion * t;
        let zf = zm + 2.0 * self.eccentricity * zm.sin();
        let sinzf = zf.sin();
        let f2 = 0.5 * sinzf * sinzf - 0.25;
        let f3 = -0.5 * sinzf * zf.cos();
        [
            self.e2 * f2 + self.e3 * f3,
            self.i2 * f2 + self.i3 * f3,
            self.l2 * f2 + self.l3 * f3 + self.l4 * sinzf,
            self.gh2 * f2 + self.gh3 * f3 + self.gh4 * sinzf,
            self.h2 * f2 + self.h3 * f3,
        ]
    }
}

#[derive(Debug, Clone, Copy)]
enum ResonanceTerms {
    /// One revolution per sidereal day.
    Synchronous { del1: f64, del2: f64, del3: f64 },
    /// Two revolutions per sidereal day with e ≥ 0.5.
    HalfDay {
        d2201: f64,
        d2211: f64,
        d3210: f64,
        d3222: f64,
        d4410: f64,
        d4422: f64,
        d5220: f64,
        d5232: f64,
        d5421: f64,
        d5433: f64,
    },
}

#[derive(Debug, Clone, Copy)]
struct Resonance {
    terms: ResonanceTerms,
    xfact: f64,
    xlamo: f64,
}

/// Resonance classification of a deep-space orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResonanceKind {
    None,
    Synchronous,
    HalfDay,
}

/// Epoch rates from the near-earth initialisation that the deep-space
/// terms build on.
#[derive(Debug, Clone, Copy)]
pub struct SecularRates {
    pub mean_anomaly: f64,
    pub argument_of_perigee: f64,
    pub right_ascension: f64,
}

#[derive(Debug, Clone)]
pub struct DeepSpace {
    sun: ThirdBody,
    moon: ThirdBody,
    dedt: f64,
    didt: f64,
    dmdt: f64,
    domdt: f64,
    dnodt: f64,
    resonance: Option<Resonance>,
    gsto: f64,
    mean_motion: f64,
    argument_of_perigee: f64,
    argument_of_perigee_rate: f64,
}

impl DeepSpace {
    /// `epoch` counts days from 1950-01-00; `elements` are the recovered
    /// mean elements at epoch; `gsto` is the sidereal angle at epoch.
    pub fn new(
        epoch: f64,
        elements: &MeanElements,
        rates: &SecularRates,
        gsto: f64,
        xke: f64,
    ) -> Self {
        let em = elements.eccentricity;
        let inclm = elements.inclination;
        let nodeo = elements.right_ascension;
        let argpo = elements.argument_of_perigee;
        let mo = elements.mean_anomaly;
        let no = elements.mean_motion;

        let (snodm, cnodm) = nodeo.sin_cos();
        let emsq = em * em;
        let betasq = 1.0 - emsq;
        let orbit = OrbitGeometry {
            sinim: inclm.sin(),
            cosim: inclm.cos(),
            sinomm: argpo.sin(),
            cosomm: argpo.cos(),
            em,
            emsq,
            betasq,
            rtemsq: betasq.sqrt(),
        };

        // Lunar orbit orientation at epoch
        let day = epoch + 18261.5;
        let xnodce = (4.5236020 - 9.2422029e-4 * day) % TWO_PI;
        let (stem, ctem) = xnodce.sin_cos();
        let zcosil = 0.91375164 - 0.03568096 * ctem;
        let zsinil = (1.0 - zcosil * zcosil).sqrt();
        let zsinhl = 0.089683511 * stem / zsinil;
        let zcoshl = (1.0 - zsinhl * zsinhl).sqrt();
        let gam = 5.8351514 + 0.0019443680 * day;
        let zx = (0.39785416 * stem / zsinil).atan2(zcoshl * ctem + 0.91744867 * zsinhl * stem);
        let zx = gam + zx - xnodce;

        let xnoi = 1.0 / no;
        let solar = BodyTerms::new(
            &BodyOrientation {
                zcosg: ZCOSGS,
                zsing: ZSINGS,
                zcosi: ZCOSIS,
                zsini: ZSINIS,
                zcosh: cnodm,
                zsinh: snodm,
            },
            C1SS,
            xnoi,
            &orbit,
        );
        let lunar = BodyTerms::new(
            &BodyOrientation {
                zcosg: zx.cos(),
                zsing: zx.sin(),
                zcosi: zcosil,
                zsini: zsinil,
                zcosh: zcoshl * cnodm + zsinhl * snodm,
                zsinh: snodm * zcoshl - cnodm * zsinhl,
            },
            C1L,
            xnoi,
            &orbit,
        );

        let zmos = (6.2565837 + 0.017201977 * day) % TWO_PI;
        let zmol = (4.7199672 + 0.22997150 * day - gam) % TWO_PI;
        let sun = ThirdBody::new(&solar, zmos, ZNS, ZES, emsq);
        let moon = ThirdBody::new(&lunar, zmol, ZNL, ZEL, emsq);

        let near_equatorial = inclm < NEAR_EQUATORIAL || inclm > PI - NEAR_EQUATORIAL;
        let (mut dedt, mut didt, mut dmdt, mut domdt, mut dnodt) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for (terms, zn) in [(&solar, ZNS), (&lunar, ZNL)] {
            let [de, di, dm, dgh, dh] = terms.secular_rates(zn, emsq);
            let node_rate = if near_equatorial { 0.0 } else { dh / orbit.sinim };
            dedt += de;
            didt += di;
            dmdt += dm;
            domdt += dgh - orbit.cosim * node_rate;
            dnodt += node_rate;
        }

        let theta = gsto % TWO_PI;
        let aonv = (no / xke).powf(TWO_THIRDS);
        let resonance = if no > 0.0034906585 && no < 0.0052359877 {
            Some(synchronous_resonance(
                &orbit, aonv, no, mo, nodeo, argpo, theta, rates, dmdt, domdt, dnodt,
            ))
        } else if (8.26e-3..=9.24e-3).contains(&no) && em >= 0.5 {
            Some(half_day_resonance(
                &orbit, aonv, no, mo, nodeo, theta, rates, dmdt, dnodt,
            ))
        } else {
            None
        };

        DeepSpace {
            sun,
            moon,
            dedt,
            didt,
            dmdt,
            domdt,
            dnodt,
            resonance,
            gsto,
            mean_motion: no,
            argument_of_perigee: argpo,
            argument_of_perigee_rate: rates.argument_of_perigee,
        }
    }

    pub fn resonance(&self) -> ResonanceKind {
        match self.resonance.map(|r| r.terms) {
            None => ResonanceKind::None,
            Some(ResonanceTerms::Synchronous { .. }) => ResonanceKind::Synchronous,
            Some(ResonanceTerms::HalfDay { .. }) => ResonanceKind::HalfDay,
        }
    }

    /// Applies lunar-solar secular drift and, for resonant orbits, integrates
    /// mean longitude and mean motion from epoch to `t` in 720-minute steps.
    pub fn apply_secular(&self, t: f64, mean: &mut MeanElements) {
        mean.eccentricity += self.dedt * t;
        mean.inclination += self.didt * t;
        mean.argument_of_perigee += self.domdt * t;
        mean.right_ascension += self.dnodt * t;
        mean.mean_anomaly += self.dmdt * t;

        let Some(resonance) = self.resonance else {
            return;
        };

        let theta = (self.gsto + t * RPTIM) % TWO_PI;
        let delt = if t > 0.0 { STEP } else { -STEP };
        let mut atime = 0.0;
        let mut xli = resonance.xlamo;
        let mut xni = self.mean_motion;

        let (ft, xndt, xldot, xnddt) = loop {
            let (xndt, xnddt) = self.resonance_derivatives(&resonance.terms, xli, atime);
            let xldot = xni + resonance.xfact;
            let xnddt = xnddt * xldot;

            if (t - atime).abs() < STEP {
                break (t - atime, xndt, xldot, xnddt);
            }
            xli += xldot * delt + xndt * STEP2;
            xni += xndt * delt + xnddt * STEP2;
            atime += delt;
        };

        mean.mean_motion = xni + xndt * ft + xnddt * ft * ft * 0.5;
        let xl = xli + xldot * ft + xndt * ft * ft * 0.5;
        mean.mean_anomaly = match resonance.terms {
            ResonanceTerms::Synchronous { .. } => {
                xl - mean.right_ascension - mean.argument_of_perigee + theta
            }
            ResonanceTerms::HalfDay { .. } => xl - 2.0 * mean.right_ascension + 2.0 * theta,
        };
    }

    /// Returns (dn/dt, d²n/dt² / dλ/dt) of the resonance at longitude `xli`.
    fn resonance_derivatives(&self, terms: &ResonanceTerms, xli: f64, atime: f64) -> (f64, f64) {
        const FASX2: f64 = 0.13130908;
        const FASX4: f64 = 2.8843198;
        const FASX6: f64 = 0.37448087;
        const G22: f64 = 5.7686396;
        const G32: f64 = 0.95240898;
        const G44: f64 = 1.8014998;
        const G52: f64 = 1.0508330;
        const G54: f64 = 4.4108898;

        match *terms {
            ResonanceTerms::Synchronous { del1, del2, del3 } => (
                del1 * (xli - FASX2).sin()
                    + del2 * (2.0 * (xli - FASX4)).sin()
                    + del3 * (3.0 * (xli - FASX6)).sin(),
                del1 * (xli - FASX2).cos()
                    + 2.0 * del2 * (2.0 * (xli - FASX4)).cos()
                    + 3.0 * del3 * (3.0 * (xli - FASX6)).cos(),
            ),
            ResonanceTerms::HalfDay {
                d2201,
                d2211,
                d3210,
                d3222,
                d4410,
                d4422,
                d5220,
                d5232,
                d5421,
                d5433,
            } => {
                let xomi = self.argument_of_perigee + self.argument_of_perigee_rate * atime;
                let x2omi = xomi + xomi;
                let x2li = xli + xli;
                let xndt = d2201 * (x2omi + xli - G22).sin()
                    + d2211 * (xli - G22).sin()
                    + d3210 * (xomi + xli - G32).sin()
                    + d3222 * (-xomi + xli - G32).sin()
                    + d4410 * (x2omi + x2li - G44).sin()
                    + d4422 * (x2li - G44).sin()
                    + d5220 * (xomi + xli - G52).sin()
                    + d5232 * (-xomi + xli - G52).sin()
                    + d5421 * (xomi + x2li - G54).sin()
                    + d5433 * (-xomi + x2li - G54).sin();
                let xnddt = d2201 * (x2omi + xli - G22).cos()
                    + d2211 * (xli - G22).cos()
                    + d3210 * (xomi + xli - G32).cos()
                    + d3222 * (-xomi + xli - G32).cos()
                    + d5220 * (xomi + xli - G52).cos()
                    + d5232 * (-xomi + xli - G52).cos()
                    + 2.0
                        * (d4410 * (x2omi + x2li - G44).cos()
                            + d4422 * (x2li - G44).cos()
                            + d5421 * (xomi + x2li - G54).cos()
                            + d5433 * (-xomi + x2li - G54).cos());
                (xndt, xnddt)
            }
        }
    }

    /// Adds the lunar-solar long-period periodics at `t` to the osculating
    /// set. Below 0.2 rad inclination the node and perigee are perturbed
    /// through the Lyddane (sin i·sin Ω, sin i·cos Ω) pair instead.
    pub fn apply_periodics(&self, t: f64, elements: &mut MeanElements, mode: OperationMode) {
        let sun = self.sun.periodics(t);
        let moon = self.moon.periodics(t);
        let [pe, pinc, pl, pgh, ph] = [0, 1, 2, 3, 4].map(|k| sun[k] + moon[k]);

        elements.inclination += pinc;
        elements.eccentricity += pe;
        let (sinip, cosip) = elements.inclination.sin_cos();

        if elements.inclination >= LYDDANE_INCLINATION {
            let ph = ph / sinip;
            elements.argument_of_perigee += pgh - cosip * ph;
            elements.right_ascension += ph;
            elements.mean_anomaly += pl;
            return;
        }

        let (sinop, cosop) = elements.right_ascension.sin_cos();
        let alfdp = sinip * sinop + ph * cosop + pinc * cosip * sinop;
        let betdp = sinip * cosop - ph * sinop + pinc * cosip * cosop;

        let afspc = mode == OperationMode::Afspc;
        let mut nodep = elements.right_ascension % TWO_PI;
        if afspc && nodep < 0.0 {
            nodep += TWO_PI;
        }
        let xls = elements.mean_anomaly
            + elements.argument_of_perigee
            + pl
            + pgh
            + (cosip - pinc * sinip) * nodep;
        let xnoh = nodep;
        nodep = alfdp.atan2(betdp);
        if afspc && nodep < 0.0 {
            nodep += TWO_PI;
        }
        if (xnoh - nodep).abs() > PI {
            if nodep < xnoh {
                nodep += TWO_PI;
            } else {
                nodep -= TWO_PI;
            }
        }

        elements.mean_anomaly += pl;
        elements.right_ascension = nodep;
        elements.argument_of_perigee = xls - elements.mean_anomaly - cosip * nodep;
    }
}

#[allow(clippy::too_many_arguments)]
fn synchronous_resonance(
    orbit: &OrbitGeometry,
    aonv: f64,
    no: f64,
    mo: f64,
    nodeo: f64,
    argpo: f64,
    theta: f64,
    rates: &SecularRates,
    dmdt: f64,
    domdt: f64,
    dnodt: f64,
) -> Resonance {
    const Q22: f64 = 1.7891679e-6;
    const Q31: f64 = 2.1460748e-6;
    const Q33: f64 = 2.2123015e-7;

    let (sinim, cosim, emsq) = (orbit.sinim, orbit.cosim, orbit.emsq);
    let g200 = 1.0 + emsq * (-2.5 + 0.8125 * emsq);
    let g310 = 1.0 + 2.0 * emsq;
    let g300 = 1.0 + emsq * (-6.0 + 6.60937 * emsq);
    let f220 = 0.75 * (1.0 + cosim) * (1.0 + cosim);
    let f311 = 0.9375 * sinim * sinim * (1.0 + 3.0 * cosim) - 0.75 * (1.0 + cosim);
    let f330 = 1.875 * (1.0 + cosim).powi(3);

    let del1 = 3.0 * no * no * aonv * aonv;
    let xpidot = rates.argument_of_perigee + rates.right_ascension;

    Resonance {
        terms: ResonanceTerms::Synchronous {
            del1: del1 * f311 * g310 * Q31 * aonv,
            del2: 2.0 * del1 * f220 * g200 * Q22,
            del3: 3.0 * del1 * f330 * g300 * Q33 * aonv,
        },
        xfact: rates.mean_anomaly + xpidot - RPTIM + dmdt + domdt + dnodt - no,
        xlamo: (mo + nodeo + argpo - theta) % TWO_PI,
    }
}

#[allow(clippy::too_many_arguments)]
fn half_day_resonance(
    orbit: &OrbitGeometry,
    aonv: f64,
    no: f64,
    mo: f64,
    nodeo: f64,
    theta: f64,
    rates: &SecularRates,
    dmdt: f64,
    dnodt: f64,
) -> Resonance {
    const ROOT22: f64 = 1.7891679e-6;
    const ROOT32: f64 = 3.7393792e-7;
    const ROOT44: f64 = 7.3636953e-9;
    const ROOT52: f64 = 1.1428639e-7;
    const ROOT54: f64 = 2.1765803e-9;

    let (sinim, cosim) = (orbit.sinim, orbit.cosim);
    let em = orbit.em;
    let emsq = orbit.emsq;
    let eoc = em * emsq;
    let cosisq = cosim * cosim;

    let g201 = -0.306 - (em - 0.64) * 0.440;
    let (g211, g310, g322, g410, g422, g520) = if em <= 0.65 {
        (
            3.616 - 13.2470 * em + 16.2900 * emsq,
            -19.302 + 117.3900 * em - 228.4190 * emsq + 156.5910 * eoc,
            -18.9068 + 109.7927 * em - 214.6334 * emsq + 146.5816 * eoc,
            -41.122 + 242.6940 * em - 471.0940 * emsq + 313.9530 * eoc,
            -146.407 + 841.8800 * em - 1629.014 * emsq + 1083.4350 * eoc,
            -532.114 + 3017.977 * em - 5740.032 * emsq + 3708.2760 * eoc,
        )
    } else {
        (
            -72.099 + 331.819 * em - 508.738 * emsq + 266.724 * eoc,
            -346.844 + 1582.851 * em - 2415.925 * emsq + 1246.113 * eoc,
            -342.585 + 1554.908 * em - 2366.899 * emsq + 1215.972 * eoc,
            -1052.797 + 4758.686 * em - 7193.992 * emsq + 3651.957 * eoc,
            -3581.690 + 16178.110 * em - 24462.770 * emsq + 12422.520 * eoc,
            if em > 0.715 {
                -5149.66 + 29936.92 * em - 54087.36 * emsq + 31324.56 * eoc
            } else {
                1464.74 - 4664.75 * em + 3763.64 * emsq
            },
        )
    };
    let (g533, g521, g532) = if em < 0.7 {
        (
            -919.22770 + 4988.61 * em - 9064.77 * emsq + 5542.21 * eoc,
            -822.71072 + 4568.6173 * em - 8491.4146 * emsq + 5337.524 * eoc,
            -853.66600 + 4690.25 * em - 8624.77 * emsq + 5341.4 * eoc,
        )
    } else {
        (
            -37995.78 + 161616.52 * em - 229838.2 * emsq + 109377.94 * eoc,
            -51752.104 + 218913.95 * em - 309468.16 * emsq + 146349.42 * eoc,
            -40023.88 + 170470.89 * em - 242699.48 * emsq + 115605.82 * eoc,
        )
    };

    let sini2 = sinim * sinim;
    let f220 = 0.75 * (1.0 + 2.0 * cosim + cosisq);
    let f221 = 1.5 * sini2;
    let f321 = 1.875 * sinim * (1.0 - 2.0 * cosim - 3.0 * cosisq);
    let f322 = -1.875 * sinim * (1.0 + 2.0 * cosim - 3.0 * cosisq);
    let f441 = 35.0 * sini2 * f220;
    let f442 = 39.375 * sini2 * sini2;
    let f522 = 9.84375
        * sinim
        * (sini2 * (1.0 - 2.0 * cosim - 5.0 * cosisq)
            + 1.0 / 3.0 * (-2.0 + 4.0 * cosim + 6.0 * cosisq));
    let f523 = sinim
        * (4.92187512 * sini2 * (-2.0 - 4.0 * cosim + 10.0 * cosisq)
            + 6.56250012 * (1.0 + 2.0 * cosim - 3.0 * cosisq));
    let f542 = 29.53125 * sinim * (2.0 - 8.0 * cosim + cosisq * (-12.0 + 8.0 * cosim + 10.0 * cosisq));
    let f543 = 29.53125 * sinim * (-2.0 - 8.0 * cosim + cosisq * (12.0 + 8.0 * cosim - 10.0 * cosisq));

    let mut temp1 = 3.0 * no * no * aonv * aonv;
    let temp22 = temp1 * ROOT22;
    temp1 *= aonv;
    let temp32 = temp1 * ROOT32;
    temp1 *= aonv;
    let temp44 = 2.0 * temp1 * ROOT44;
    temp1 *= aonv;
    let temp52 = temp1 * ROOT52;
    let temp54 = 2.0 * temp1 * ROOT54;

    Resonance {
        terms: ResonanceTerms::HalfDay {
            d2201: temp22 * f220 * g201,
            d2211: temp22 * f221 * g211,
            d3210: temp32 * f321 * g310,
            d3222: temp32 * f322 * g322,
            d4410: temp44 * f441 * g410,
            d4422: temp44 * f442 * g422,
            d5220: temp52 * f522 * g520,
            d5232: temp52 * f523 * g532,
            d5421: temp54 * f542 * g521,
            d5433: temp54 * f543 * g533,
        },
        xfact: rates.mean_anomaly + dmdt + 2.0 * (rates.right_ascension + dnodt - RPTIM) - no,
        xlamo: (mo + nodeo + nodeo - theta - theta) % TWO_PI,
    }
}
