use crate::constants::*;
use crate::numerics::angles::wrap_two_pi;

/// Greenwich Mean Sidereal Time (radians, [0, 2π)) for a UT1 Julian date.
///
/// The polynomial is evaluated at 0h UT of the date (IAU 1982) and the
/// elapsed fraction of the day is added at the sidereal rate.
pub fn greenwich_mean_sidereal_angle(julian_date: f64) -> f64 {
    let ut = (julian_date + 0.5) % 1.0;
    let tu = (julian_date - J2000_JULIAN_DATE - ut) / DAYS_PER_JULIAN_CENTURY;

    let mut gmst = 24110.54841 + tu * (8640184.812866 + tu * (0.093104 - tu * 6.2e-6));
    gmst = (gmst + SECONDS_PER_DAY * EARTH_ROTATIONS_PER_SIDEREAL_DAY * ut) % SECONDS_PER_DAY;
    if gmst < 0.0 {
        gmst += SECONDS_PER_DAY;
    }

    wrap_two_pi(TWO_PI * (gmst / SECONDS_PER_DAY))
}

/// Local Mean Sidereal Time (radians, [0, 2π)) at an east longitude.
pub fn local_mean_sidereal_angle(julian_date: f64, longitude: f64) -> f64 {
    wrap_two_pi(greenwich_mean_sidereal_angle(julian_date) + longitude)
}

/// Sidereal angle at an element-set epoch using the 1970-referenced
/// series of the AFSPC implementation. `epoch` counts days from 1950-01-00.
pub fn afspc_sidereal_angle(epoch: f64) -> f64 {
    let ts70 = epoch - 7305.0;
    let ds70 = (ts70 + 1.0e-8).floor();
    let tfrac = ts70 - ds70;
    let c1 = 1.72027916940703639e-2;
    let thgr70 = 1.7321343856509374;
    let fk5r = 5.07551419432269442e-15;
    let c1p2p = c1 + TWO_PI;

    wrap_two_pi(thgr70 + c1 * ds70 + c1p2p * tfrac + ts70 * ts70 * fk5r)
}
