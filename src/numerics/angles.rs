use crate::constants::TWO_PI;

/// Wraps an angle into [0, 2π).
pub fn wrap_two_pi(angle: f64) -> f64 {
    let mut wrapped = angle % TWO_PI;
    if wrapped < 0.0 {
        wrapped += TWO_PI;
    }
    // A tiny negative remainder rounds up to exactly 2π
    if wrapped >= TWO_PI {
        wrapped -= TWO_PI;
    }
    wrapped
}
