//! Rectangular-to-polar conversion for a single pair of axes.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::Float;

/// Returns the angle of the 2D vector `(x, y)` measured from the positive X
/// axis, in the range `(-PI/2, 3*PI/2]`.
///
/// When `x` is exactly zero the result is `PI/2` if `y >= 0` and `-PI/2`
/// otherwise, which matches `atan(y / x)` under IEEE-754 division. A zero
/// vector has angle `PI/2`.
pub(crate) fn polar_angle(x: Float, y: Float) -> Float {
    if x == 0.0 {
        match y < 0.0 {
            true => -FRAC_PI_2,
            false => FRAC_PI_2,
        }
    } else if x < 0.0 {
        (y / x).atan() + PI
    } else {
        (y / x).atan()
    }
}

/// Returns the length of the 2D vector `(x, y)`.
pub(crate) fn polar_length(x: Float, y: Float) -> Float {
    (x * x + y * y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_angle_quadrants() {
        assert_eq!(polar_angle(1.0, 0.0), 0.0);
        crate::assert_approx_eq!(polar_angle(1.0, 1.0), PI / 4.0);
        crate::assert_approx_eq!(polar_angle(-1.0, 1.0), 3.0 * PI / 4.0);
        crate::assert_approx_eq!(polar_angle(-1.0, -1.0), 5.0 * PI / 4.0);
        crate::assert_approx_eq!(polar_angle(1.0, -1.0), -PI / 4.0);
        assert_eq!(polar_angle(-1.0, 0.0), PI);
    }

    #[test]
    fn test_polar_angle_on_axis() {
        assert_eq!(polar_angle(0.0, 2.0), FRAC_PI_2);
        assert_eq!(polar_angle(0.0, -2.0), -FRAC_PI_2);
        assert_eq!(polar_angle(-0.0, 3.0), FRAC_PI_2);
        assert_eq!(polar_angle(0.0, 0.0), FRAC_PI_2);
        // Same as the IEEE-754 result of dividing by zero.
        assert_eq!(polar_angle(0.0, 2.0), (2.0 / 0.0_f64).atan());
        assert_eq!(polar_angle(0.0, -2.0), (-2.0 / 0.0_f64).atan());
    }

    #[test]
    fn test_polar_length() {
        assert_eq!(polar_length(3.0, -4.0), 5.0);
        assert_eq!(polar_length(0.0, 0.0), 0.0);
    }
}
