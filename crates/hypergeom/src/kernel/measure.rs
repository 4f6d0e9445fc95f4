//! Distances, directions, and interpolation between two points.

use itertools::Itertools;

use crate::polar::polar_angle;
use crate::{Angles, Float, Point, Result, VectorRef, validate};

/// Returns the Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> Result<Float> {
    let ndim = validate::point("first point", a)?;
    validate::point_with_ndim("second point", b, ndim)?;

    Ok((b - a).mag())
}

/// Returns the direction from `a` to `b` as one angle per pair of adjacent
/// axes.
///
/// Each angle is in the range `(-PI/2, 3*PI/2]`. When the two points share a
/// coordinate on the first axis of a pair, the angle is `PI/2` or `-PI/2`
/// depending on the sign of the difference on the second axis; if they share
/// both coordinates the angle is `PI/2`.
pub fn direction(a: &Point, b: &Point) -> Result<Angles> {
    let ndim = validate::point("start point", a)?;
    validate::point_with_ndim("end point", b, ndim)?;

    if a == b {
        log::trace!("direction between coincident points {a} and {b}");
    }
    Ok(direction_unchecked(a, b))
}

/// Returns the direction between two points that are already known to be
/// valid and of the same dimensionality.
pub(crate) fn direction_unchecked(a: &Point, b: &Point) -> Angles {
    (b - a)
        .iter()
        .tuple_windows()
        .map(|(dx, dy)| polar_angle(dx, dy))
        .collect()
}

/// Returns the point at `t` along the line segment from `a` to `b`, where `t`
/// is in the range `[0, 1]`.
///
/// `t = 0` returns exactly `a` and `t = 1` returns exactly `b`.
pub fn midpoint(a: &Point, b: &Point, t: Float) -> Result<Point> {
    let ndim = validate::point("start point", a)?;
    validate::point_with_ndim("end point", b, ndim)?;
    validate::parameter("interpolation parameter", t)?;

    Ok(lerp(a, b, t))
}

/// Interpolates between two points that are already known to be valid.
pub(crate) fn lerp(a: &Point, b: &Point, t: Float) -> Point {
    a.coords()
        .zip(b.coords())
        .map(|(a, b)| a * (1.0 - t) + b * t)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::GeometryError;

    #[test]
    fn test_distance() {
        assert_eq!(distance(&point![0.0, 0.0], &point![3.0, 4.0]), Ok(5.0));
        assert_eq!(
            distance(&point![1.0, 1.0, 1.0], &point![2.0, 3.0, 3.0]),
            Ok(3.0),
        );
        assert_eq!(distance(&point![2.0, -7.0], &point![2.0, -7.0]), Ok(0.0));
    }

    #[test]
    fn test_distance_rejects_bad_shapes() {
        assert!(matches!(
            distance(&point![1.0], &point![2.0]),
            Err(GeometryError::TooFewDimensions { ndim: 1, .. }),
        ));
        assert!(matches!(
            distance(&point![1.0, 2.0], &point![1.0, 2.0, 3.0]),
            Err(GeometryError::DimensionMismatch { expected: 2, got: 3, .. }),
        ));
        assert!(matches!(
            distance(&point![Float::NAN, 2.0], &point![1.0, 2.0]),
            Err(GeometryError::NonFinite { .. }),
        ));
    }

    #[test]
    fn test_direction_quadrants() {
        let o = point![0.0, 0.0];
        assert_approx_eq!(direction(&o, &point![1.0, 1.0]).unwrap(), angles![FRAC_PI_4]);
        assert_approx_eq!(
            direction(&o, &point![-1.0, 1.0]).unwrap(),
            angles![3.0 * FRAC_PI_4],
        );
        assert_approx_eq!(
            direction(&o, &point![-1.0, -1.0]).unwrap(),
            angles![5.0 * FRAC_PI_4],
        );
        assert_approx_eq!(direction(&o, &point![1.0, -1.0]).unwrap(), angles![-FRAC_PI_4]);
        assert_approx_eq!(direction(&o, &point![-2.0, 0.0]).unwrap(), angles![PI]);
    }

    #[test]
    fn test_direction_axis_aligned() {
        let a = point![1.0, 1.0];
        assert_eq!(direction(&a, &point![1.0, 5.0]), Ok(angles![FRAC_PI_2]));
        assert_eq!(direction(&a, &point![1.0, -5.0]), Ok(angles![-FRAC_PI_2]));
        assert_eq!(direction(&a, &a), Ok(angles![FRAC_PI_2]));
    }

    #[test]
    fn test_direction_3d() {
        // Out of the screen over the viewer's right shoulder.
        let d = direction(&point![0.0, 0.0, 0.0], &point![1.0, 1.0, -1.0]).unwrap();
        assert_approx_eq!(d, angles![FRAC_PI_4, -FRAC_PI_4]);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_midpoint() {
        let a = point![0.0, 2.0];
        let b = point![4.0, -2.0];
        assert_eq!(midpoint(&a, &b, 0.5), Ok(point![2.0, 0.0]));
        assert_eq!(midpoint(&a, &b, 0.0), Ok(a.clone()));
        assert_eq!(midpoint(&a, &b, 1.0), Ok(b.clone()));
        assert_eq!(midpoint(&a, &b, 0.25), Ok(point![1.0, 1.0]));
        assert!(matches!(
            midpoint(&a, &b, 1.5),
            Err(GeometryError::ParameterOutOfRange { value: 1.5, .. }),
        ));
    }
}
