//! Circular arcs in N dimensions.
//!
//! An arc is described by a center, a radius, and a start and end angle list
//! (one angle per pair of adjacent axes). [`solve_arc()`] fills in the rest:
//! endpoints, signed sweep, whether the arc goes the long way round, and its
//! length.

use std::f64::consts::{PI, TAU};
use std::ops::Neg;

use crate::kernel::rotate_unchecked;
use crate::{Angles, Float, Point, Result, Vector, validate};

/// Direction of travel around a circle, following the right-hand rule.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Positive rotation.
    #[default]
    CounterClockwise,
    /// Negative rotation.
    Clockwise,
}

impl From<bool> for Winding {
    /// Converts `true` to counter-clockwise and `false` to clockwise.
    fn from(counter_clockwise: bool) -> Self {
        match counter_clockwise {
            true => Winding::CounterClockwise,
            false => Winding::Clockwise,
        }
    }
}

impl Neg for Winding {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

impl Winding {
    /// Returns whether the winding is counter-clockwise.
    pub fn is_counter_clockwise(self) -> bool {
        self == Winding::CounterClockwise
    }
}

/// Circular arc with all of its attributes solved.
///
/// With the `serde` feature, every attribute is serialized but only the
/// center, radius, angles, and winding are read back. Deserializing solves the
/// arc again with [`solve_arc()`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ArcParams")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArc {
    center: Point,
    radius: Float,
    start_angle: Angles,
    end_angle: Angles,
    winding: Winding,
    start_pt: Point,
    end_pt: Point,
    diff_angle: Angles,
    big: Vec<bool>,
    length: Float,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ArcParams {
    center: Point,
    radius: Float,
    start_angle: Angles,
    end_angle: Angles,
    #[serde(default)]
    winding: Winding,
}

#[cfg(feature = "serde")]
impl TryFrom<ArcParams> for CircularArc {
    type Error = crate::GeometryError;

    fn try_from(params: ArcParams) -> Result<Self> {
        solve_arc(
            &params.center,
            params.radius,
            &params.start_angle,
            &params.end_angle,
            params.winding,
        )
    }
}

impl CircularArc {
    /// Returns the center of the circle.
    pub fn center(&self) -> &Point {
        &self.center
    }
    /// Returns the radius, which may be negative.
    pub fn radius(&self) -> Float {
        self.radius
    }
    /// Returns the angle of the start point around the center.
    pub fn start_angle(&self) -> &Angles {
        &self.start_angle
    }
    /// Returns the angle of the end point around the center.
    pub fn end_angle(&self) -> &Angles {
        &self.end_angle
    }
    /// Returns the direction of travel from the start to the end.
    pub fn winding(&self) -> Winding {
        self.winding
    }
    /// Returns the start point.
    pub fn start_pt(&self) -> &Point {
        &self.start_pt
    }
    /// Returns the end point.
    pub fn end_pt(&self) -> &Point {
        &self.end_pt
    }
    /// Returns the signed angle swept from start to end in the direction of
    /// travel, in the range `[-2*PI, 2*PI]`.
    pub fn diff_angle(&self) -> &Angles {
        &self.diff_angle
    }
    /// Returns, for each pair of axes, whether the arc goes the long way
    /// round.
    pub fn big(&self) -> &[bool] {
        &self.big
    }
    /// Returns the length of the arc.
    pub fn length(&self) -> Float {
        self.length
    }
}

/// Solves for every attribute of an arc given its center, radius, start and
/// end angles, and direction of travel.
///
/// `center` must have one more dimension than there are angles in
/// `start_angle` and `end_angle`. The start point is `center` offset by
/// `radius` along the first axis and then rotated around `center` by
/// `start_angle`, and likewise for the end point.
pub fn solve_arc(
    center: &Point,
    radius: Float,
    start_angle: &Angles,
    end_angle: &Angles,
    winding: impl Into<Winding>,
) -> Result<CircularArc> {
    let winding = winding.into();
    let ndim = validate::point("arc center", center)?;
    validate::scalar("arc radius", radius)?;
    validate::angles("start angle", start_angle, ndim)?;
    validate::angles("end angle", end_angle, ndim)?;

    let radius_pt = center + Vector::along_first_axis(ndim, radius);
    let diff_angle = diff_unchecked(start_angle, end_angle, winding);

    let arc = CircularArc {
        center: center.clone(),
        radius,
        start_angle: start_angle.clone(),
        end_angle: end_angle.clone(),
        winding,
        start_pt: rotate_unchecked(&radius_pt, start_angle, center),
        end_pt: rotate_unchecked(&radius_pt, end_angle, center),
        big: big_unchecked(start_angle, end_angle, winding),
        length: length_unchecked(&diff_angle, radius),
        diff_angle,
    };
    log::trace!("solved {arc:?}");
    Ok(arc)
}

/// Returns the signed angle swept from `start` to `end` when traveling in the
/// direction `winding`, for each pair of axes.
///
/// Counter-clockwise deltas are in `[0, 2*PI)` and clockwise deltas are in
/// `(-2*PI, 0]`. Equal start and end angles give zero, not a full turn.
pub fn angle_diff(start: &Angles, end: &Angles, winding: impl Into<Winding>) -> Result<Angles> {
    validate::angle_pair(start, end)?;
    Ok(diff_unchecked(start, end, winding.into()))
}

fn diff_unchecked(start: &Angles, end: &Angles, winding: Winding) -> Angles {
    std::iter::zip(start.iter(), end.iter())
        .map(|(s, e)| match winding {
            Winding::CounterClockwise => (e - s).rem_euclid(TAU),
            Winding::Clockwise => -(s - e).rem_euclid(TAU),
        })
        .collect()
}

/// Returns, for each pair of axes, whether traveling from `start` to `end` in
/// the direction `winding` goes more than halfway around the circle.
///
/// An arc of exactly half a turn counter-clockwise is not big.
pub fn arc_is_big(start: &Angles, end: &Angles, winding: impl Into<Winding>) -> Result<Vec<bool>> {
    validate::angle_pair(start, end)?;
    Ok(big_unchecked(start, end, winding.into()))
}

fn big_unchecked(start: &Angles, end: &Angles, winding: Winding) -> Vec<bool> {
    std::iter::zip(start.iter(), end.iter())
        .map(|(s, e)| {
            let d = e - s;
            let big_ccw = (d < 0.0) != (d.abs() > PI);
            big_ccw == winding.is_counter_clockwise()
        })
        .collect()
}

/// Returns the length of an arc from `start` to `end` in the direction
/// `winding`.
///
/// The sweep on each pair of axes is treated as an independent orthogonal
/// component, so the result is the Euclidean norm of the per-pair arc
/// lengths. A negative radius gives the same length as a positive one.
///
/// The sweep is measured in the direction `winding` rather than always
/// counter-clockwise, so going clockwise from `0` to `PI/2` is three quarters
/// of a turn long.
pub fn arc_length(
    start: &Angles,
    end: &Angles,
    radius: Float,
    winding: impl Into<Winding>,
) -> Result<Float> {
    validate::angle_pair(start, end)?;
    validate::scalar("arc radius", radius)?;
    let diff = diff_unchecked(start, end, winding.into());
    Ok(length_unchecked(&diff, radius))
}

fn length_unchecked(diff: &Angles, radius: Float) -> Float {
    let circumference = TAU * radius;
    diff.iter()
        .map(|d| circumference * d.abs() / TAU)
        .map(|len| len * len)
        .sum::<Float>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GeometryError;

    #[test]
    fn test_quarter_arc() {
        let arc = solve_arc(
            &point![0.0, 0.0],
            1.0,
            &angles![0.0],
            &angles![FRAC_PI_2],
            true,
        )
        .unwrap();
        assert_approx_eq!(arc.start_pt(), &point![1.0, 0.0]);
        assert_approx_eq!(arc.end_pt(), &point![0.0, 1.0]);
        assert_approx_eq!(arc.diff_angle(), &angles![FRAC_PI_2]);
        assert_eq!(arc.big(), &[false]);
        assert_approx_eq!(arc.length(), FRAC_PI_2);
        assert_eq!(arc.winding(), Winding::CounterClockwise);
        assert_eq!(arc.center(), &point![0.0, 0.0]);
        assert_eq!(arc.radius(), 1.0);
    }

    #[test]
    fn test_half_arc_is_not_big() {
        let arc = solve_arc(&point![0.0, 0.0], 1.0, &angles![0.0], &angles![PI], true).unwrap();
        assert_approx_eq!(arc.length(), PI);
        assert_eq!(arc.big(), &[false]);
        assert_approx_eq!(arc.end_pt(), &point![-1.0, 0.0]);

        // The same half turn traveled clockwise is big.
        let arc = solve_arc(&point![0.0, 0.0], 1.0, &angles![0.0], &angles![PI], false).unwrap();
        assert_eq!(arc.big(), &[true]);
        assert_approx_eq!(arc.length(), PI);
    }

    #[test]
    fn test_clockwise_arc() {
        let arc = solve_arc(
            &point![1.0, 2.0],
            2.0,
            &angles![0.0],
            &angles![FRAC_PI_2],
            Winding::Clockwise,
        )
        .unwrap();
        assert_approx_eq!(arc.start_pt(), &point![3.0, 2.0]);
        assert_approx_eq!(arc.end_pt(), &point![1.0, 4.0]);
        assert_approx_eq!(arc.diff_angle(), &angles![-3.0 * FRAC_PI_2]);
        assert_eq!(arc.big(), &[true]);
        assert_approx_eq!(arc.length(), 3.0 * PI);
    }

    #[test]
    fn test_negative_radius() {
        let arc = solve_arc(&point![0.0, 0.0], -1.0, &angles![0.0], &angles![FRAC_PI_2], true)
            .unwrap();
        assert_approx_eq!(arc.start_pt(), &point![-1.0, 0.0]);
        assert_approx_eq!(arc.end_pt(), &point![0.0, -1.0]);
        assert_approx_eq!(arc.length(), FRAC_PI_2);
    }

    #[test]
    fn test_angle_diff_wraparound() {
        let s = angles![3.0 * FRAC_PI_2];
        let e = angles![FRAC_PI_2];
        assert_approx_eq!(angle_diff(&s, &e, true).unwrap(), angles![PI]);
        assert_approx_eq!(angle_diff(&s, &e, false).unwrap(), angles![-PI]);
        assert_approx_eq!(
            angle_diff(&angles![0.5], &angles![0.25], true).unwrap(),
            angles![TAU - 0.25],
        );
        assert_approx_eq!(
            angle_diff(&angles![0.25], &angles![0.5], false).unwrap(),
            angles![0.25 - TAU],
        );
        assert_eq!(angle_diff(&angles![1.0], &angles![1.0], true), Ok(angles![0.0]));
    }

    #[test]
    fn test_arc_is_big() {
        let z = angles![0.0];
        assert_eq!(arc_is_big(&z, &angles![3.0 * FRAC_PI_2], true), Ok(vec![true]));
        assert_eq!(arc_is_big(&z, &angles![3.0 * FRAC_PI_2], false), Ok(vec![false]));
        assert_eq!(arc_is_big(&angles![FRAC_PI_2], &z, true), Ok(vec![true]));
        assert_eq!(arc_is_big(&angles![FRAC_PI_2], &z, false), Ok(vec![false]));
        assert_eq!(
            arc_is_big(&angles![0.0, 0.0], &angles![0.5, -0.5], true),
            Ok(vec![false, true]),
        );
    }

    #[test]
    fn test_arc_length_multiple_axis_pairs() {
        // Quarter turns on two pairs combine like orthogonal components.
        let len = arc_length(
            &angles![0.0, 0.0],
            &angles![FRAC_PI_2, FRAC_PI_2],
            2.0,
            true,
        )
        .unwrap();
        assert_approx_eq!(len, PI * 2.0_f64.sqrt());
    }

    #[test]
    fn test_arc_3d() {
        let arc = solve_arc(
            &point![0.0, 0.0, 0.0],
            1.0,
            &angles![0.0, 0.0],
            &angles![FRAC_PI_2, 0.0],
            true,
        )
        .unwrap();
        assert_approx_eq!(arc.start_pt(), &point![1.0, 0.0, 0.0]);
        assert_approx_eq!(arc.end_pt(), &point![0.0, 1.0, 0.0]);
        assert_eq!(arc.big(), &[false, false]);
    }

    #[test]
    fn test_arc_rejects_bad_input() {
        assert!(matches!(
            solve_arc(&point![0.0, 0.0, 0.0], 1.0, &angles![0.0], &angles![0.0], true),
            Err(GeometryError::AngleCountMismatch { expected: 2, got: 1, .. }),
        ));
        assert!(matches!(
            solve_arc(&point![0.0, 0.0], 1.0, &angles![0.0], &angles![7.0], true),
            Err(GeometryError::AngleOutOfRange { .. }),
        ));
        assert!(matches!(
            solve_arc(&point![0.0], 1.0, &angles![], &angles![], true),
            Err(GeometryError::TooFewDimensions { .. }),
        ));
        assert!(solve_arc(&point![0.0, 0.0], Float::NAN, &angles![0.0], &angles![0.0], true).is_err());
        assert!(angle_diff(&angles![], &angles![], true).is_err());
        assert!(arc_is_big(&angles![0.0], &angles![0.0, 1.0], true).is_err());
    }

    #[test]
    fn test_winding() {
        assert_eq!(Winding::from(true), Winding::CounterClockwise);
        assert_eq!(Winding::from(false), Winding::Clockwise);
        assert_eq!(-Winding::Clockwise, Winding::CounterClockwise);
        assert!(Winding::default().is_counter_clockwise());
    }

    #[test]
    fn test_arc_length_follows_winding() {
        let (s, e) = (angles![0.0], angles![FRAC_PI_2]);
        assert_approx_eq!(arc_length(&s, &e, 1.0, true).unwrap(), FRAC_PI_2);
        assert_approx_eq!(arc_length(&s, &e, 1.0, false).unwrap(), 3.0 * FRAC_PI_2);
        assert_approx_eq!(arc_length(&e, &s, 1.0, false).unwrap(), FRAC_PI_2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_arc_serde() {
        let arc = solve_arc(
            &point![1.0, 2.0],
            2.0,
            &angles![0.0],
            &angles![FRAC_PI_2],
            Winding::Clockwise,
        )
        .unwrap();
        let json = serde_json::to_string(&arc).unwrap();
        assert_eq!(serde_json::from_str::<CircularArc>(&json).unwrap(), arc);

        // Derived attributes in the input are ignored and solved again.
        let json = r#"{
            "center": [0.0, 0.0],
            "radius": 1.0,
            "start_angle": [0.0],
            "end_angle": [3.14],
            "length": 100.0,
            "big": [true]
        }"#;
        let arc = serde_json::from_str::<CircularArc>(json).unwrap();
        assert_eq!(arc.winding(), Winding::CounterClockwise);
        assert_approx_eq!(arc.length(), 3.14);
        assert_eq!(arc.big(), &[false]);

        // Inconsistent input is rejected the same way as by `solve_arc()`.
        let json = r#"{
            "center": [0.0, 0.0, 0.0],
            "radius": 1.0,
            "start_angle": [0.0],
            "end_angle": [0.0]
        }"#;
        assert!(serde_json::from_str::<CircularArc>(json).is_err());
    }
}
