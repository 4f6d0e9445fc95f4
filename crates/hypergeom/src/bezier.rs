//! Bezier curves of any order in N dimensions.
//!
//! Curves are evaluated with de Casteljau's algorithm: each step replaces K
//! control points with the K-1 points that interpolate between consecutive
//! pairs, until the requested number of points remain.

use crate::kernel::{direction_unchecked, lerp};
use crate::{Angles, Float, GeometryError, Point, Result, VectorRef, validate};

/// Bezier curve defined by a non-empty list of control points that all have
/// the same number of dimensions (at least two).
///
/// With the `serde` feature, a curve serializes as its list of control points
/// and is checked again when deserialized.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Point>", try_from = "Vec<Point>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Point>,
}

impl TryFrom<Vec<Point>> for BezierCurve {
    type Error = GeometryError;

    fn try_from(control_points: Vec<Point>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierCurve> for Vec<Point> {
    fn from(curve: BezierCurve) -> Self {
        curve.control_points
    }
}

impl BezierCurve {
    /// Constructs a Bezier curve, checking the control points.
    pub fn new(control_points: Vec<Point>) -> Result<Self> {
        validate::points("control points", &control_points)?;
        Ok(Self { control_points })
    }

    /// Returns the control points.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }
    /// Returns the order of the curve, which is one less than the number of
    /// control points.
    pub fn order(&self) -> usize {
        self.control_points.len() - 1
    }
    /// Returns the number of dimensions of the curve.
    pub fn ndim(&self) -> u8 {
        self.control_points[0].ndim()
    }

    /// Returns the point at `t` on the curve, where `t` is in the range
    /// `[0, 1]`.
    pub fn evaluate(&self, t: Float) -> Result<Point> {
        validate::parameter("curve parameter", t)?;
        Ok(evaluate_unchecked(&self.control_points, t))
    }

    /// Returns `n_segments + 1` points along the curve at equal steps of `t`.
    pub fn sample(&self, n_segments: usize) -> Vec<Point> {
        sample_unchecked(&self.control_points, n_segments)
    }

    /// Returns the length of the polyline through [`Self::order()`] equal
    /// steps of `t`.
    pub fn approx_length(&self) -> Float {
        approx_length_unchecked(&self.control_points)
    }

    /// Returns the direction of the curve at `t`, or `None` if the curve has
    /// only one control point.
    pub fn tangent_direction(&self, t: Float) -> Result<Option<Angles>> {
        validate::parameter("curve parameter", t)?;
        Ok(tangent_direction_unchecked(&self.control_points, t))
    }
}

/// Returns the point at `t` on the Bezier curve with the given control
/// points, where `t` is in the range `[0, 1]`.
///
/// `t = 0` gives exactly the first control point and `t = 1` gives exactly
/// the last.
pub fn evaluate(control_points: &[Point], t: Float) -> Result<Point> {
    validate::points("control points", control_points)?;
    validate::parameter("curve parameter", t)?;
    Ok(evaluate_unchecked(control_points, t))
}

/// Returns `n_segments + 1` points approximating the Bezier curve with the
/// given control points as a polyline.
///
/// The points are at `t = i / n_segments` for `i` in `0..n_segments`, followed
/// by the last control point itself.
pub fn sample(control_points: &[Point], n_segments: usize) -> Result<Vec<Point>> {
    validate::points("control points", control_points)?;
    Ok(sample_unchecked(control_points, n_segments))
}

/// Returns the approximate length of the Bezier curve with the given control
/// points.
///
/// The curve is split into as many straight segments as its order and their
/// lengths are summed. This is not adaptive.
pub fn approx_length(control_points: &[Point]) -> Result<Float> {
    validate::points("control points", control_points)?;
    Ok(approx_length_unchecked(control_points))
}

/// Returns the direction at `t` of the Bezier curve with the given control
/// points, as one angle per pair of adjacent axes.
///
/// Returns `None` for a curve with a single control point, which has no
/// direction.
pub fn tangent_direction(control_points: &[Point], t: Float) -> Result<Option<Angles>> {
    validate::points("control points", control_points)?;
    validate::parameter("curve parameter", t)?;
    Ok(tangent_direction_unchecked(control_points, t))
}

/// Runs de Casteljau's algorithm until at most `remaining` points are left.
fn reduce(control_points: &[Point], t: Float, remaining: usize) -> Vec<Point> {
    let mut pts = control_points.to_vec();
    while pts.len() > remaining {
        pts = pts.windows(2).map(|w| lerp(&w[0], &w[1], t)).collect();
    }
    pts
}

fn evaluate_unchecked(control_points: &[Point], t: Float) -> Point {
    let mut pts = reduce(control_points, t, 1);
    pts.swap_remove(0)
}

fn sample_unchecked(control_points: &[Point], n_segments: usize) -> Vec<Point> {
    let last = control_points[control_points.len() - 1].clone();
    (0..n_segments)
        .map(|i| evaluate_unchecked(control_points, i as Float / n_segments as Float))
        .chain([last])
        .collect()
}

fn approx_length_unchecked(control_points: &[Point]) -> Float {
    let order = control_points.len() - 1;
    sample_unchecked(control_points, order)
        .windows(2)
        .map(|w| (&w[1] - &w[0]).mag())
        .sum()
}

fn tangent_direction_unchecked(control_points: &[Point], t: Float) -> Option<Angles> {
    if control_points.len() < 2 {
        return None;
    }
    let pts = reduce(control_points, t, 2);
    Some(direction_unchecked(&pts[0], &pts[1]))
}
