//! Point transforms: shift, scale, rotate, reflect, and axis conversion.
//!
//! Each transform has a batch variant (`*_all`) that checks a whole sequence
//! of points up front and then applies the same transform to each of them in
//! order.

use crate::polar::{polar_angle, polar_length};
use crate::{Angles, Float, Point, Result, Vector, VectorRef, validate};

/// Returns `pt` translated by `offset`.
pub fn shift(pt: &Point, offset: impl VectorRef) -> Result<Point> {
    let ndim = validate::point("point", pt)?;
    validate::vector("shift offset", &offset, ndim)?;

    Ok(pt + offset)
}

/// Returns every point in `pts` translated by `offset`.
pub fn shift_all(pts: &[Point], offset: impl VectorRef) -> Result<Vec<Point>> {
    let ndim = validate::points("points", pts)?;
    validate::vector("shift offset", &offset, ndim)?;

    Ok(pts.iter().map(|p| p + &offset).collect())
}

/// Returns `pt` scaled by `factor` from the origin.
pub fn scale(pt: &Point, factor: Float) -> Result<Point> {
    validate::point("point", pt)?;
    validate::scalar("scale factor", factor)?;

    Ok(Point(pt.0.scale(factor)))
}

/// Returns every point in `pts` scaled by `factor` from the origin.
pub fn scale_all(pts: &[Point], factor: Float) -> Result<Vec<Point>> {
    validate::points("points", pts)?;
    validate::scalar("scale factor", factor)?;

    Ok(pts.iter().map(|p| Point(p.0.scale(factor))).collect())
}

/// Returns `pt` rotated around `center`.
///
/// For each pair of adjacent axes `(i, i+1)`, the projection of `pt - center`
/// onto that plane is converted to polar form and rotated by `angles[i]`. The
/// result takes its first coordinate from the cosine of the first pair and
/// coordinate `i+1` from the sine of pair `i`. In two dimensions this is an
/// ordinary rotation.
pub fn rotate(pt: &Point, angles: &Angles, center: &Point) -> Result<Point> {
    let ndim = validate::point("point", pt)?;
    validate::angles("rotation", angles, ndim)?;
    validate::point_with_ndim("rotation center", center, ndim)?;

    Ok(rotate_unchecked(pt, angles, center))
}

/// Returns every point in `pts` rotated around `center`.
pub fn rotate_all(pts: &[Point], angles: &Angles, center: &Point) -> Result<Vec<Point>> {
    let ndim = validate::points("points", pts)?;
    validate::angles("rotation", angles, ndim)?;
    validate::point_with_ndim("rotation center", center, ndim)?;

    Ok(pts
        .iter()
        .map(|p| rotate_unchecked(p, angles, center))
        .collect())
}

pub(crate) fn rotate_unchecked(pt: &Point, angles: &Angles, center: &Point) -> Point {
    let v = pt - center;

    let mut ret = Vector::zero(v.ndim());
    for (i, angle) in (0..).zip(angles.iter()) {
        let (x, y) = (v[i], v[i + 1]);
        let len = polar_length(x, y);
        let new_angle = polar_angle(x, y) + angle;
        if i == 0 {
            ret[0] = len * new_angle.cos();
        }
        ret[i + 1] = len * new_angle.sin();
    }

    center + ret
}

/// Returns `pt` reflected through one axis-aligned plane per axis.
///
/// `planes[i]` is the position of the mirror on axis `i`, or `None` to leave
/// that coordinate unchanged.
pub fn reflect(pt: &Point, planes: &[Option<Float>]) -> Result<Point> {
    let ndim = validate::point("point", pt)?;
    validate_planes(planes, ndim)?;

    Ok(reflect_unchecked(pt, planes))
}

/// Returns every point in `pts` reflected through one axis-aligned plane per
/// axis.
pub fn reflect_all(pts: &[Point], planes: &[Option<Float>]) -> Result<Vec<Point>> {
    let ndim = validate::points("points", pts)?;
    validate_planes(planes, ndim)?;

    Ok(pts.iter().map(|p| reflect_unchecked(p, planes)).collect())
}

fn validate_planes(planes: &[Option<Float>], ndim: u8) -> Result<()> {
    validate::len("reflection planes", ndim as usize, planes.len())?;
    for &plane in planes.iter().flatten() {
        validate::scalar("reflection planes", plane)?;
    }
    Ok(())
}

fn reflect_unchecked(pt: &Point, planes: &[Option<Float>]) -> Point {
    std::iter::zip(pt.coords(), planes)
        .map(|(x, plane)| match plane {
            Some(m) => 2.0 * m - x,
            None => x,
        })
        .collect()
}

/// Returns `pt` with some axes flipped and then offset, converting between
/// coordinate systems with different axis orientations.
///
/// For example, the Y axis of SVG increases from top to bottom but the Y axis
/// of DXF increases from bottom to top.
pub fn axis_convert(pt: &Point, flip: &[bool], offset: impl VectorRef) -> Result<Point> {
    let ndim = validate::point("point", pt)?;
    validate::len("axis flip mask", ndim as usize, flip.len())?;
    validate::vector("axis offset", &offset, ndim)?;

    Ok(axis_convert_unchecked(pt, flip, &offset))
}

/// Returns every point in `pts` with some axes flipped and then offset.
pub fn axis_convert_all(
    pts: &[Point],
    flip: &[bool],
    offset: impl VectorRef,
) -> Result<Vec<Point>> {
    let ndim = validate::points("points", pts)?;
    validate::len("axis flip mask", ndim as usize, flip.len())?;
    validate::vector("axis offset", &offset, ndim)?;

    Ok(pts
        .iter()
        .map(|p| axis_convert_unchecked(p, flip, &offset))
        .collect())
}

fn axis_convert_unchecked(pt: &Point, flip: &[bool], offset: &impl VectorRef) -> Point {
    std::iter::zip(pt.coords(), flip)
        .zip(offset.iter())
        .map(|((x, &flipped), shift)| match flipped {
            true => shift - x,
            false => shift + x,
        })
        .collect()
}

/// Shifts `pt` by `offset` and then rotates the result around the original
/// `pt`.
///
/// With `offset = [r, 0, ...]` this places a point at distance `r` from `pt`
/// in the direction given by `angles`.
pub fn relative(pt: &Point, offset: impl VectorRef, angles: &Angles) -> Result<Point> {
    let ndim = validate::point("point", pt)?;
    validate::vector("shift offset", &offset, ndim)?;
    validate::angles("rotation", angles, ndim)?;

    Ok(rotate_unchecked(&(pt + offset), angles, pt))
}
