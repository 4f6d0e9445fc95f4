//! Closed polygons.

use std::f64::consts::TAU;

use crate::kernel::transform::rotate_unchecked;
use crate::{Float, GeometryError, Point, Result, Vector, validate};

/// Returns the vectors between consecutive points of a closed loop.
///
/// The last vector goes from the last point back to the first, so the result
/// has one vector per point.
pub fn vectors_between(pts: &[Point]) -> Result<Vec<Vector>> {
    validate::points("polygon", pts)?;

    Ok(pts
        .iter()
        .zip(pts.iter().cycle().skip(1))
        .map(|(a, b)| b - a)
        .collect())
}

/// Returns the vertices of a 2D polygon with `n_sides` vertices spaced at
/// equal angles around the origin, starting on the positive X axis.
///
/// Vertex `i` is at distance `radii[i % radii.len()]` from the origin. A
/// single radius gives a regular polygon; several radii give shapes such as
/// stars, gear wheels, and ratchet wheels.
pub fn regular_polygon(n_sides: usize, radii: &[Float]) -> Result<Vec<Point>> {
    if n_sides == 0 {
        return Err(GeometryError::NoSides);
    }
    if radii.is_empty() {
        return Err(GeometryError::NoRadii);
    }
    for &r in radii {
        validate::scalar("polygon radius", r)?;
    }

    let origin = Point::origin(2);
    Ok((0..n_sides)
        .zip(radii.iter().cycle())
        .map(|(i, &r)| {
            let angle = i as Float * TAU / n_sides as Float;
            rotate_unchecked(&point![r, 0.0], &angles![angle], &origin)
        })
        .collect())
}
