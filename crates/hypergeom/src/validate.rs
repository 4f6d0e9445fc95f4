//! Precondition checks shared by every public operation.
//!
//! Each check returns an error describing the first problem found. All checks
//! run before any computation, so no operation ever returns a partial result.

use crate::{
    Angles, Float, GeometryError, MAX_ANGLE, MAX_NDIM, MIN_NDIM, Point, Result, VectorRef,
};

/// Checks that a point has between [`MIN_NDIM`] and [`MAX_NDIM`] finite
/// coordinates and returns its dimensionality.
pub(crate) fn point(what: &'static str, p: &Point) -> Result<u8> {
    let len = p.0.0.len();
    if len > MAX_NDIM as usize {
        return Err(GeometryError::TooManyDimensions {
            what,
            ndim: len,
            max: MAX_NDIM,
        });
    }
    let ndim = p.ndim();
    if ndim < MIN_NDIM {
        return Err(GeometryError::TooFewDimensions {
            what,
            ndim,
            min: MIN_NDIM,
        });
    }
    if !p.0.is_finite() {
        return Err(GeometryError::NonFinite { what });
    }
    Ok(ndim)
}

/// Checks that a point is valid and has exactly `ndim` dimensions.
pub(crate) fn point_with_ndim(what: &'static str, p: &Point, ndim: u8) -> Result<()> {
    point(what, p)?;
    len(what, ndim as usize, p.ndim() as usize)
}

/// Checks a non-empty sequence of valid points that all share one
/// dimensionality, and returns it.
pub(crate) fn points(what: &'static str, pts: &[Point]) -> Result<u8> {
    let (first, rest) = pts.split_first().ok_or(GeometryError::NoPoints { what })?;
    let ndim = point(what, first)?;
    for p in rest {
        point_with_ndim(what, p, ndim)?;
    }
    Ok(ndim)
}

/// Checks that a companion sequence has exactly the expected length.
pub(crate) fn len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(GeometryError::DimensionMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

/// Checks that a vector has exactly `ndim` finite components.
pub(crate) fn vector(what: &'static str, v: &impl VectorRef, ndim: u8) -> Result<()> {
    len(what, ndim as usize, v.ndim() as usize)?;
    if !v.is_finite() {
        return Err(GeometryError::NonFinite { what });
    }
    Ok(())
}

/// Checks that an angle list matches a point with `ndim` dimensions and that
/// every angle is within `[-MAX_ANGLE, MAX_ANGLE]`.
pub(crate) fn angles(what: &'static str, a: &Angles, ndim: u8) -> Result<()> {
    let expected = ndim.saturating_sub(1) as usize;
    if a.len() as usize != expected {
        return Err(GeometryError::AngleCountMismatch {
            what,
            expected,
            got: a.len() as usize,
        });
    }
    for angle in a.iter() {
        if !angle.is_finite() {
            return Err(GeometryError::NonFinite { what });
        }
        if angle.abs() > MAX_ANGLE {
            return Err(GeometryError::AngleOutOfRange { what, angle });
        }
    }
    Ok(())
}

/// Checks that a start/end pair of angle lists are non-empty, the same
/// length, and in range. Returns the length.
pub(crate) fn angle_pair(start: &Angles, end: &Angles) -> Result<u8> {
    if start.is_empty() {
        return Err(GeometryError::AngleCountMismatch {
            what: "start angle",
            expected: (MIN_NDIM - 1) as usize,
            got: 0,
        });
    }
    let ndim = start.0.0.len() + 1;
    if ndim > MAX_NDIM as usize {
        return Err(GeometryError::TooManyDimensions {
            what: "start angle",
            ndim,
            max: MAX_NDIM,
        });
    }
    let ndim = start.point_ndim();
    angles("start angle", start, ndim)?;
    angles("end angle", end, ndim)?;
    Ok(start.len())
}

/// Checks that a scalar is finite.
pub(crate) fn scalar(what: &'static str, x: Float) -> Result<()> {
    match x.is_finite() {
        true => Ok(()),
        false => Err(GeometryError::NonFinite { what }),
    }
}

/// Checks that an interpolation parameter is within `[0, 1]`.
pub(crate) fn parameter(what: &'static str, t: Float) -> Result<()> {
    scalar(what, t)?;
    if !(0.0..=1.0).contains(&t) {
        return Err(GeometryError::ParameterOutOfRange { what, value: t });
    }
    Ok(())
}
