//! Errors for invalid geometric input.

use crate::Float;

/// Result type returned by every fallible operation in this crate.
pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

/// Error indicating that the input to a geometric operation is malformed.
///
/// These are always caused by bad input; no operation fails on well-formed
/// input.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} has {ndim} dimensions but at least {min} are required")]
    TooFewDimensions {
        what: &'static str,
        ndim: u8,
        min: u8,
    },
    #[error("{what} has {ndim} dimensions but at most {max} are supported")]
    TooManyDimensions {
        what: &'static str,
        ndim: usize,
        max: u8,
    },
    #[error("{what} has {got} dimensions but {expected} were expected")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{what} has {got} angles but {expected} were expected (one per pair of adjacent axes)")]
    AngleCountMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("angle {angle} in {what} is outside the range [-2π, 2π]")]
    AngleOutOfRange { what: &'static str, angle: Float },
    #[error("{what} must be in the range [0, 1] but is {value}")]
    ParameterOutOfRange { what: &'static str, value: Float },
    #[error("{what} contains a non-finite value")]
    NonFinite { what: &'static str },
    #[error("{what} must contain at least one point")]
    NoPoints { what: &'static str },
    #[error("polygon must have at least one radius")]
    NoRadii,
    #[error("polygon must have at least one side")]
    NoSides,
}
