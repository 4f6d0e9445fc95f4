//! Elementary operations on points and sequences of points in N dimensions.
//!
//! Every function checks its input before doing any work and returns a
//! [`GeometryError`](crate::GeometryError) for points with fewer than two
//! dimensions, non-finite values, or companion sequences (offsets, angle
//! lists, flip masks, reflection planes) whose length does not match the
//! point.

mod measure;
mod polygon;
mod transform;

pub(crate) use measure::{direction_unchecked, lerp};
pub use measure::{direction, distance, midpoint};
pub use polygon::{regular_polygon, vectors_between};
pub use transform::{
    axis_convert, axis_convert_all, reflect, reflect_all, relative, rotate, rotate_all, scale,
    scale_all, shift, shift_all,
};
pub(crate) use transform::rotate_unchecked;
