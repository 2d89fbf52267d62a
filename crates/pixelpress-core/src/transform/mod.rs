//! Geometric transforms: rotation and flips.
//!
//! These are the last steps of the effect pipeline, applied after the
//! enhancement multipliers and the named filter:
//! 1. Rotation (canvas expanded to the rotated bounds)
//! 2. Horizontal flip
//! 3. Vertical flip
//!
//! Rotation angles are in degrees, positive = counter-clockwise. All
//! operations return new images; the input is never mutated.

mod flip;
mod rotation;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotation::{compute_rotated_bounds, rotate};
