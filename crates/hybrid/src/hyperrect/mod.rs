//! Axis-aligned hyperrectangles (boxes) in R^n.
//!
//! Purpose
//! - Describe initial regions and invariants handed to the simulation engine.
//! - Provide the extreme points the engine seeds runs from: the center, the
//!   `2n` star points, and the unique corners.
//!
//! Assumptions and conventions
//! - Points are `nalgebra::DVector<f64>` (alias `State`), one coordinate per
//!   dimension, in dimension order.
//! - A dimension is flat when its width is at most `tol` (absolute, default
//!   `1e-9`). Flat dimensions are pinned to their midpoint during corner
//!   enumeration. `tol < 0` disables pinning.
//! - Boxes are immutable; every query is a pure function of the bounds.

pub mod cfg;
mod points;
mod types;

pub use cfg::FLAT_TOL;
pub use points::Corners;
pub use types::{GeomError, HyperRectangle, Interval, State};

#[cfg(test)]
mod tests;
