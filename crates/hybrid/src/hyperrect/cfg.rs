//! Tolerance defaults for box geometry.
//!
//! Policy
//! - Fixed constants; callers that need a different flatness threshold pass it
//!   explicitly (`unique_corners_tol`). Tolerances are absolute, so callers
//!   needing relative semantics pre-scale their inputs.

/// Width at or below which a dimension counts as flat.
pub const FLAT_TOL: f64 = 1e-9;
/// Slack used by `HyperRectangle::contains`.
pub(crate) const CONTAINS_EPS: f64 = 1e-9;
