//! Box types: closed intervals and the n-dimensional hyperrectangle.

use nalgebra::DVector;
use thiserror::Error;

use super::cfg::CONTAINS_EPS;

/// A point in state space (one coordinate per automaton variable).
pub type State = DVector<f64>;

/// Errors raised while constructing or querying a box.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("dimension {dim}: low bound {lo} exceeds high bound {hi}")]
    InvertedInterval { dim: usize, lo: f64, hi: f64 },
    #[error("dimension {dim}: bounds must be finite")]
    NonFinite { dim: usize },
    #[error("expected {expected} bound pairs, got {got}")]
    DimMismatch { expected: usize, got: usize },
}

/// Closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
    /// Flat means the width is within `tol` of zero. With `tol == 0` only an
    /// exactly degenerate interval is flat; `tol < 0` never counts as flat.
    #[inline]
    pub fn is_flat(&self, tol: f64) -> bool {
        self.width().abs() <= tol
    }
    /// Bound selected by a corner digit: 0 → low, anything else → high.
    #[inline]
    pub fn bound(&self, digit: u64) -> f64 {
        if digit == 0 {
            self.lo
        } else {
            self.hi
        }
    }
}

/// Axis-aligned box in R^n.
///
/// Invariants:
/// - Every interval has finite bounds with `lo <= hi`.
/// - The dimensionality is fixed at construction; there are no mutators.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperRectangle {
    dims: Vec<Interval>,
}

impl HyperRectangle {
    /// Build a box from `(lo, hi)` pairs, one per dimension.
    pub fn new<I>(dims: I) -> Result<Self, GeomError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut out = Vec::new();
        for (dim, (lo, hi)) in dims.into_iter().enumerate() {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(GeomError::NonFinite { dim });
            }
            if lo > hi {
                return Err(GeomError::InvertedInterval { dim, lo, hi });
            }
            out.push(Interval { lo, hi });
        }
        Ok(Self { dims: out })
    }

    /// Build a box from separate low and high corner vectors.
    pub fn from_bounds(lo: &[f64], hi: &[f64]) -> Result<Self, GeomError> {
        if lo.len() != hi.len() {
            return Err(GeomError::DimMismatch {
                expected: lo.len(),
                got: hi.len(),
            });
        }
        Self::new(lo.iter().copied().zip(hi.iter().copied()))
    }

    /// Degenerate box holding exactly one point.
    pub fn from_point(p: &[f64]) -> Result<Self, GeomError> {
        Self::new(p.iter().map(|&x| (x, x)))
    }

    #[inline]
    pub fn dims(&self) -> &[Interval] {
        &self.dims
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Per-dimension flatness under absolute tolerance `tol`.
    pub fn flat_mask(&self, tol: f64) -> Vec<bool> {
        self.dims.iter().map(|d| d.is_flat(tol)).collect()
    }

    /// Membership with a small slack on every face.
    pub fn contains(&self, p: &State) -> bool {
        p.len() == self.ndim()
            && self
                .dims
                .iter()
                .zip(p.iter())
                .all(|(d, &x)| x >= d.lo - CONTAINS_EPS && x <= d.hi + CONTAINS_EPS)
    }
}
