//! Extreme-point enumeration: center, star points, unique corners.
//!
//! Corner enumeration only iterates over non-flat dimensions. A box with `k`
//! non-flat dimensions has exactly `2^k` distinct corners, so we count to
//! `2^k` and decode each counter value as one bit per non-flat dimension
//! (flat dimensions are pinned to their midpoint). No dedup pass is needed.

use super::cfg::FLAT_TOL;
use super::types::{HyperRectangle, Interval, State};

impl HyperRectangle {
    /// Midpoint of every interval.
    pub fn center(&self) -> State {
        State::from_iterator(self.ndim(), self.dims().iter().map(Interval::midpoint))
    }

    /// The `2n` star points: for each dimension `i`, the center with
    /// coordinate `i` moved to the low bound, then to the high bound.
    ///
    /// Flat dimensions still contribute two (equal) points.
    pub fn star(&self) -> Vec<State> {
        let center = self.center();
        let mut rv = Vec::with_capacity(2 * self.ndim());
        for (i, d) in self.dims().iter().enumerate() {
            let mut lo = center.clone();
            lo[i] = d.lo;
            rv.push(lo);

            let mut hi = center.clone();
            hi[i] = d.hi;
            rv.push(hi);
        }
        rv
    }

    /// Distinct corners using the default flatness tolerance.
    pub fn unique_corners(&self) -> Vec<State> {
        self.unique_corners_tol(FLAT_TOL)
    }

    /// Distinct corners; dimensions with width `<= tol` are pinned to their
    /// midpoint, so a `tol` above every width yields just `center()`.
    ///
    /// `tol < 0` disables pinning, so every dimension is enumerated.
    pub fn unique_corners_tol(&self, tol: f64) -> Vec<State> {
        self.corners(tol).collect()
    }

    /// Number of corners `unique_corners_tol(tol)` yields, i.e. `2^k`.
    ///
    /// `None` when `k >= 64` and the count does not fit a `u64`.
    pub fn num_unique_corners(&self, tol: f64) -> Option<u64> {
        let k = u32::try_from(self.non_flat_count(tol)).ok()?;
        1u64.checked_shl(k)
    }

    /// Lazy corner enumeration in counter order.
    ///
    /// Panics if the box has 64 or more non-flat dimensions (the count would
    /// not fit the counter, and the output would not fit memory anyway).
    pub fn corners(&self, tol: f64) -> Corners<'_> {
        let Some(end) = self.num_unique_corners(tol) else {
            panic!(
                "corner enumeration over {} non-flat dimensions overflows the counter",
                self.non_flat_count(tol)
            );
        };
        Corners {
            dims: self.dims(),
            flat: self.flat_mask(tol),
            next: 0,
            end,
        }
    }

    fn non_flat_count(&self, tol: f64) -> usize {
        self.dims().iter().filter(|d| !d.is_flat(tol)).count()
    }
}

/// Iterator returned by [`HyperRectangle::corners`].
#[derive(Clone, Debug)]
pub struct Corners<'a> {
    dims: &'a [Interval],
    flat: Vec<bool>,
    next: u64,
    end: u64,
}

impl Corners<'_> {
    fn decode(&self, mut it: u64) -> State {
        let coords = self.dims.iter().zip(&self.flat).map(|(d, &flat)| {
            if flat {
                d.midpoint()
            } else {
                let x = d.bound(it % 2);
                it >>= 1;
                x
            }
        });
        State::from_iterator(self.dims.len(), coords)
    }
}

impl Iterator for Corners<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        if self.next >= self.end {
            return None;
        }
        let p = self.decode(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Corners<'_> {}
