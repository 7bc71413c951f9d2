//! Initial points for simulation runs, drawn from a box.
//!
//! Model
//! - A simulation engine seeds one trajectory per point. The point set is
//!   built from the box's center, star points, unique corners, and optionally
//!   `rand` uniform samples, in that order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the same token always yields the same samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hyperrect::{HyperRectangle, State, FLAT_TOL};

/// Which point families to emit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedCfg {
    pub center: bool,
    pub star: bool,
    pub corners: bool,
    /// Number of uniform samples appended after the deterministic families.
    pub rand: usize,
    /// Flatness tolerance used for corner enumeration.
    pub tol: f64,
}

impl Default for SeedCfg {
    fn default() -> Self {
        Self {
            center: false,
            star: false,
            corners: true,
            rand: 0,
            tol: FLAT_TOL,
        }
    }
}

/// Replay token: `(seed, index)` pair that reproduces one random draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform point inside `rect`. Flat dimensions return their single value.
pub fn sample_uniform<R: Rng>(rect: &HyperRectangle, rng: &mut R) -> State {
    State::from_iterator(
        rect.ndim(),
        rect.dims().iter().map(|d| {
            if d.hi > d.lo {
                rng.gen_range(d.lo..=d.hi)
            } else {
                d.lo
            }
        }),
    )
}

/// Point set for `rect` according to `cfg`; reproducible from `tok`.
pub fn seed_points(rect: &HyperRectangle, cfg: &SeedCfg, tok: ReplayToken) -> Vec<State> {
    let mut out = Vec::new();
    if cfg.center {
        out.push(rect.center());
    }
    if cfg.star {
        out.extend(rect.star());
    }
    if cfg.corners {
        out.extend(rect.corners(cfg.tol));
    }
    if cfg.rand > 0 {
        let mut rng = tok.to_std_rng();
        out.extend((0..cfg.rand).map(|_| sample_uniform(rect, &mut rng)));
    }
    tracing::debug!(ndim = rect.ndim(), points = out.len(), "seed points");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> HyperRectangle {
        HyperRectangle::new([(0.5, 0.5), (1.5, 1.5), (-1.0, 1.0), (-1.0, 1.0)]).unwrap()
    }

    #[test]
    fn default_is_corners_only() {
        let pts = seed_points(&rect(), &SeedCfg::default(), ReplayToken::default());
        assert_eq!(pts, rect().unique_corners());
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn families_in_order() {
        let cfg = SeedCfg {
            center: true,
            star: true,
            corners: true,
            rand: 3,
            ..SeedCfg::default()
        };
        let r = rect();
        let pts = seed_points(&r, &cfg, ReplayToken { seed: 7, index: 0 });
        assert_eq!(pts.len(), 1 + 8 + 4 + 3);
        assert_eq!(pts[0], r.center());
        assert_eq!(pts[1..9], r.star()[..]);
        assert!(pts.iter().all(|p| r.contains(p)));
    }

    #[test]
    fn random_points_replay_and_respect_flat_dims() {
        let cfg = SeedCfg {
            corners: false,
            rand: 50,
            ..SeedCfg::default()
        };
        let r = rect();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = seed_points(&r, &cfg, tok);
        let b = seed_points(&r, &cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|p| p[0] == 0.5 && p[1] == 1.5 && r.contains(p)));

        let c = seed_points(&r, &cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }
}
