//! Hybrid automata and box geometry for seeding simulation/reachability runs.
//!
//! Layout
//! - `hyperrect`: axis-aligned boxes; center, star points, unique corners.
//! - `automaton`: modes, guarded transitions, and the owning automaton.
//! - `seed`: initial point sets drawn from a box (corners, star, random).
//! - `nav`: the navigation benchmark built on top of the two above.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and by external tooling that
//!   drives a simulation engine. `api` is the curated import surface.

pub mod api;
pub mod automaton;
pub mod hyperrect;
pub mod nav;
pub mod seed;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hyperrect::{HyperRectangle, State};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::automaton::{
        Derivative, Guard, HybridAutomaton, Invariant, ModeId, Reset, TransitionId,
    };
    pub use crate::hyperrect::{HyperRectangle, Interval, State, FLAT_TOL};
    pub use crate::seed::{seed_points, ReplayToken, SeedCfg};
    pub use nalgebra::{dvector, DVector};
}
