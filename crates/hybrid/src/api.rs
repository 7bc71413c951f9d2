//! Curated API surface for callers that hand models to a simulation engine.
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! may change, this list is what the CLI and external drivers rely on.

// Boxes
pub use crate::hyperrect::{Corners, GeomError, HyperRectangle, Interval, State, FLAT_TOL};
// Automaton model
pub use crate::automaton::{
    AutomatonError, AutomatonId, AutomatonMode, AutomatonTransition, Derivative, Guard,
    HybridAutomaton, Invariant, ModeId, Reset, TransitionId,
};
// Initial points
pub use crate::seed::{sample_uniform, seed_points, ReplayToken, SeedCfg};
// Navigation benchmark
pub use crate::nav::{
    build_nav, parse_cells, NavBenchmark, NavCell, NavError, NavParams, NAV_VARIABLES,
};

/// `(label, from name, to name)` rows for every transition, in creation order.
///
/// Shadowed endpoint modes are reported under their (reused) name.
pub fn transition_table(ha: &HybridAutomaton) -> Vec<(String, String, String)> {
    ha.transitions()
        .iter()
        .map(|t| {
            let name_of =
                |id: ModeId| ha.mode(id).map(|m| m.name().to_string()).unwrap_or_default();
            (t.to_string(), name_of(t.from_mode()), name_of(t.to_mode()))
        })
        .collect()
}
