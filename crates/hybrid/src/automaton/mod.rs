//! Hybrid automata: discrete modes with continuous flows and guarded jumps.
//!
//! Purpose
//! - A static description of a hybrid system, built incrementally by a caller
//!   and handed to an external simulation/analysis engine. Nothing here
//!   executes the automaton.
//!
//! Model
//! - `HybridAutomaton` owns all modes and transitions. Modes and transitions
//!   are created only through `new_mode` / `new_transition`; there is no
//!   removal.
//! - Back-references are handles (`ModeId`, `TransitionId`) that embed the
//!   owning `AutomatonId`; a handle from another automaton is rejected.
//! - Flows, invariants, guards and resets are the typed callables in `roles`.
//!
//! Conventions
//! - `new_mode` with a name already in use replaces the mapping entry (last
//!   write wins) and logs a warning.
//! - Explicit transition names are unique per source mode; unnamed
//!   transitions render as `"<from> -> <to>"`.

mod build;
mod error;
pub mod roles;
mod types;

pub use build::HybridAutomaton;
pub use error::AutomatonError;
pub use roles::{Derivative, Guard, Invariant, Reset};
pub use types::{AutomatonId, AutomatonMode, AutomatonTransition, ModeId, TransitionId};
