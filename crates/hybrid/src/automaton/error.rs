//! Automaton construction errors.

use thiserror::Error;

use super::types::{AutomatonId, ModeId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A mode handle minted by a different automaton.
    #[error("mode {mode} does not belong to automaton {automaton}")]
    ForeignMode { mode: ModeId, automaton: AutomatonId },

    /// A second transition with the same explicit name out of the same mode.
    #[error("mode '{from}' already has an outgoing transition named '{name}'")]
    DuplicateTransition { from: String, name: String },
}
