//! Handles, modes and transitions.
//!
//! Modes and transitions never point at their automaton or at each other;
//! they carry copyable handles (`ModeId`, `TransitionId`) that embed the
//! owning `AutomatonId`. The automaton resolves handles against its own
//! storage and rejects handles minted by another automaton.

use std::fmt;

use super::roles::{Derivative, Guard, Invariant, Reset};
use crate::hyperrect::State;

/// Identity of one `HybridAutomaton` instance (unique per process).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutomatonId(pub(super) u64);

impl fmt::Display for AutomatonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ha{}", self.0)
    }
}

/// Handle of a mode. Only its automaton can mint one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModeId {
    pub(super) owner: AutomatonId,
    pub(super) index: usize,
}

impl ModeId {
    #[inline]
    pub fn automaton(self) -> AutomatonId {
        self.owner
    }
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/m{}", self.owner, self.index)
    }
}

/// Handle of a transition. Only its automaton can mint one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId {
    pub(super) owner: AutomatonId,
    pub(super) index: usize,
}

impl TransitionId {
    #[inline]
    pub fn automaton(self) -> AutomatonId {
        self.owner
    }
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/t{}", self.owner, self.index)
    }
}

/// A discrete mode: name, flow, invariant and outgoing transitions.
///
/// Invariants:
/// - `transitions` lists outgoing edges in creation order and only grows
///   through `HybridAutomaton::new_transition`.
/// - `der` is `None` until the caller assigns a flow.
#[derive(Debug)]
pub struct AutomatonMode {
    pub(super) id: ModeId,
    pub(super) name: String,
    pub(super) der: Option<Derivative>,
    pub(super) inv: Invariant,
    pub(super) transitions: Vec<TransitionId>,
}

impl AutomatonMode {
    pub(super) fn new(id: ModeId, name: String) -> Self {
        Self {
            id,
            name,
            der: None,
            inv: Invariant::always(),
            transitions: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> ModeId {
        self.id
    }
    #[inline]
    pub fn automaton(&self) -> AutomatonId {
        self.id.owner
    }
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[inline]
    pub fn transitions(&self) -> &[TransitionId] {
        &self.transitions
    }
    #[inline]
    pub fn derivative(&self) -> Option<&Derivative> {
        self.der.as_ref()
    }
    #[inline]
    pub fn invariant(&self) -> &Invariant {
        &self.inv
    }

    pub fn set_derivative(&mut self, der: Derivative) -> &mut Self {
        self.der = Some(der);
        self
    }

    pub fn set_invariant(&mut self, inv: Invariant) -> &mut Self {
        self.inv = inv;
        self
    }

    /// Flow at `x`, or `None` if no derivative was assigned.
    pub fn derivative_at(&self, x: &State) -> Option<State> {
        self.der.as_ref().map(|d| d.eval(x))
    }

    pub fn invariant_holds(&self, x: &State) -> bool {
        self.inv.holds(x)
    }
}

/// A directed, guarded edge between two modes of the same automaton.
///
/// Endpoints and name are fixed at creation; the guard and reset default to
/// "always" and identity and may be assigned afterwards.
#[derive(Debug)]
pub struct AutomatonTransition {
    pub(super) id: TransitionId,
    pub(super) from: ModeId,
    pub(super) to: ModeId,
    pub(super) name: Option<String>,
    pub(super) label: String,
    pub(super) guard: Guard,
    pub(super) reset: Reset,
}

impl AutomatonTransition {
    #[inline]
    pub fn id(&self) -> TransitionId {
        self.id
    }
    #[inline]
    pub fn automaton(&self) -> AutomatonId {
        self.id.owner
    }
    #[inline]
    pub fn from_mode(&self) -> ModeId {
        self.from
    }
    #[inline]
    pub fn to_mode(&self) -> ModeId {
        self.to
    }
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    #[inline]
    pub fn guard(&self) -> &Guard {
        &self.guard
    }
    #[inline]
    pub fn reset(&self) -> &Reset {
        &self.reset
    }

    pub fn set_guard(&mut self, guard: Guard) -> &mut Self {
        self.guard = guard;
        self
    }

    pub fn set_reset(&mut self, reset: Reset) -> &mut Self {
        self.reset = reset;
        self
    }

    pub fn is_enabled(&self, x: &State) -> bool {
        self.guard.holds(x)
    }

    /// Post-state after firing from `x`.
    pub fn fire(&self, x: &State) -> State {
        self.reset.apply(x)
    }
}

/// The explicit name, or `"<from> -> <to>"` for unnamed transitions.
impl fmt::Display for AutomatonTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
