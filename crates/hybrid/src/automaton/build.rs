//! `HybridAutomaton`: owner of all modes and transitions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::error::AutomatonError;
use super::types::{AutomatonId, AutomatonMode, AutomatonTransition, ModeId, TransitionId};
use crate::hyperrect::State;

static NEXT_AUTOMATON: AtomicU64 = AtomicU64::new(0);

/// A hybrid automaton under construction (or finished and handed off).
///
/// Storage
/// - `modes` is an arena of every mode ever created, indexed by `ModeId`.
///   A mode shadowed by a later `new_mode` with the same name stays in the
///   arena so transitions that already reference it remain valid, but it is
///   no longer reachable by name or through `modes()`.
/// - `by_name` is the name → mode mapping (last write wins).
/// - `transitions` is the global list in creation order.
#[derive(Debug)]
pub struct HybridAutomaton {
    id: AutomatonId,
    modes: Vec<AutomatonMode>,
    by_name: HashMap<String, ModeId>,
    transitions: Vec<AutomatonTransition>,
}

impl Default for HybridAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridAutomaton {
    /// Create an empty automaton with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: AutomatonId(NEXT_AUTOMATON.fetch_add(1, Ordering::Relaxed)),
            modes: Vec::new(),
            by_name: HashMap::new(),
            transitions: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> AutomatonId {
        self.id
    }

    /// Create a mode and register it under `name`.
    ///
    /// An existing mode with the same name is replaced in the mapping (the
    /// count of named modes is unchanged). This is logged at `warn`.
    pub fn new_mode(&mut self, name: impl Into<String>) -> &mut AutomatonMode {
        let name = name.into();
        let id = ModeId {
            owner: self.id,
            index: self.modes.len(),
        };
        if let Some(prev) = self.by_name.insert(name.clone(), id) {
            tracing::warn!(automaton = %self.id, mode = %name, shadowed = %prev, "mode name reused");
        }
        tracing::debug!(automaton = %self.id, mode = %name, id = %id, "new mode");
        self.modes.push(AutomatonMode::new(id, name));
        let idx = self.modes.len() - 1;
        &mut self.modes[idx]
    }

    /// Create a transition `from → to` and register it with `from` and with
    /// the global list.
    ///
    /// Fails if either handle belongs to another automaton, or if `from`
    /// already has an outgoing transition with the same explicit name.
    pub fn new_transition(
        &mut self,
        from: ModeId,
        to: ModeId,
        name: Option<&str>,
    ) -> Result<&mut AutomatonTransition, AutomatonError> {
        self.check_owned(from)?;
        self.check_owned(to)?;

        let from_name = self.modes[from.index()].name.clone();
        if let Some(n) = name {
            let taken = self.modes[from.index()]
                .transitions
                .iter()
                .any(|t| self.transitions[t.index()].name.as_deref() == Some(n));
            if taken {
                return Err(AutomatonError::DuplicateTransition {
                    from: from_name,
                    name: n.to_string(),
                });
            }
        }

        let label = match name {
            Some(n) => n.to_string(),
            None => format!("{} -> {}", from_name, self.modes[to.index()].name),
        };
        let id = TransitionId {
            owner: self.id,
            index: self.transitions.len(),
        };
        tracing::debug!(automaton = %self.id, transition = %label, id = %id, "new transition");

        self.modes[from.index()].transitions.push(id);
        self.transitions.push(AutomatonTransition {
            id,
            from,
            to,
            name: name.map(str::to_string),
            label,
            guard: Default::default(),
            reset: Default::default(),
        });
        let idx = self.transitions.len() - 1;
        Ok(&mut self.transitions[idx])
    }

    fn check_owned(&self, mode: ModeId) -> Result<(), AutomatonError> {
        if mode.owner == self.id && mode.index() < self.modes.len() {
            Ok(())
        } else {
            Err(AutomatonError::ForeignMode {
                mode,
                automaton: self.id,
            })
        }
    }

    /// Resolve a handle (including shadowed modes). `None` for foreign handles.
    pub fn mode(&self, id: ModeId) -> Option<&AutomatonMode> {
        if id.owner != self.id {
            return None;
        }
        self.modes.get(id.index())
    }

    pub fn mode_mut(&mut self, id: ModeId) -> Option<&mut AutomatonMode> {
        if id.owner != self.id {
            return None;
        }
        self.modes.get_mut(id.index())
    }

    /// Mode currently registered under `name`.
    pub fn mode_named(&self, name: &str) -> Option<&AutomatonMode> {
        self.by_name.get(name).map(|id| &self.modes[id.index()])
    }

    pub fn mode_named_mut(&mut self, name: &str) -> Option<&mut AutomatonMode> {
        let id = *self.by_name.get(name)?;
        self.modes.get_mut(id.index())
    }

    /// Named modes in creation order; shadowed modes are skipped.
    pub fn modes(&self) -> impl Iterator<Item = &AutomatonMode> + '_ {
        self.modes
            .iter()
            .filter(move |m| self.by_name.get(&m.name) == Some(&m.id))
    }

    /// Size of the name → mode mapping.
    #[inline]
    pub fn num_modes(&self) -> usize {
        self.by_name.len()
    }

    /// All transitions in creation order.
    #[inline]
    pub fn transitions(&self) -> &[AutomatonTransition] {
        &self.transitions
    }

    pub fn transition(&self, id: TransitionId) -> Option<&AutomatonTransition> {
        if id.owner != self.id {
            return None;
        }
        self.transitions.get(id.index())
    }

    pub fn transition_mut(&mut self, id: TransitionId) -> Option<&mut AutomatonTransition> {
        if id.owner != self.id {
            return None;
        }
        self.transitions.get_mut(id.index())
    }

    /// Outgoing transitions of `mode` in creation order (empty for foreign handles).
    pub fn outgoing(&self, mode: ModeId) -> impl Iterator<Item = &AutomatonTransition> + '_ {
        self.mode(mode)
            .map(|m| m.transitions.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |t| &self.transitions[t.index()])
    }

    /// Outgoing transitions of `mode` whose guard holds at `x`.
    pub fn enabled_transitions<'a>(
        &'a self,
        mode: ModeId,
        x: &'a State,
    ) -> impl Iterator<Item = &'a AutomatonTransition> + 'a {
        self.outgoing(mode).filter(move |t| t.is_enabled(x))
    }
}
