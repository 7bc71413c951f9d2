//! The four callable roles a caller plugs into an automaton.
//!
//! Each role is its own type so a guard can never be passed where an invariant
//! is expected (and vice versa), even though both are `State -> bool`.

use std::fmt;

use crate::hyperrect::State;

type DynMap = dyn Fn(&State) -> State + Send + Sync;
type DynPred = dyn Fn(&State) -> bool + Send + Sync;

/// Flow of a mode: `x ↦ ẋ`, same length as `x`.
pub struct Derivative(Box<DynMap>);

impl Derivative {
    pub fn new(f: impl Fn(&State) -> State + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
    /// All-zero flow (the state does not evolve).
    pub fn zero() -> Self {
        Self::new(|x| State::zeros(x.len()))
    }
    #[inline]
    pub fn eval(&self, x: &State) -> State {
        (self.0)(x)
    }
}

/// Predicate a state must satisfy to remain in a mode.
pub struct Invariant(Box<DynPred>);

impl Invariant {
    pub fn new(f: impl Fn(&State) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
    pub fn always() -> Self {
        Self::new(|_| true)
    }
    #[inline]
    pub fn holds(&self, x: &State) -> bool {
        (self.0)(x)
    }
}

impl Default for Invariant {
    fn default() -> Self {
        Self::always()
    }
}

/// Predicate enabling a transition.
pub struct Guard(Box<DynPred>);

impl Guard {
    pub fn new(f: impl Fn(&State) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
    pub fn always() -> Self {
        Self::new(|_| true)
    }
    #[inline]
    pub fn holds(&self, x: &State) -> bool {
        (self.0)(x)
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::always()
    }
}

/// State update applied when a transition fires. May change the dimension.
pub struct Reset(Box<DynMap>);

impl Reset {
    pub fn new(f: impl Fn(&State) -> State + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }
    pub fn identity() -> Self {
        Self::new(|x| x.clone())
    }
    #[inline]
    pub fn apply(&self, x: &State) -> State {
        (self.0)(x)
    }
}

impl Default for Reset {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Derivative(..)")
    }
}
impl fmt::Debug for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invariant(..)")
    }
}
impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
impl fmt::Debug for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reset(..)")
    }
}
