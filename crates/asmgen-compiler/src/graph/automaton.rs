//! Arena-backed automaton shared by NFAs and DFAs.
//!
//! States live in an insertion-ordered map keyed by [`StateId`]. Storage order
//! drives `reduce` scans and `remove_last_state`; ids are allocated lowest
//! free first, so an id released by `*` in the pattern compiler is the next
//! one handed out.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use asmgen_core::{AcceptId, Symbol};
use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub const START: Self = Self(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// What a transition consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    Symbol(Symbol),
    /// Taken when the state has no explicit transition for the input symbol.
    Any,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Symbol(symbol) => write!(f, "{symbol}"),
            Condition::Any => write!(f, "ANY"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub condition: Condition,
    pub target: StateId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    id: StateId,
    accepting: bool,
    accept: Option<AcceptId>,
    transitions: Vec<Transition>,
}

impl State {
    fn new(id: StateId, accepting: bool) -> Self {
        Self {
            id,
            accepting,
            accept: None,
            transitions: Vec::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Accept value, if the state is accepting and carries one.
    pub fn accept(&self) -> Option<AcceptId> {
        self.accept
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Target of the `ANY` transition, if there is one.
    pub fn wildcard(&self) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.condition == Condition::Any)
            .map(|t| t.target)
    }

    pub fn has_symbol(&self, symbol: Symbol) -> bool {
        self.transitions
            .iter()
            .any(|t| t.condition == Condition::Symbol(symbol))
    }

    /// States reached on `condition`.
    ///
    /// A symbol without an explicit transition falls back to the `ANY`
    /// transition of this state.
    pub fn targets(&self, condition: Condition) -> impl Iterator<Item = StateId> + '_ {
        let wanted = match condition {
            Condition::Symbol(symbol) if !self.has_symbol(symbol) => Condition::Any,
            other => other,
        };
        self.transitions
            .iter()
            .filter(move |t| t.condition == wanted)
            .map(|t| t.target)
    }

    /// Same acceptance and the same transition set, ignoring order.
    pub(crate) fn behaves_like(&self, other: &State) -> bool {
        self.accepting == other.accepting
            && self.accept == other.accept
            && self.transitions.len() == other.transitions.len()
            && self
                .transitions
                .iter()
                .all(|t| other.transitions.contains(t))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("{state} already has a wildcard transition to {existing}, cannot add one to {target}")]
    DuplicateWildcard {
        state: StateId,
        existing: StateId,
        target: StateId,
    },
}

#[derive(Clone, Debug)]
pub struct Automaton {
    states: IndexMap<StateId, State>,
    free: BTreeSet<u32>,
    next_id: u32,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Automaton with a single, non-accepting start state.
    pub fn new() -> Self {
        let mut states = IndexMap::new();
        states.insert(StateId::START, State::new(StateId::START, false));
        Self {
            states,
            free: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Allocates the lowest unused id.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let raw = self.free.pop_first().unwrap_or_else(|| {
            let raw = self.next_id;
            self.next_id += 1;
            raw
        });
        let id = StateId(raw);
        self.states.insert(id, State::new(id, accepting));
        id
    }

    /// Removes the most recently added state. The start state is never removed.
    ///
    /// Transitions into the removed state are left alone; callers redirect them.
    pub fn remove_last_state(&mut self) -> Option<State> {
        if self.states.len() <= 1 {
            return None;
        }
        let (id, state) = self.states.pop()?;
        self.free.insert(id.0);
        Some(state)
    }

    /// Removes `id`, keeping the storage order of the remaining states.
    pub fn remove_state(&mut self, id: StateId) -> Option<State> {
        if id == StateId::START {
            return None;
        }
        let state = self.states.shift_remove(&id)?;
        self.free.insert(id.0);
        Some(state)
    }

    /// Adds `state --condition--> target` unless it already exists.
    ///
    /// Returns whether a transition was added.
    pub fn add_transition(
        &mut self,
        state: StateId,
        target: StateId,
        condition: Condition,
    ) -> Result<bool, GraphError> {
        if let Condition::Symbol(symbol) = condition {
            crate::invariants::ensure_transition_symbol(symbol);
        }
        self.ensure_state(target);

        let source = self.ensure_state_mut(state);
        let transition = Transition { condition, target };
        if source.transitions.contains(&transition) {
            return Ok(false);
        }
        if condition == Condition::Any
            && let Some(existing) = source.wildcard()
        {
            return Err(GraphError::DuplicateWildcard {
                state,
                existing,
                target,
            });
        }

        source.transitions.push(transition);
        Ok(true)
    }

    pub fn get_state(&self, id: StateId) -> Option<&State> {
        self.states.get(&id)
    }

    pub(crate) fn get_state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(&id)
    }

    pub fn get_transitions(&self, id: StateId) -> Option<&[Transition]> {
        self.get_state(id).map(State::transitions)
    }

    pub fn start(&self) -> &State {
        self.ensure_state(StateId::START)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Marks `id` accepting with `accept`.
    pub fn set_accept(&mut self, id: StateId, accept: Option<AcceptId>) {
        let state = self.ensure_state_mut(id);
        state.accepting = true;
        state.accept = accept;
    }

    /// Points every transition that targets `from` at `to`.
    pub fn redirect(&mut self, from: StateId, to: StateId) {
        for state in self.states.values_mut() {
            let mut changed = false;
            for transition in &mut state.transitions {
                if transition.target == from {
                    transition.target = to;
                    changed = true;
                }
            }
            if changed {
                let mut seen = HashSet::new();
                state.transitions.retain(|t| seen.insert(*t));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States in storage order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.keys().copied()
    }

    /// One past the highest id in use.
    pub fn id_bound(&self) -> usize {
        self.states
            .keys()
            .map(|id| id.index() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn transition_count(&self) -> usize {
        self.states().map(|s| s.transitions.len()).sum()
    }

    /// No state has two transitions on the same condition.
    pub fn is_deterministic(&self) -> bool {
        self.states().all(|state| {
            let mut seen = HashSet::new();
            state.transitions.iter().all(|t| seen.insert(t.condition))
        })
    }

    /// Accept values carried by accepting states.
    pub fn accept_values(&self) -> BTreeSet<AcceptId> {
        self.states().filter_map(State::accept).collect()
    }
}
