//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use asmgen_core::{Symbol, is_literal};

use crate::graph::{Automaton, State, StateId};

impl Automaton {
    pub(crate) fn ensure_state(&self, id: StateId) -> &State {
        self.get_state(id).unwrap_or_else(|| {
            panic!("Automaton: state {id} not found (transitions must target existing states)")
        })
    }

    pub(crate) fn ensure_state_mut(&mut self, id: StateId) -> &mut State {
        self.get_state_mut(id).unwrap_or_else(|| {
            panic!("Automaton: state {id} not found (transitions must target existing states)")
        })
    }
}

pub(crate) fn ensure_transition_symbol(symbol: Symbol) {
    if !is_literal(symbol) {
        panic!(
            "Automaton: control code {symbol} used as a transition condition \
             (only the pattern compiler interprets control codes)"
        );
    }
}

pub(crate) fn ensure_mapped(table_name: &str, from: StateId, to: Option<StateId>) -> StateId {
    to.unwrap_or_else(|| {
        panic!("{table_name}: {from} has no counterpart (every copied state must be registered)")
    })
}

pub(crate) fn ensure_discovery_order(allocated: StateId, discovered: usize) {
    if allocated.index() != discovered {
        panic!(
            "Determinizer: allocated {allocated} for subset #{discovered} \
             (DFA ids must follow discovery order)"
        );
    }
}

pub(crate) fn ensure_removed(expected: StateId, removed: Option<StateId>) {
    if removed != Some(expected) {
        panic!("PatternBuilder: expected to remove {expected}, removed {removed:?}");
    }
}
