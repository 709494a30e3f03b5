//! Union of two automata through a shared start state.
//!
//! `b`'s states (except its start) are copied into `a` under fresh ids, then
//! `b`'s start transitions are added to `a`'s start. The result accepts the
//! union of both languages and is an NFA even when both inputs are DFAs.

use std::collections::HashMap;

use asmgen_core::AcceptId;

use super::{Automaton, GraphError, StateId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// Both automata accept the empty input, with different values.
    #[error("both start states accept, with values {base:?} and {other:?}")]
    StartConflict {
        base: Option<AcceptId>,
        other: Option<AcceptId>,
    },

    /// Both start states carry a wildcard transition.
    #[error("both start states have a wildcard transition")]
    WildcardConflict { existing: StateId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Checks whether `a` and `b` can share a start state.
///
/// Everything [`merge`] can reject is detected here without touching either
/// automaton, so callers can report a conflict and keep `a`.
pub fn check_merge(a: &Automaton, b: &Automaton) -> Result<(), MergeError> {
    let (base, other) = (a.start(), b.start());

    if base.is_accepting() && other.is_accepting() && base.accept() != other.accept() {
        return Err(MergeError::StartConflict {
            base: base.accept(),
            other: other.accept(),
        });
    }

    if let (Some(existing), Some(_)) = (base.wildcard(), other.wildcard()) {
        return Err(MergeError::WildcardConflict { existing });
    }

    Ok(())
}

/// Merges `b` into `a`.
pub fn merge(a: Automaton, b: Automaton) -> Result<Automaton, MergeError> {
    check_merge(&a, &b)?;

    let mut merged = a;
    if b.start().is_accepting() {
        merged.set_accept(StateId::START, b.start().accept());
    }

    let mut correspondence = HashMap::with_capacity(b.len());
    correspondence.insert(StateId::START, StateId::START);
    for state in b.states().filter(|s| s.id() != StateId::START) {
        let id = merged.add_state(state.is_accepting());
        if state.is_accepting() {
            merged.set_accept(id, state.accept());
        }
        correspondence.insert(state.id(), id);
    }

    for state in b.states() {
        let source = corresponding(&correspondence, state.id());
        for transition in state.transitions() {
            let target = corresponding(&correspondence, transition.target);
            merged.add_transition(source, target, transition.condition)?;
        }
    }

    Ok(merged)
}

fn corresponding(table: &HashMap<StateId, StateId>, id: StateId) -> StateId {
    crate::invariants::ensure_mapped("merge", id, table.get(&id).copied())
}
