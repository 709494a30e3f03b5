//! State merging by repeated pairwise comparison.
//!
//! Two states are merged when they agree on acceptance and have identical
//! transition sets. The scan restarts from the beginning after every merge,
//! because redirecting transitions can make further pairs equal. This is a
//! fixpoint, not Hopcroft minimization: states that are equivalent only
//! through a cycle are kept apart.

use super::{Automaton, StateId};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReduceStats {
    /// States removed by merging into an equivalent one.
    pub merged: usize,
}

pub fn reduce(automaton: &mut Automaton) -> ReduceStats {
    let mut stats = ReduceStats::default();

    while let Some((keep, drop)) = find_equivalent_pair(automaton) {
        automaton.redirect(drop, keep);
        automaton.remove_state(drop);
        stats.merged += 1;
    }

    stats
}

/// First equivalent pair in storage order, lower id first.
fn find_equivalent_pair(automaton: &Automaton) -> Option<(StateId, StateId)> {
    let states: Vec<_> = automaton.states().collect();

    for (i, first) in states.iter().enumerate() {
        for second in &states[i + 1..] {
            if first.behaves_like(second) {
                let (a, b) = (first.id(), second.id());
                return Some((a.min(b), a.max(b)));
            }
        }
    }

    None
}
