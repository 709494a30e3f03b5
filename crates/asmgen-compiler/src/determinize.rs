//! Subset construction.
//!
//! DFA state `n` stands for the `n`-th NFA state set discovered, starting
//! from `{S0}`. Sets are processed in discovery order and their outgoing
//! conditions in the order they first appear among the members, so the
//! output is fully determined by the NFA's storage order.
//!
//! A set accepts when any member accepts. When members carry different
//! accept values the lowest one wins; each such decision is reported.

use std::collections::{BTreeSet, HashSet};

use asmgen_core::{AcceptId, STATE_CAPACITY, StateSet};
use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::graph::{Automaton, Condition, State, StateId, reduce};
use crate::{Error, PassResult};

/// Determinize `nfa` without names for diagnostics.
pub fn determinize(nfa: &Automaton) -> PassResult<Automaton> {
    Determinizer::new(nfa).run()
}

pub struct Determinizer<'a> {
    nfa: &'a Automaton,
    accept_names: Option<&'a IndexMap<AcceptId, String>>,
}

impl<'a> Determinizer<'a> {
    pub fn new(nfa: &'a Automaton) -> Self {
        Self {
            nfa,
            accept_names: None,
        }
    }

    /// Definition names used when reporting accept collisions.
    pub fn accept_names(mut self, names: &'a IndexMap<AcceptId, String>) -> Self {
        self.accept_names = Some(names);
        self
    }

    pub fn run(self) -> PassResult<Automaton> {
        let required = self.nfa.id_bound();
        if required > STATE_CAPACITY {
            return Err(Error::CapacityExceeded {
                required,
                capacity: STATE_CAPACITY,
            });
        }

        let mut diagnostics = Diagnostics::new();
        let mut reported = HashSet::new();
        let mut dfa = Automaton::new();
        let mut subsets = IndexSet::new();
        subsets.insert(StateSet::singleton(StateId::START.index()));

        let mut cursor = 0;
        while let Some(subset) = subsets.get_index(cursor).cloned() {
            let from = StateId::new(cursor as u32);
            self.settle_accept(&mut dfa, from, &subset, &mut reported, &mut diagnostics);

            for condition in self.conditions(&subset) {
                let destination = self.destination(&subset, condition);
                if destination.is_empty() {
                    continue;
                }
                let (index, inserted) = subsets.insert_full(destination);
                if inserted {
                    let allocated = dfa.add_state(false);
                    crate::invariants::ensure_discovery_order(allocated, index);
                }
                dfa.add_transition(from, StateId::new(index as u32), condition)?;
            }

            cursor += 1;
        }

        reduce(&mut dfa);
        Ok((dfa, diagnostics))
    }

    fn members(&self, subset: &StateSet) -> impl Iterator<Item = &'a State> {
        let nfa = self.nfa;
        subset
            .iter()
            .map(move |index| nfa.ensure_state(StateId::new(index as u32)))
    }

    /// Conditions leaving any member, in order of first appearance.
    fn conditions(&self, subset: &StateSet) -> IndexSet<Condition> {
        self.members(subset)
            .flat_map(|state| state.transitions().iter().map(|t| t.condition))
            .collect()
    }

    fn destination(&self, subset: &StateSet, condition: Condition) -> StateSet {
        self.members(subset)
            .flat_map(|state| state.targets(condition))
            .map(StateId::index)
            .collect()
    }

    fn settle_accept(
        &self,
        dfa: &mut Automaton,
        id: StateId,
        subset: &StateSet,
        reported: &mut HashSet<(AcceptId, AcceptId)>,
        diagnostics: &mut Diagnostics,
    ) {
        let accepting: Vec<_> = self.members(subset).filter(|s| s.is_accepting()).collect();
        if accepting.is_empty() {
            return;
        }

        let values: BTreeSet<AcceptId> = accepting.iter().filter_map(|s| s.accept()).collect();
        let winner = values.first().copied();
        dfa.set_accept(id, winner);

        let Some(winner) = winner else {
            return;
        };
        for &loser in values.iter().skip(1) {
            if !reported.insert((winner, loser)) {
                continue;
            }
            diagnostics
                .report(DiagnosticKind::AcceptCollision)
                .message(format!(
                    "{} wins over {}",
                    self.describe(winner),
                    self.describe(loser)
                ))
                .emit();
        }
    }

    fn describe(&self, accept: AcceptId) -> String {
        match self.accept_names.and_then(|names| names.get(&accept)) {
            Some(name) => format!("`{name}` ({accept})"),
            None => accept.to_string(),
        }
    }
}
