//! Run automata over input.
//!
//! Simulation follows every branch, so it works on NFAs and DFAs alike and
//! is how tests compare the two.

use std::collections::BTreeSet;

use asmgen_core::{AcceptId, END_OF_INPUT, Symbol};
use rowan::TextRange;

use crate::graph::{Automaton, Condition, StateId};

/// Result of running an automaton over a whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub accepting: bool,
    /// Lowest accept value among the accepting states reached.
    pub accept: Option<AcceptId>,
}

impl Outcome {
    const REJECTED: Outcome = Outcome {
        accepting: false,
        accept: None,
    };
}

/// Feed `input` from the start state and report where it ends up.
pub fn simulate(automaton: &Automaton, input: &[Symbol]) -> Outcome {
    let mut current = BTreeSet::from([StateId::START]);
    for &symbol in input {
        current = step(automaton, &current, symbol);
        if current.is_empty() {
            return Outcome::REJECTED;
        }
    }
    outcome(automaton, &current)
}

pub fn accepts(automaton: &Automaton, input: &[Symbol]) -> bool {
    simulate(automaton, input).accepting
}

fn step(automaton: &Automaton, from: &BTreeSet<StateId>, symbol: Symbol) -> BTreeSet<StateId> {
    from.iter()
        .filter_map(|&id| automaton.get_state(id))
        .flat_map(|state| state.targets(Condition::Symbol(symbol)))
        .collect()
}

fn outcome(automaton: &Automaton, states: &BTreeSet<StateId>) -> Outcome {
    let mut accepting = false;
    let mut accept: Option<AcceptId> = None;
    for state in states.iter().filter_map(|&id| automaton.get_state(id)) {
        if !state.is_accepting() {
            continue;
        }
        accepting = true;
        if let Some(value) = state.accept() {
            accept = Some(accept.map_or(value, |best| best.min(value)));
        }
    }
    Outcome { accepting, accept }
}

/// A token recognized by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub accept: Option<AcceptId>,
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no token matches at offset {position}")]
pub struct NoMatch {
    pub position: usize,
}

/// Split `input` into the longest matches of `automaton`, the way a
/// generated lexer would. The end of input is offered as [`END_OF_INPUT`]
/// once, so patterns such as `[\n\']` can match it.
pub fn tokenize(automaton: &Automaton, input: &str) -> Result<Vec<Lexeme>, NoMatch> {
    let mut symbols: Vec<(usize, Symbol)> = input
        .char_indices()
        .map(|(offset, c)| (offset, c as Symbol))
        .collect();
    symbols.push((input.len(), END_OF_INPUT));

    let mut lexemes = Vec::new();
    let mut start = 0;
    while start < symbols.len() {
        let Some((end, accept)) = longest_match(automaton, &symbols[start..]) else {
            // Nothing left to match but the end of input.
            if start == symbols.len() - 1 {
                break;
            }
            return Err(NoMatch {
                position: symbols[start].0,
            });
        };

        let from = symbols[start].0;
        let to = symbols.get(start + end).map_or(input.len(), |s| s.0);
        lexemes.push(Lexeme {
            accept,
            range: TextRange::new((from as u32).into(), (to as u32).into()),
        });
        start += end;
    }
    Ok(lexemes)
}

/// Length and accept value of the longest non-empty accepted prefix.
fn longest_match(
    automaton: &Automaton,
    symbols: &[(usize, Symbol)],
) -> Option<(usize, Option<AcceptId>)> {
    let mut current = BTreeSet::from([StateId::START]);
    let mut best = None;
    for (consumed, &(_, symbol)) in symbols.iter().enumerate() {
        current = step(automaton, &current, symbol);
        if current.is_empty() {
            break;
        }
        let outcome = outcome(automaton, &current);
        if outcome.accepting {
            best = Some((consumed + 1, outcome.accept));
        }
    }
    best
}
