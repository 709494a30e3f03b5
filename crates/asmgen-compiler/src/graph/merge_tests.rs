use asmgen_core::{AcceptId, Symbol};

use super::*;
use crate::simulate::simulate;

fn sym(c: char) -> Condition {
    Condition::Symbol(c as Symbol)
}

/// Automaton accepting exactly `word` with `accept`.
fn word(word: &str, accept: AcceptId) -> Automaton {
    let mut automaton = Automaton::new();
    let mut current = StateId::START;
    for c in word.chars() {
        let next = automaton.add_state(false);
        automaton.add_transition(current, next, sym(c)).unwrap();
        current = next;
    }
    automaton.set_accept(current, Some(accept));
    automaton
}

fn symbols(input: &str) -> Vec<Symbol> {
    input.chars().map(|c| c as Symbol).collect()
}

#[test]
fn merge_shares_start_state() {
    let merged = merge(word("a", 1), word("b", 2)).unwrap();

    insta::assert_snapshot!(AutomatonPrinter::new(&merged).dump(), @r"
    S0: 'a' → S1, 'b' → S2
    S1 (accept 1): ∅
    S2 (accept 2): ∅
    ");
}

#[test]
fn merge_remaps_loops_on_start() {
    let mut b = word("y", 2);
    b.add_transition(StateId::START, StateId::START, sym('x'))
        .unwrap();

    let merged = merge(word("a", 1), b).unwrap();

    insta::assert_snapshot!(AutomatonPrinter::new(&merged).dump(), @r"
    S0: 'a' → S1, 'y' → S2, 'x' → S0
    S1 (accept 1): ∅
    S2 (accept 2): ∅
    ");
}

#[test]
fn merge_rejects_conflicting_empty_matches() {
    let err = merge(word("", 1), word("", 2)).unwrap_err();

    assert_eq!(
        err,
        MergeError::StartConflict {
            base: Some(1),
            other: Some(2),
        }
    );
}

#[test]
fn merge_accepts_identical_empty_matches() {
    let merged = merge(word("", 1), word("", 1)).unwrap();

    assert_eq!(merged.start().accept(), Some(1));
}

#[test]
fn merge_takes_accepting_start_from_b() {
    let merged = merge(word("a", 1), word("", 5)).unwrap();

    assert!(merged.start().is_accepting());
    assert_eq!(merged.start().accept(), Some(5));
}

#[test]
fn merge_rejects_two_start_wildcards() {
    let mut a = word("a", 1);
    let a_any = a.add_state(true);
    a.add_transition(StateId::START, a_any, Condition::Any)
        .unwrap();

    let mut b = word("b", 2);
    let b_any = b.add_state(true);
    b.add_transition(StateId::START, b_any, Condition::Any)
        .unwrap();

    assert!(check_merge(&a, &b).is_err());
    assert_eq!(
        merge(a, b).unwrap_err(),
        MergeError::WildcardConflict { existing: a_any }
    );
}

#[test]
fn merge_is_associative_on_languages() {
    let left = merge(merge(word("ab", 1), word("ac", 2)).unwrap(), word("b", 3)).unwrap();
    let right = merge(word("ab", 1), merge(word("ac", 2), word("b", 3)).unwrap()).unwrap();

    for input in ["", "a", "ab", "ac", "b", "bc", "abc"] {
        assert_eq!(
            simulate(&left, &symbols(input)),
            simulate(&right, &symbols(input)),
            "input {input:?}"
        );
    }
}
