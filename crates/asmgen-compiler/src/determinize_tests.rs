use asmgen_core::STATE_CAPACITY;
use indexmap::IndexMap;

use crate::Error;
use crate::determinize::{Determinizer, determinize};
use crate::graph::{Automaton, Condition, StateId, merge, reduce};
use crate::simulate::simulate;
use crate::test_utils::{all_strings, chars, dump, pattern};

#[test]
fn deterministic_input_keeps_its_shape() {
    let (dfa, diagnostics) = determinize(&pattern("ab?c", 7)).unwrap();

    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(dump(&dfa), @r"
    S0: 'a' → S1
    S1: 'b' → S2, 'c' → S3
    S2: 'c' → S3
    S3 (accept 7): ∅
    ");
}

#[test]
fn shared_prefix_becomes_one_state() {
    let nfa = merge(pattern("ab", 0), pattern("ac", 1)).unwrap();

    let (dfa, _) = determinize(&nfa).unwrap();

    insta::assert_snapshot!(dump(&dfa), @r"
    S0: 'a' → S1
    S1: 'b' → S2, 'c' → S3
    S2 (accept 0): ∅
    S3 (accept 1): ∅
    ");
}

#[test]
fn lowest_accept_value_wins() {
    let nfa = merge(pattern("x", 3), pattern("[xy]", 7)).unwrap();

    let (dfa, diagnostics) = determinize(&nfa).unwrap();

    assert_eq!(simulate(&dfa, &chars("x")).accept, Some(3));
    assert_eq!(simulate(&dfa, &chars("y")).accept, Some(7));
    insta::assert_snapshot!(diagnostics.render(), @"info: accept values collide: 3 wins over 7");
}

#[test]
fn identical_patterns_collapse_to_first() {
    let nfa = merge(pattern("a", 1), pattern("a", 2)).unwrap();
    let names: IndexMap<_, _> = [(1, "A".to_string()), (2, "B".to_string())]
        .into_iter()
        .collect();

    let (dfa, diagnostics) = Determinizer::new(&nfa).accept_names(&names).run().unwrap();

    insta::assert_snapshot!(dump(&dfa), @r"
    S0: 'a' → S1
    S1 (accept 1): ∅
    ");
    insta::assert_snapshot!(diagnostics.render(), @"info: accept values collide: `A` (1) wins over `B` (2)");
}

#[test]
fn collisions_are_reported_once() {
    let nfa = merge(pattern("a+", 1), pattern("a+", 2)).unwrap();

    let (_, diagnostics) = determinize(&nfa).unwrap();

    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn explicit_symbol_overrides_wildcard() {
    let mut nfa = Automaton::new();
    let any = nfa.add_state(false);
    let a = nfa.add_state(false);
    nfa.set_accept(any, Some(5));
    nfa.set_accept(a, Some(2));
    nfa.add_transition(StateId::START, any, Condition::Any).unwrap();
    nfa.add_transition(StateId::START, a, Condition::Symbol('a' as i32))
        .unwrap();

    let (dfa, _) = determinize(&nfa).unwrap();

    insta::assert_snapshot!(dump(&dfa), @r"
    S0: ANY → S1, 'a' → S2
    S1 (accept 5): ∅
    S2 (accept 2): ∅
    ");
    assert_eq!(simulate(&dfa, &chars("a")).accept, Some(2));
    assert_eq!(simulate(&dfa, &chars("z")).accept, Some(5));
}

#[test]
fn output_is_deterministic_and_equivalent() {
    let nfa = [
        pattern("ab+c", 0),
        pattern("a[bc]*", 1),
        pattern("b?c", 2),
        pattern("[a-c]+", 3),
    ]
    .into_iter()
    .try_fold(Automaton::new(), merge)
    .unwrap();

    let (dfa, _) = determinize(&nfa).unwrap();

    assert!(dfa.is_deterministic());
    for input in all_strings(&['a', 'b', 'c'], 5) {
        let input = chars(&input);
        assert_eq!(simulate(&nfa, &input), simulate(&dfa, &input));
    }
}

#[test]
fn result_is_already_reduced() {
    let nfa = merge(pattern("ab", 0), pattern("cb", 0)).unwrap();

    let (mut dfa, _) = determinize(&nfa).unwrap();

    assert_eq!(reduce(&mut dfa).merged, 0);
    insta::assert_snapshot!(dump(&dfa), @r"
    S0: 'a' → S1, 'c' → S1
    S1: 'b' → S3
    S3 (accept 0): ∅
    ");
}

#[test]
fn capacity_boundary() {
    let mut nfa = Automaton::new();
    for _ in 1..STATE_CAPACITY {
        nfa.add_state(false);
    }
    assert!(determinize(&nfa).is_ok());

    nfa.add_state(false);
    let err = determinize(&nfa).unwrap_err();

    assert!(matches!(
        err,
        Error::CapacityExceeded {
            required: 1025,
            capacity: 1024,
        }
    ));
    insta::assert_snapshot!(err.to_string(), @"automaton needs 1025 states, at most 1024 are supported");
}
