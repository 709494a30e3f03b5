use asmgen_core::Symbol;

use super::*;

fn sym(c: char) -> Condition {
    Condition::Symbol(c as Symbol)
}

fn chain(automaton: &mut Automaton, from: StateId, word: &str, accept: i32) {
    let mut current = from;
    for c in word.chars() {
        let next = automaton.add_state(false);
        automaton.add_transition(current, next, sym(c)).unwrap();
        current = next;
    }
    automaton.set_accept(current, Some(accept));
}

#[test]
fn equivalent_leaves_are_merged() {
    let mut automaton = Automaton::new();
    chain(&mut automaton, StateId::START, "a", 1);
    chain(&mut automaton, StateId::START, "b", 1);

    let stats = reduce(&mut automaton);

    assert_eq!(stats.merged, 1);
    insta::assert_snapshot!(AutomatonPrinter::new(&automaton).dump(), @r"
    S0: 'a' → S1, 'b' → S1
    S1 (accept 1): ∅
    ");
}

#[test]
fn different_accept_values_stay_apart() {
    let mut automaton = Automaton::new();
    chain(&mut automaton, StateId::START, "a", 1);
    chain(&mut automaton, StateId::START, "b", 2);

    let stats = reduce(&mut automaton);

    assert_eq!(stats.merged, 0);
    assert_eq!(automaton.len(), 3);
}

#[test]
fn merges_cascade_backwards() {
    let mut automaton = Automaton::new();
    chain(&mut automaton, StateId::START, "ac", 1);
    chain(&mut automaton, StateId::START, "bc", 1);

    let stats = reduce(&mut automaton);

    assert_eq!(stats.merged, 2);
    insta::assert_snapshot!(AutomatonPrinter::new(&automaton).dump(), @r"
    S0: 'a' → S1, 'b' → S1
    S1: 'c' → S2
    S2 (accept 1): ∅
    ");
}

#[test]
fn reduce_is_idempotent() {
    let mut automaton = Automaton::new();
    chain(&mut automaton, StateId::START, "xy", 1);
    chain(&mut automaton, StateId::START, "zy", 1);
    chain(&mut automaton, StateId::START, "zw", 2);

    reduce(&mut automaton);
    let first = AutomatonPrinter::new(&automaton).dump();
    let stats = reduce(&mut automaton);

    assert_eq!(stats.merged, 0);
    assert_eq!(AutomatonPrinter::new(&automaton).dump(), first);
}

#[test]
fn transition_order_does_not_matter() {
    let mut automaton = Automaton::new();
    let s1 = automaton.add_state(false);
    let s2 = automaton.add_state(false);
    let end = automaton.add_state(true);
    automaton.add_transition(StateId::START, s1, sym('x')).unwrap();
    automaton.add_transition(StateId::START, s2, sym('y')).unwrap();
    automaton.add_transition(s1, end, sym('a')).unwrap();
    automaton.add_transition(s1, end, sym('b')).unwrap();
    automaton.add_transition(s2, end, sym('b')).unwrap();
    automaton.add_transition(s2, end, sym('a')).unwrap();

    let stats = reduce(&mut automaton);

    assert_eq!(stats.merged, 1);
    assert!(automaton.get_state(s2).is_none());
}

#[test]
fn start_state_survives() {
    let mut automaton = Automaton::new();
    let detached = automaton.add_state(false);
    let end = automaton.add_state(true);
    automaton.add_transition(StateId::START, end, sym('a')).unwrap();
    automaton.add_transition(detached, end, sym('a')).unwrap();

    reduce(&mut automaton);

    assert!(automaton.get_state(StateId::START).is_some());
    assert!(automaton.get_state(detached).is_none());
}
