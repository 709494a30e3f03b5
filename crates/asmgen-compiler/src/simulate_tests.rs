use rowan::TextRange;

use crate::defs::TokenDef;
use crate::graph::merge;
use crate::pipeline::build_lexer;
use crate::simulate::{Lexeme, NoMatch, Outcome, accepts, simulate, tokenize};
use crate::test_utils::{chars, pattern};

fn lexeme(accept: i32, start: u32, end: u32) -> Lexeme {
    Lexeme {
        accept: Some(accept),
        range: TextRange::new(start.into(), end.into()),
    }
}

#[test]
fn nfa_reports_lowest_accept_value() {
    let nfa = merge(pattern("[a-z]+", 4), pattern("if", 1)).unwrap();

    assert_eq!(simulate(&nfa, &chars("if")), Outcome {
        accepting: true,
        accept: Some(1),
    });
    assert_eq!(simulate(&nfa, &chars("of")).accept, Some(4));
    assert!(!accepts(&nfa, &chars("")));
    assert!(!accepts(&nfa, &chars("i1")));
}

#[test]
fn dead_input_is_rejected() {
    let automaton = pattern("ab", 0);

    assert_eq!(simulate(&automaton, &chars("xb")), Outcome {
        accepting: false,
        accept: None,
    });
}

#[test]
fn tokenize_takes_longest_matches() {
    let tokens = [
        TokenDef::new("NUMBER", "[0-9]+", 0),
        TokenDef::new("SPACE", "[ \\t]+", 1),
        TokenDef::new("NAME", "[a-z][a-z0-9]*", 2),
    ];
    let (built, _) = build_lexer(&tokens).unwrap();

    let lexemes = tokenize(&built.dfa, "ab1  42").unwrap();

    assert_eq!(lexemes, vec![
        lexeme(2, 0, 3),
        lexeme(1, 3, 5),
        lexeme(0, 5, 7),
    ]);
}

#[test]
fn tokenize_can_match_end_of_input() {
    let tokens = [
        TokenDef::new("NEWLINE", r"[\n\']", 0),
        TokenDef::new("WORD", "[a-z]+", 1),
    ];
    let (built, _) = build_lexer(&tokens).unwrap();

    let lexemes = tokenize(&built.dfa, "ab\ncd").unwrap();

    assert_eq!(lexemes, vec![
        lexeme(1, 0, 2),
        lexeme(0, 2, 3),
        lexeme(1, 3, 5),
        lexeme(0, 5, 5),
    ]);
}

#[test]
fn tokenize_stops_at_unknown_input() {
    let (built, _) = build_lexer(&[TokenDef::new("WORD", "[a-z]+", 0)]).unwrap();

    let err = tokenize(&built.dfa, "ab!").unwrap_err();

    assert_eq!(err, NoMatch { position: 2 });
    insta::assert_snapshot!(err.to_string(), @"no token matches at offset 2");
}
