use asmgen_core::Control;
use rowan::TextRange;

use super::*;

fn symbols(pattern: &str) -> Vec<i32> {
    to_symbols(pattern).unwrap().symbols().to_vec()
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn literals_are_character_codes() {
    assert_eq!(symbols("ab 1"), vec![97, 98, 32, 49]);
    assert_eq!(symbols("'"), vec![39]);
}

#[test]
fn escapes() {
    assert_eq!(symbols(r"\n\t\r"), vec![10, 9, 13]);
    assert_eq!(symbols(r"\a\b\f\v"), vec![7, 8, 12, 11]);
    assert_eq!(symbols(r"\x41\x7"), vec![65, 7]);
    assert_eq!(symbols(r"\101\0"), vec![65, 0]);
    assert_eq!(symbols(r"\+\\\["), vec![43, 92, 91]);
}

#[test]
fn escaped_quote_is_end_of_input() {
    assert_eq!(symbols(r"[\n\']"), vec![
        Control::SetOpen.symbol(),
        10,
        -1,
        Control::SetClose.symbol(),
    ]);
}

#[test]
fn operators_become_control_codes() {
    assert_eq!(symbols("a+b*c?"), vec![
        97,
        Control::Plus.symbol(),
        98,
        Control::Star.symbol(),
        99,
        Control::Question.symbol(),
    ]);
    assert_eq!(symbols("(|)"), vec![
        Control::GroupOpen.symbol(),
        Control::Alternation.symbol(),
        Control::GroupClose.symbol(),
    ]);
}

#[test]
fn minus_is_a_range_only_inside_a_set() {
    assert_eq!(symbols("a-b"), vec![97, 45, 98]);
    assert_eq!(symbols("[a-b]"), vec![
        Control::SetOpen.symbol(),
        97,
        Control::Range.symbol(),
        98,
        Control::SetClose.symbol(),
    ]);
    assert_eq!(symbols(r"[\-a]"), vec![
        Control::SetOpen.symbol(),
        45,
        97,
        Control::SetClose.symbol(),
    ]);
}

#[test]
fn caret_negates_only_right_after_open() {
    assert_eq!(symbols("[^a]"), vec![
        Control::SetOpen.symbol(),
        Control::Negate.symbol(),
        97,
        Control::SetClose.symbol(),
    ]);
    assert_eq!(symbols("[a^]"), vec![
        Control::SetOpen.symbol(),
        97,
        94,
        Control::SetClose.symbol(),
    ]);
    assert_eq!(symbols("a^"), vec![97, 94]);
}

#[test]
fn symbols_keep_their_text_range() {
    let parsed = to_symbols(r"a\nb").unwrap();

    assert_eq!(parsed.range(0), range(0, 1));
    assert_eq!(parsed.range(1), range(1, 3));
    assert_eq!(parsed.range(2), range(3, 4));
    assert_eq!(parsed.range(3), range(4, 4));
}

#[test]
fn unknown_escape() {
    let err = to_symbols(r"a\qb").unwrap_err();

    assert_eq!(err, PatternError::InvalidEscape { range: range(1, 3) });
    insta::assert_snapshot!(err.to_string(), @"invalid escape sequence");
}

#[test]
fn trailing_backslash() {
    let err = to_symbols("ab\\").unwrap_err();

    assert_eq!(err, PatternError::InvalidEscape { range: range(2, 3) });
}

#[test]
fn non_printable_characters_are_rejected() {
    let err = to_symbols("a\tb").unwrap_err();
    assert_eq!(
        err,
        PatternError::IllegalCharacter {
            ch: '\t',
            range: range(1, 2),
        }
    );

    let err = to_symbols("aé").unwrap_err();
    assert_eq!(err.range(), range(1, 3));
    insta::assert_snapshot!(err.to_string(), @"illegal character 'é' in pattern");
}

#[test]
fn operator_characters_are_not_literals() {
    assert_eq!(symbols("+*?[]-^()|"), vec![
        Control::Plus.symbol(),
        Control::Star.symbol(),
        Control::Question.symbol(),
        Control::SetOpen.symbol(),
        Control::SetClose.symbol(),
        45,
        94,
        Control::GroupOpen.symbol(),
        Control::GroupClose.symbol(),
        Control::Alternation.symbol(),
    ]);
    assert_eq!(symbols("[^-]"), vec![
        Control::SetOpen.symbol(),
        Control::Negate.symbol(),
        Control::Range.symbol(),
        Control::SetClose.symbol(),
    ]);
}
