use asmgen_core::Control;

use super::*;
use crate::catalog::{StandardToken, TokenTable};
use crate::decls::{Argument, Declarations, Enumeration, Opcode};

fn declarations() -> Declarations {
    Declarations::new()
        .with_enum("reg", Enumeration::new().value("r0", 0).value("r1", 1))
        .with_opcode(Opcode::new("mov").arg(Argument::Enum("reg".into())))
        .with_opcode(Opcode::new("nop"))
}

#[test]
fn single_token_is_written_plainly() {
    let mut sequence = TokenSequence::new();
    sequence.token(4).one_of(&[9]);

    assert_eq!(sequence.symbols(), &[4, 9]);
}

#[test]
fn several_tokens_form_a_set() {
    let mut sequence = TokenSequence::new();
    sequence.one_of(&[1, 2]).one_or_more();

    assert_eq!(sequence.into_symbols(), vec![
        Control::SetOpen.symbol(),
        1,
        2,
        Control::SetClose.symbol(),
        Control::Plus.symbol(),
    ]);
}

#[test]
fn postfix_operators() {
    let mut sequence = TokenSequence::new();
    sequence.token(1).optional().token(2).zero_or_more();

    assert_eq!(sequence.symbols(), &[
        1,
        Control::Question.symbol(),
        2,
        Control::Star.symbol(),
    ]);
}

#[test]
fn arguments_resolve_to_tokens() {
    let decls = declarations();
    let table = TokenTable::from_declarations(&decls);
    let ctx = TokenContext::new(&decls, &table);

    let identifier = ctx.standard(StandardToken::Identifier);
    assert_eq!(ctx.argument(&Argument::Identifier).unwrap(), vec![identifier]);
    assert_eq!(ctx.argument(&Argument::LabelRelative).unwrap(), vec![identifier]);
    assert_eq!(ctx.argument(&Argument::Immediate).unwrap().len(), 5);

    // COMMENT, OP_MOV, OP_NOP, then the enumeration alternatives.
    assert_eq!(ctx.argument(&Argument::Enum("reg".into())).unwrap(), vec![3, 4]);
}

#[test]
fn undefined_enum() {
    let decls = declarations();
    let table = TokenTable::from_declarations(&decls);
    let ctx = TokenContext::new(&decls, &table);

    let err = ctx.argument(&Argument::Enum("cond".into())).unwrap_err();

    assert_eq!(err, TokenError::UndefinedEnum("cond".into()));
    insta::assert_snapshot!(err.to_string(), @"enumeration `cond` is not defined");
}
