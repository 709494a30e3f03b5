//! Parser catalogue: one rule per opcode, then the line-level rules.

use asmgen_core::AcceptId;

use super::lexer::{StandardToken, UniqueNames};
use crate::adapter::{TokenContext, TokenError, TokenSequence};
use crate::defs::{RuleAction, RuleDef};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Rules that match a whole line without an instruction.
const STATIC_RULES: [(&str, StandardToken, RuleAction); 4] = [
    ("empty_comment", StandardToken::Comment, RuleAction::Skip),
    ("empty_newline", StandardToken::Newline, RuleAction::Skip),
    ("label", StandardToken::Label, RuleAction::Label),
    ("address", StandardToken::Address, RuleAction::Address),
];

/// Build the parser rules. Opcode `i` gets accept value `i`; opcodes naming
/// an undefined enumeration are reported and left out.
pub fn parser_rules(ctx: &TokenContext<'_>, diagnostics: &mut Diagnostics) -> Vec<RuleDef> {
    let opcodes = &ctx.declarations().opcodes;
    let mut names = UniqueNames::default();
    let mut rules = Vec::with_capacity(opcodes.len() + STATIC_RULES.len());

    for (index, opcode) in opcodes.iter().enumerate() {
        let Some(mnemonic) = ctx.mnemonic(index) else {
            continue;
        };
        let name = ctx
            .table()
            .get(mnemonic)
            .map_or_else(|| opcode.mnemonic.clone(), |t| t.name.clone());

        let mut sequence = TokenSequence::new();
        sequence.token(mnemonic);

        let mut complete = true;
        for (position, argument) in opcode.args.iter().enumerate() {
            if position > 0 {
                sequence.token(ctx.standard(StandardToken::ArgSeparator));
            }
            match ctx.argument(argument) {
                Ok(ids) => {
                    sequence.one_of(&ids);
                }
                Err(TokenError::UndefinedEnum(enum_name)) => {
                    diagnostics
                        .report(DiagnosticKind::UndefinedEnum)
                        .origin(name.clone())
                        .message(enum_name)
                        .emit();
                    complete = false;
                }
            }
        }
        if !complete {
            continue;
        }

        sequence.one_of(&[
            ctx.standard(StandardToken::Comment),
            ctx.standard(StandardToken::Newline),
        ]);

        rules.push(
            RuleDef::new(names.claim(name), sequence.into_symbols(), index as AcceptId)
                .action(RuleAction::Instruction { opcode: index }),
        );
    }

    for (offset, (name, token, action)) in STATIC_RULES.iter().enumerate() {
        let accept = (opcodes.len() + offset) as AcceptId;
        rules.push(
            RuleDef::new(names.claim(name.to_string()), vec![ctx.standard(*token)], accept)
                .action(*action),
        );
    }

    rules
}
