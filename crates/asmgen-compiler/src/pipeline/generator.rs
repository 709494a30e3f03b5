use crate::adapter::TokenContext;
use crate::catalog::{TokenTable, parser_rules};
use crate::decls::Declarations;
use crate::defs::RuleDef;
use crate::diagnostics::Diagnostics;
use crate::{Error, PassResult};

use super::{Built, Stage, build_lexer, build_parser};

/// Catalogues and automata for one set of declarations.
#[derive(Debug, Clone)]
pub struct Generated {
    pub tokens: TokenTable,
    pub rules: Vec<RuleDef>,
    pub lexer: Built,
    pub parser: Built,
}

/// Builds the lexer and the parser of an assembler.
///
/// The lexer is built first; its token ids are the parser's alphabet.
pub struct Generator<'a> {
    decls: &'a Declarations,
}

impl<'a> Generator<'a> {
    pub fn new(decls: &'a Declarations) -> Self {
        Self { decls }
    }

    pub fn generate(&self) -> PassResult<Generated> {
        let tokens = TokenTable::from_declarations(self.decls);
        let (lexer, mut diagnostics) = build_lexer(tokens.tokens())?;

        let ctx = TokenContext::new(self.decls, &tokens);
        let mut rule_diagnostics = Diagnostics::new();
        let rules = parser_rules(&ctx, &mut rule_diagnostics);
        diagnostics.extend(rule_diagnostics);

        let (parser, parser_diagnostics) = match build_parser(&rules) {
            Ok(built) => built,
            Err(Error::Build {
                stage,
                diagnostics: failed,
            }) => {
                diagnostics.extend(failed);
                return Err(Error::Build { stage, diagnostics });
            }
            Err(err) => return Err(err),
        };
        diagnostics.extend(parser_diagnostics);

        if diagnostics.has_errors() {
            return Err(Error::Build {
                stage: Stage::Parser,
                diagnostics,
            });
        }

        Ok((
            Generated {
                tokens,
                rules,
                lexer,
                parser,
            },
            diagnostics,
        ))
    }
}
