//! Token adapter: rule symbol sequences over token ids.

use asmgen_core::{AcceptId, Control, Symbol};

use crate::catalog::{StandardToken, TokenTable};
use crate::decls::{Argument, Declarations};

/// Builder for the symbols of one parser rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    symbols: Vec<Symbol>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&mut self, id: AcceptId) -> &mut Self {
        self.symbols.push(id);
        self
    }

    /// Any one of `ids`. A single id is written as a plain token.
    pub fn one_of(&mut self, ids: &[AcceptId]) -> &mut Self {
        if let [id] = ids {
            return self.token(*id);
        }
        self.symbols.push(Control::SetOpen.symbol());
        self.symbols.extend_from_slice(ids);
        self.symbols.push(Control::SetClose.symbol());
        self
    }

    pub fn optional(&mut self) -> &mut Self {
        self.symbols.push(Control::Question.symbol());
        self
    }

    pub fn one_or_more(&mut self) -> &mut Self {
        self.symbols.push(Control::Plus.symbol());
        self
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.symbols.push(Control::Star.symbol());
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("enumeration `{0}` is not defined")]
    UndefinedEnum(String),
}

/// Read-only view used to resolve declarations into token ids.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    decls: &'a Declarations,
    table: &'a TokenTable,
}

impl<'a> TokenContext<'a> {
    pub fn new(decls: &'a Declarations, table: &'a TokenTable) -> Self {
        Self { decls, table }
    }

    pub fn declarations(&self) -> &'a Declarations {
        self.decls
    }

    pub fn table(&self) -> &'a TokenTable {
        self.table
    }

    pub fn standard(&self, token: StandardToken) -> AcceptId {
        self.table.standard(token)
    }

    pub fn mnemonic(&self, index: usize) -> Option<AcceptId> {
        self.table.mnemonic(index)
    }

    /// Tokens an operand of this kind may be written with.
    pub fn argument(&self, argument: &Argument) -> Result<Vec<AcceptId>, TokenError> {
        match argument {
            Argument::Identifier | Argument::LabelAbsolute | Argument::LabelRelative => {
                Ok(vec![self.standard(StandardToken::Identifier)])
            }
            Argument::Immediate => Ok(StandardToken::IMMEDIATES
                .iter()
                .map(|&token| self.standard(token))
                .collect()),
            Argument::Enum(name) => self
                .table
                .enum_tokens(name)
                .map(<[AcceptId]>::to_vec)
                .ok_or_else(|| TokenError::UndefinedEnum(name.clone())),
        }
    }
}
