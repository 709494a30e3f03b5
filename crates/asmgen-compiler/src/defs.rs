//! Definitions fed to the automaton builders.
//!
//! A definition names a pattern and the accept value its automaton reports.
//! The action says what the back end does with a match; the engine only
//! compares actions to detect conflicting reuse of an accept value.

use asmgen_core::{AcceptId, Symbol};

/// Lexer definition: a pattern over characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDef {
    pub name: String,
    pub pattern: String,
    pub accept: AcceptId,
    pub action: TokenAction,
}

impl TokenDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, accept: AcceptId) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            accept,
            action: TokenAction::None,
        }
    }

    pub fn action(mut self, action: TokenAction) -> Self {
        self.action = action;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAction {
    /// Token carries no value.
    None,
    /// Dropped by the lexer.
    Skip,
    Unsigned { radix: u32 },
    /// Code of the quoted character.
    Character,
    Text,
    EnumValue(u64),
}

/// Parser definition: a pattern over token ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDef {
    pub name: String,
    pub symbols: Vec<Symbol>,
    pub accept: AcceptId,
    pub action: RuleAction,
}

impl RuleDef {
    pub fn new(name: impl Into<String>, symbols: Vec<Symbol>, accept: AcceptId) -> Self {
        Self {
            name: name.into(),
            symbols,
            accept,
            action: RuleAction::Skip,
        }
    }

    pub fn action(mut self, action: RuleAction) -> Self {
        self.action = action;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Emit the opcode with this index.
    Instruction { opcode: usize },
    Label,
    Address,
    Skip,
}
