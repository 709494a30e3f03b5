//! Lexer catalogue.
//!
//! Token ids double as accept values, so catalogue order is priority order:
//! comments first, then mnemonics, enumeration alternatives, and the
//! standard tokens from separators down to identifiers.

use std::collections::HashSet;

use asmgen_core::AcceptId;
use asmgen_core::utils::{escape_pattern_char, to_screaming_snake_case};
use indexmap::IndexMap;

use crate::decls::{Declarations, Parameters};
use crate::defs::{TokenAction, TokenDef};

/// Tokens every generated lexer has, in catalogue order after [`StandardToken::Comment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardToken {
    Comment,
    ArgSeparator,
    Newline,
    Whitespace,
    Address,
    Label,
    ImmediateHex,
    ImmediateBin,
    ImmediateOct,
    ImmediateDec,
    ImmediateChar,
    ConstantDirective,
    Identifier,
}

impl StandardToken {
    pub const COUNT: usize = 13;

    pub const ALL: [StandardToken; Self::COUNT] = [
        Self::Comment,
        Self::ArgSeparator,
        Self::Newline,
        Self::Whitespace,
        Self::Address,
        Self::Label,
        Self::ImmediateHex,
        Self::ImmediateBin,
        Self::ImmediateOct,
        Self::ImmediateDec,
        Self::ImmediateChar,
        Self::ConstantDirective,
        Self::Identifier,
    ];

    /// Tokens an immediate operand may be written with.
    pub const IMMEDIATES: [StandardToken; 5] = [
        Self::ImmediateHex,
        Self::ImmediateBin,
        Self::ImmediateOct,
        Self::ImmediateDec,
        Self::ImmediateChar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "COMMENT",
            Self::ArgSeparator => "ARG_SEPARATOR",
            Self::Newline => "NEWLINE",
            Self::Whitespace => "WHITESPACE",
            Self::Address => "ADDRESS",
            Self::Label => "LABEL",
            Self::ImmediateHex => "IMMEDIATE_HEX",
            Self::ImmediateBin => "IMMEDIATE_BIN",
            Self::ImmediateOct => "IMMEDIATE_OCT",
            Self::ImmediateDec => "IMMEDIATE_DEC",
            Self::ImmediateChar => "IMMEDIATE_CHAR",
            Self::ConstantDirective => "CONSTANT_DIR",
            Self::Identifier => "IDENTIFIER",
        }
    }

    pub fn pattern(self, params: &Parameters) -> String {
        let postfix = escape_pattern_char(params.label_postfix);
        match self {
            Self::Comment => format!(r"{}[\t -~]*", escape_pattern_char(params.comment_prefix)),
            Self::ArgSeparator => escape_pattern_char(params.args_separator),
            Self::Newline => r"[\n\r\']".to_string(),
            Self::Whitespace => r"[ \t]+".to_string(),
            Self::Address => format!("0x[0-9a-fA-F]+{postfix}"),
            Self::Label => format!("[a-zA-Z_][0-9a-zA-Z_]*{postfix}"),
            Self::ImmediateHex => "0x[0-9a-fA-F]+".to_string(),
            Self::ImmediateBin => "0b[01]+".to_string(),
            Self::ImmediateOct => "0[0-7]+".to_string(),
            Self::ImmediateDec => "[0-9]+".to_string(),
            Self::ImmediateChar => "'[ -~]'".to_string(),
            Self::ConstantDirective => params.constant_directive.clone(),
            Self::Identifier => "[a-zA-Z_][a-zA-Z0-9_]*".to_string(),
        }
    }

    pub fn action(self) -> TokenAction {
        match self {
            Self::Whitespace => TokenAction::Skip,
            Self::Address | Self::ImmediateHex => TokenAction::Unsigned { radix: 16 },
            Self::ImmediateBin => TokenAction::Unsigned { radix: 2 },
            Self::ImmediateOct => TokenAction::Unsigned { radix: 8 },
            Self::ImmediateDec => TokenAction::Unsigned { radix: 10 },
            Self::ImmediateChar => TokenAction::Character,
            Self::Label | Self::Identifier => TokenAction::Text,
            Self::Comment | Self::ArgSeparator | Self::Newline | Self::ConstantDirective => {
                TokenAction::None
            }
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// The lexer catalogue of one set of declarations.
#[derive(Debug, Clone)]
pub struct TokenTable {
    tokens: Vec<TokenDef>,
    standard: [AcceptId; StandardToken::COUNT],
    /// Token of each opcode's mnemonic, by opcode index.
    mnemonics: Vec<AcceptId>,
    /// Tokens of each enumeration's alternatives, in declaration order.
    enums: IndexMap<String, Vec<AcceptId>>,
}

impl TokenTable {
    pub fn from_declarations(decls: &Declarations) -> Self {
        let mut builder = TableBuilder::default();
        let params = &decls.parameters;

        let comment = builder.push_standard(StandardToken::Comment, params);

        // Opcodes sharing a mnemonic share its token.
        let mut by_pattern: IndexMap<&str, AcceptId> = IndexMap::new();
        let mut mnemonics = Vec::with_capacity(decls.opcodes.len());
        for opcode in &decls.opcodes {
            let id = match by_pattern.get(opcode.mnemonic.as_str()) {
                Some(&id) => id,
                None => {
                    let name = format!("OP_{}", to_screaming_snake_case(&opcode.mnemonic));
                    let id = builder.push(name, &opcode.mnemonic, TokenAction::None);
                    by_pattern.insert(&opcode.mnemonic, id);
                    id
                }
            };
            mnemonics.push(id);
        }

        let mut enums = IndexMap::new();
        for (enum_name, enumeration) in &decls.enums {
            let prefix = to_screaming_snake_case(enum_name);
            let ids = enumeration
                .values()
                .iter()
                .map(|alt| {
                    let name = format!("{prefix}_{}", to_screaming_snake_case(&alt.pattern));
                    builder.push(name, &alt.pattern, TokenAction::EnumValue(alt.value))
                })
                .collect();
            enums.insert(enum_name.clone(), ids);
        }

        let mut standard = [comment; StandardToken::COUNT];
        for token in &StandardToken::ALL[1..] {
            standard[token.index()] = builder.push_standard(*token, params);
        }

        Self {
            tokens: builder.tokens,
            standard,
            mnemonics,
            enums,
        }
    }

    /// Token definitions in id order.
    pub fn tokens(&self) -> &[TokenDef] {
        &self.tokens
    }

    pub fn standard(&self, token: StandardToken) -> AcceptId {
        self.standard[token.index()]
    }

    /// Mnemonic token of the opcode at `index`.
    pub fn mnemonic(&self, index: usize) -> Option<AcceptId> {
        self.mnemonics.get(index).copied()
    }

    pub fn enum_tokens(&self, name: &str) -> Option<&[AcceptId]> {
        self.enums.get(name).map(Vec::as_slice)
    }

    pub fn get(&self, id: AcceptId) -> Option<&TokenDef> {
        usize::try_from(id).ok().and_then(|i| self.tokens.get(i))
    }

    /// Token names by id, for dumps and diagnostics.
    pub fn names(&self) -> IndexMap<AcceptId, String> {
        self.tokens
            .iter()
            .map(|t| (t.accept, t.name.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Default)]
struct TableBuilder {
    tokens: Vec<TokenDef>,
    names: UniqueNames,
}

impl TableBuilder {
    fn push(&mut self, name: String, pattern: &str, action: TokenAction) -> AcceptId {
        let id = self.tokens.len() as AcceptId;
        let name = self.names.claim(name);
        self.tokens
            .push(TokenDef::new(name, pattern, id).action(action));
        id
    }

    fn push_standard(&mut self, token: StandardToken, params: &Parameters) -> AcceptId {
        self.push(
            token.name().to_string(),
            &token.pattern(params),
            token.action(),
        )
    }
}

/// Hands out names, suffixing `_2`, `_3`, ... on reuse.
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub(crate) fn claim(&mut self, name: String) -> String {
        if self.taken.insert(name.clone()) {
            return name;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{name}_{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
