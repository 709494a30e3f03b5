//! Assembler declarations: the input the token and rule catalogues are derived from.
//!
//! Mnemonics and enumeration alternatives are patterns in the character
//! alphabet, so `mov` matches itself and `r[0-7]` matches eight registers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    pub parameters: Parameters,
    /// Enumerations by name, in declaration order.
    pub enums: IndexMap<String, Enumeration>,
    pub opcodes: Vec<Opcode>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_enum(mut self, name: impl Into<String>, enumeration: Enumeration) -> Self {
        self.enums.insert(name.into(), enumeration);
        self
    }

    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcodes.push(opcode);
        self
    }
}

/// Syntax parameters of the generated assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub args_separator: char,
    pub label_postfix: char,
    pub comment_prefix: char,
    /// Pattern of the constant directive.
    pub constant_directive: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            args_separator: ',',
            label_postfix: ':',
            comment_prefix: ';',
            constant_directive: ".const".to_string(),
        }
    }
}

impl Parameters {
    pub fn args_separator(mut self, c: char) -> Self {
        self.args_separator = c;
        self
    }

    pub fn label_postfix(mut self, c: char) -> Self {
        self.label_postfix = c;
        self
    }

    pub fn comment_prefix(mut self, c: char) -> Self {
        self.comment_prefix = c;
        self
    }

    pub fn constant_directive(mut self, pattern: impl Into<String>) -> Self {
        self.constant_directive = pattern.into();
        self
    }
}

/// Alternatives of one enumeration, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enumeration(pub Vec<EnumValue>);

impl Enumeration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, pattern: impl Into<String>, value: u64) -> Self {
        self.0.push(EnumValue {
            pattern: pattern.into(),
            value,
        });
        self
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub pattern: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    /// Mnemonic pattern.
    pub mnemonic: String,
    #[serde(default)]
    pub args: Vec<Argument>,
}

impl Opcode {
    pub fn new(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, argument: Argument) -> Self {
        self.args.push(argument);
        self
    }
}

/// Kind of an opcode operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    Identifier,
    Immediate,
    LabelAbsolute,
    LabelRelative,
    /// One of the alternatives of the named enumeration.
    Enum(String),
}
