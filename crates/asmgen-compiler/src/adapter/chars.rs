//! Character adapter: pattern text to symbols.
//!
//! Escapes decode to literal character codes, unescaped operator characters
//! to control codes. `-` is a range only inside a set and `^` a negation only
//! right after `[`; everywhere else both are ordinary characters. `\'`
//! stands for end of input.
//!
//! Raw pattern characters must be printable ASCII. Every symbol keeps the
//! byte range it was read from, so compile errors can point into the text.

use std::ops::Range;

use asmgen_core::{Control, END_OF_INPUT, Symbol};
use logos::Logos;
use rowan::{TextRange, TextSize};

use crate::diagnostics::DiagnosticKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum PatternToken {
    #[regex(r"\\[ntrabfv]")]
    ControlEscape,

    #[regex(r"\\x[0-9a-fA-F]{1,2}")]
    HexEscape,

    #[regex(r"\\[0-3][0-7]{0,2}")]
    OctalEscape,

    #[token(r"\'")]
    EndOfInput,

    /// Backslash before punctuation.
    #[regex(r"\\[ -&(-/:-@\[-`{-~]")]
    EscapedChar,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("?")]
    Question,

    #[token("[")]
    SetOpen,

    #[token("]")]
    SetClose,

    #[token("-")]
    Minus,

    #[token("^")]
    Caret,

    #[token("(")]
    GroupOpen,

    #[token(")")]
    GroupClose,

    #[token("|")]
    Pipe,

    /// Printable ASCII except backslash.
    #[regex(r"[ -\[\]-~]", priority = 1)]
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("illegal character {ch:?} in pattern")]
    IllegalCharacter { ch: char, range: TextRange },

    #[error("invalid escape sequence")]
    InvalidEscape { range: TextRange },
}

impl PatternError {
    pub fn range(&self) -> TextRange {
        match self {
            Self::IllegalCharacter { range, .. } | Self::InvalidEscape { range } => *range,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::IllegalCharacter { .. } => DiagnosticKind::IllegalCharacter,
            Self::InvalidEscape { .. } => DiagnosticKind::InvalidEscape,
        }
    }

    /// Detail for the kind's message template, if the kind takes one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::IllegalCharacter { ch, .. } => Some(format!("{ch:?}")),
            Self::InvalidEscape { .. } => None,
        }
    }
}

/// Symbols of one pattern with the text range of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSymbols {
    symbols: Vec<Symbol>,
    ranges: Vec<TextRange>,
    end: TextSize,
}

impl PatternSymbols {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Text range of the symbol at `position`; past the end, an empty range at the end of the text.
    pub fn range(&self, position: usize) -> TextRange {
        self.ranges
            .get(position)
            .copied()
            .unwrap_or_else(|| TextRange::empty(self.end))
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Translate pattern text into symbols.
pub fn to_symbols(pattern: &str) -> Result<PatternSymbols, PatternError> {
    let mut symbols = Vec::new();
    let mut ranges = Vec::new();
    let mut lexer = PatternToken::lexer(pattern);
    let mut in_set = false;
    let mut set_just_opened = false;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let Ok(token) = token else {
            return Err(lex_error(pattern, span.start));
        };

        let opened_before = set_just_opened;
        set_just_opened = false;

        let symbol = match token {
            PatternToken::ControlEscape => control_escape(slice),
            PatternToken::HexEscape => i32::from_str_radix(&slice[2..], 16).map_err(|_| {
                PatternError::InvalidEscape {
                    range: range_to_text_range(span.clone()),
                }
            })?,
            PatternToken::OctalEscape => i32::from_str_radix(&slice[1..], 8).map_err(|_| {
                PatternError::InvalidEscape {
                    range: range_to_text_range(span.clone()),
                }
            })?,
            PatternToken::EndOfInput => END_OF_INPUT,
            PatternToken::EscapedChar | PatternToken::Literal => {
                let escaped = token == PatternToken::EscapedChar;
                let c = slice.chars().nth(usize::from(escaped)).unwrap_or('\\');
                c as Symbol
            }
            PatternToken::Plus => Control::Plus.symbol(),
            PatternToken::Star => Control::Star.symbol(),
            PatternToken::Question => Control::Question.symbol(),
            PatternToken::SetOpen => {
                in_set = true;
                set_just_opened = true;
                Control::SetOpen.symbol()
            }
            PatternToken::SetClose => {
                in_set = false;
                Control::SetClose.symbol()
            }
            PatternToken::Minus if in_set => Control::Range.symbol(),
            PatternToken::Minus => '-' as Symbol,
            PatternToken::Caret if opened_before => Control::Negate.symbol(),
            PatternToken::Caret => '^' as Symbol,
            PatternToken::GroupOpen => Control::GroupOpen.symbol(),
            PatternToken::GroupClose => Control::GroupClose.symbol(),
            PatternToken::Pipe => Control::Alternation.symbol(),
        };

        symbols.push(symbol);
        ranges.push(range_to_text_range(span));
    }

    Ok(PatternSymbols {
        symbols,
        ranges,
        end: TextSize::of(pattern),
    })
}

fn control_escape(slice: &str) -> Symbol {
    match slice.as_bytes().get(1) {
        Some(b'n') => 0x0a,
        Some(b't') => 0x09,
        Some(b'r') => 0x0d,
        Some(b'a') => 0x07,
        Some(b'b') => 0x08,
        Some(b'f') => 0x0c,
        _ => 0x0b,
    }
}

/// Classify the text logos could not read at `start`.
fn lex_error(pattern: &str, start: usize) -> PatternError {
    let mut chars = pattern[start..].chars();
    let first = chars.next().unwrap_or('\\');
    if first == '\\' {
        let escaped_len = chars.next().map_or(0, char::len_utf8);
        return PatternError::InvalidEscape {
            range: range_to_text_range(start..start + 1 + escaped_len),
        };
    }
    PatternError::IllegalCharacter {
        ch: first,
        range: range_to_text_range(start..start + first.len_utf8()),
    }
}
