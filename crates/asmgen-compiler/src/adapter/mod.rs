//! Alphabet adapters: turn definitions into symbol sequences for the pattern compiler.
//!
//! - `chars`: pattern text over characters, for the lexer
//! - `tokens`: token id sequences, for the parser

mod chars;
mod tokens;

#[cfg(test)]
mod chars_tests;
#[cfg(test)]
mod tokens_tests;

pub use chars::{PatternError, PatternSymbols, to_symbols};
pub use tokens::{TokenContext, TokenError, TokenSequence};
