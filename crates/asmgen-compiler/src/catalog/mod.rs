//! Standard catalogues derived from declarations.
//!
//! - `lexer`: token definitions, ids in priority order
//! - `parser`: one rule per opcode plus the line-level rules

mod lexer;
mod parser;


pub use lexer::{StandardToken, TokenTable};
pub use parser::parser_rules;
