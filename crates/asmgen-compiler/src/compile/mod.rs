//! Pattern compiler: one symbol sequence to one NFA fragment.
//!
//! The compiler is alphabet-agnostic. Characters and token ids reach it as
//! the same integer symbols, operators as negative control codes.

mod error;
mod pattern;


pub use error::{CompileError, Feature};
pub use pattern::compile;
