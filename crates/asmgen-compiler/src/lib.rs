//! asmgen compiler: automaton construction and minimization for generated assemblers.
//!
//! Definitions flow through these stages:
//! - `adapter` - pattern text or token sequences to symbols
//! - `compile` - symbols to one NFA fragment per definition
//! - `graph` - the automaton, merge into one NFA, reduce, dumps
//! - `determinize` - subset construction to a DFA
//! - `pipeline` - the whole build for a lexer or parser, with validation
//! - `catalog` - the standard token and rule lists derived from declarations
//!
//! # Example
//!
//! ```
//! use asmgen_compiler::defs::TokenDef;
//! use asmgen_compiler::pipeline::build_lexer;
//! use asmgen_compiler::simulate::accepts;
//!
//! let tokens = [TokenDef::new("NUMBER", "[0-9]+", 0)];
//! let (built, _diagnostics) = build_lexer(&tokens).expect("valid patterns");
//! assert!(accepts(&built.dfa, &['4' as i32, '2' as i32]));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapter;
pub mod catalog;
pub mod compile;
pub mod decls;
pub mod defs;
pub mod determinize;
pub mod diagnostics;
pub mod graph;
mod invariants;
pub mod pipeline;
pub mod simulate;

#[cfg(test)]
mod determinize_tests;
#[cfg(test)]
mod simulate_tests;
#[cfg(test)]
pub(crate) mod test_utils;

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like exceeding the state capacity) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use pipeline::{Built, Generated, Generator, Stage};

use graph::{GraphError, MergeError};

/// Errors that stop a build.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The NFA has more states than a state set can hold.
    #[error("automaton needs {required} states, at most {capacity} are supported")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("{stage} generation failed with {} errors", .diagnostics.error_count())]
    Build {
        stage: Stage,
        diagnostics: Diagnostics,
    },

    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, Error>;
