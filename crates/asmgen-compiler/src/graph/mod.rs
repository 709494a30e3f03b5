//! Automaton graph and the operations that combine and shrink it.
//!
//! - `automaton`: arena of states with lowest-free id allocation
//! - `merge`: union through a shared start state
//! - `reduce`: iterative merging of equivalent states
//! - `dump`: text and DOT rendering

mod automaton;
mod dump;
mod merge;
mod reduce;

#[cfg(test)]
mod merge_tests;
#[cfg(test)]
mod reduce_tests;

pub use automaton::{Automaton, Condition, GraphError, State, StateId, Transition};
pub use dump::{Alphabet, AutomatonPrinter};
pub use merge::{MergeError, check_merge, merge};
pub use reduce::{ReduceStats, reduce};
