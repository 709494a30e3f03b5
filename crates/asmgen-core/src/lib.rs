#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core types shared by the asmgen automaton engine and its front ends.
//!
//! - **Symbols**: one integer alphabet for characters, token ids and
//!   pattern operators (`symbol`)
//! - **State sets**: fixed-width bit-sets used by subset construction (`bitset`)

pub mod bitset;
mod invariants;
pub mod style;
pub mod symbol;
pub mod utils;

#[cfg(test)]
mod bitset_tests;
#[cfg(test)]
mod symbol_tests;

pub use bitset::{STATE_CAPACITY, StateSet};
pub use style::{Painted, Palette, Role};
pub use symbol::{AcceptId, Control, END_OF_INPUT, Symbol, is_literal};
