//! Test helpers shared across modules.

use asmgen_core::{AcceptId, Symbol};

use crate::adapter::to_symbols;
use crate::compile::compile;
use crate::graph::{Automaton, AutomatonPrinter};

/// Compile pattern text, panicking on malformed patterns.
pub fn pattern(text: &str, accept: AcceptId) -> Automaton {
    let symbols = to_symbols(text).unwrap();
    compile(symbols.symbols(), accept).unwrap()
}

/// Character codes of `input`.
pub fn chars(input: &str) -> Vec<Symbol> {
    input.chars().map(|c| c as Symbol).collect()
}

pub fn dump(automaton: &Automaton) -> String {
    AutomatonPrinter::new(automaton).dump()
}

/// Every string over `alphabet` up to `max_len` characters, shortest first.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}
