//! Dump helpers for automaton inspection and testing.
//!
//! Two output formats: a line-per-state text listing suited to snapshot
//! tests, and Graphviz DOT for rendering.

use std::fmt::Write;

use asmgen_core::{AcceptId, END_OF_INPUT, Palette, Role, Symbol};
use indexmap::IndexMap;

use super::{Automaton, Condition, State};

/// How literal symbols are spelled in dumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// Character codes, printed as quoted chars.
    #[default]
    Chars,
    /// Token ids, printed by name when one is known.
    Tokens,
}

/// Printer for `Automaton` with configurable output options.
pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    alphabet: Alphabet,
    symbol_names: Option<&'a IndexMap<Symbol, String>>,
    accept_names: Option<&'a IndexMap<AcceptId, String>>,
    palette: Palette,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            alphabet: Alphabet::Chars,
            symbol_names: None,
            accept_names: None,
            palette: Palette::OFF,
        }
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Names for token symbols (used with [`Alphabet::Tokens`]).
    pub fn symbol_names(mut self, names: &'a IndexMap<Symbol, String>) -> Self {
        self.symbol_names = Some(names);
        self
    }

    /// Names for accept values.
    pub fn accept_names(mut self, names: &'a IndexMap<AcceptId, String>) -> Self {
        self.accept_names = Some(names);
        self
    }

    /// Styling for the text dump. DOT output is never styled.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn dot(&self) -> String {
        let mut out = String::new();
        self.format_dot(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let p = self.palette;
        for state in self.automaton.states() {
            write!(w, "{}", p.paint(Role::State, state.id()))?;
            if let Some(accept) = self.format_accept(state) {
                write!(w, " {}", p.paint(Role::Accept, format!("({accept})")))?;
            }
            w.push(':');

            if state.transitions().is_empty() {
                writeln!(w, " {}", p.paint(Role::Muted, "∅"))?;
                continue;
            }

            for (i, transition) in state.transitions().iter().enumerate() {
                let separator = if i == 0 { " " } else { ", " };
                write!(
                    w,
                    "{separator}{} {} {}",
                    self.format_condition(transition.condition),
                    p.paint(Role::Muted, "→"),
                    p.paint(Role::State, transition.target),
                )?;
            }
            w.push('\n');
        }
        Ok(())
    }

    fn format_dot(&self, w: &mut String) -> std::fmt::Result {
        writeln!(w, "digraph automaton {{")?;
        writeln!(w, "\tnode [shape=ellipse,width=1.25]")?;
        writeln!(w, "\tmclimit=100")?;
        writeln!(w, "\tsplines=spline")?;

        for state in self.automaton.states() {
            if let Some(accept) = self.format_accept(state) {
                writeln!(
                    w,
                    "\t{} [shape=doublecircle,label=\"{}\\n{}\"]",
                    state.id().get(),
                    state.id().get(),
                    escape_dot(&accept)
                )?;
            }
        }

        for state in self.automaton.states() {
            for transition in state.transitions() {
                writeln!(
                    w,
                    "\t{} -> {}\t[label=\"{}\"]",
                    state.id().get(),
                    transition.target.get(),
                    escape_dot(&self.format_condition(transition.condition))
                )?;
            }
        }

        writeln!(w, "}}")
    }

    fn format_accept(&self, state: &State) -> Option<String> {
        if !state.is_accepting() {
            return None;
        }
        let Some(value) = state.accept() else {
            return Some("accept".to_string());
        };
        let name = self.accept_names.and_then(|names| names.get(&value));
        Some(match name {
            Some(name) => format!("accept {value} {name}"),
            None => format!("accept {value}"),
        })
    }

    fn format_condition(&self, condition: Condition) -> String {
        let symbol = match condition {
            Condition::Any => return "ANY".to_string(),
            Condition::Symbol(symbol) => symbol,
        };
        if symbol == END_OF_INPUT {
            return "EOF".to_string();
        }
        match self.alphabet {
            Alphabet::Chars => format_char(symbol),
            Alphabet::Tokens => match self.symbol_names.and_then(|names| names.get(&symbol)) {
                Some(name) => name.clone(),
                None => format!("#{symbol}"),
            },
        }
    }
}

fn format_char(symbol: Symbol) -> String {
    match u8::try_from(symbol) {
        Ok(b'\n') => "'\\n'".to_string(),
        Ok(b'\t') => "'\\t'".to_string(),
        Ok(b'\r') => "'\\r'".to_string(),
        Ok(b'\'') => "'\\''".to_string(),
        Ok(b'\\') => "'\\\\'".to_string(),
        Ok(byte @ b' '..=b'~') => format!("'{}'", byte as char),
        _ => format!("'\\x{symbol:02x}'"),
    }
}

fn escape_dot(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
