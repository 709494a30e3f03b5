//! Build a lexer or parser automaton from its definitions.
//!
//! Every definition is compiled on its own; failures are recorded and the
//! remaining definitions still go through, so one build reports every
//! problem. Fragments are folded left to right into one NFA, reducing after
//! each merge. The NFA is then determinized and the result validated
//! against the definitions.

mod generator;


use std::fmt;

use asmgen_core::{AcceptId, STATE_CAPACITY};
use indexmap::IndexMap;
use rowan::TextRange;

use crate::adapter::to_symbols;
use crate::compile::compile;
use crate::defs::{RuleDef, TokenDef};
use crate::determinize::Determinizer;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::graph::{Automaton, MergeError, check_merge, merge, reduce};
use crate::{Error, PassResult};

pub use generator::{Generated, Generator};

/// Which automaton a build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Lexer,
    Parser,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexer => write!(f, "lexer"),
            Stage::Parser => write!(f, "parser"),
        }
    }
}

/// Output of a successful build.
#[derive(Debug, Clone)]
pub struct Built {
    /// Merged and reduced NFA of all definitions.
    pub nfa: Automaton,
    pub dfa: Automaton,
    /// Name of the first definition for each accept value.
    pub accept_names: IndexMap<AcceptId, String>,
}

pub fn build_lexer(tokens: &[TokenDef]) -> PassResult<Built> {
    build(Stage::Lexer, tokens)
}

pub fn build_parser(rules: &[RuleDef]) -> PassResult<Built> {
    build(Stage::Parser, rules)
}

/// What the fold needs to know about a definition.
trait Definition {
    fn name(&self) -> &str;
    fn accept(&self) -> AcceptId;
    fn same_action(&self, other: &Self) -> bool;
    fn describe(&self) -> String;
    /// Compile to an NFA fragment, reporting failures.
    fn fragment(&self, diagnostics: &mut Diagnostics) -> Option<Automaton>;
}

impl Definition for TokenDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self) -> AcceptId {
        self.accept
    }

    fn same_action(&self, other: &Self) -> bool {
        self.action == other.action
    }

    fn describe(&self) -> String {
        format!("{} = {}: {}", self.name, self.accept, self.pattern)
    }

    fn fragment(&self, diagnostics: &mut Diagnostics) -> Option<Automaton> {
        let symbols = match to_symbols(&self.pattern) {
            Ok(symbols) => symbols,
            Err(err) => {
                report(
                    diagnostics,
                    err.kind(),
                    &self.name,
                    Some((&self.pattern, err.range())),
                    err.detail(),
                );
                return None;
            }
        };

        match compile(symbols.symbols(), self.accept) {
            Ok(fragment) => Some(fragment),
            Err(err) => {
                let range = symbols.range(err.position());
                report(
                    diagnostics,
                    err.kind(),
                    &self.name,
                    Some((&self.pattern, range)),
                    err.detail(),
                );
                None
            }
        }
    }
}

impl Definition for RuleDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self) -> AcceptId {
        self.accept
    }

    fn same_action(&self, other: &Self) -> bool {
        self.action == other.action
    }

    fn describe(&self) -> String {
        let symbols: Vec<String> = self.symbols.iter().map(i32::to_string).collect();
        format!("{} = {}: {}", self.name, self.accept, symbols.join(" "))
    }

    fn fragment(&self, diagnostics: &mut Diagnostics) -> Option<Automaton> {
        match compile(&self.symbols, self.accept) {
            Ok(fragment) => Some(fragment),
            Err(err) => {
                report(diagnostics, err.kind(), &self.name, None, err.detail());
                None
            }
        }
    }
}

fn report(
    diagnostics: &mut Diagnostics,
    kind: DiagnosticKind,
    name: &str,
    span: Option<(&str, TextRange)>,
    detail: Option<String>,
) {
    let mut builder = diagnostics.report(kind).origin(name);
    if let Some((source, range)) = span {
        builder = builder.span(source, range);
    }
    if let Some(detail) = detail {
        builder = builder.message(detail);
    }
    builder.emit();
}

fn build<D: Definition>(stage: Stage, defs: &[D]) -> PassResult<Built> {
    let mut diagnostics = Diagnostics::new();
    let mut owners: IndexMap<AcceptId, &D> = IndexMap::new();
    let mut nfa = Automaton::new();

    for def in defs {
        diagnostics
            .report(DiagnosticKind::DefinitionListed)
            .message(def.describe())
            .emit();

        if let Some(owner) = owners.get(&def.accept()) {
            if !owner.same_action(def) {
                diagnostics
                    .report(DiagnosticKind::AcceptIdConflict)
                    .origin(def.name())
                    .message(format!("id {}", def.accept()))
                    .related_to(format!("`{}` also uses id {}", owner.name(), def.accept()))
                    .emit();
                continue;
            }
        } else {
            owners.insert(def.accept(), def);
        }

        let Some(fragment) = def.fragment(&mut diagnostics) else {
            continue;
        };

        match check_merge(&nfa, &fragment) {
            Ok(()) => {}
            Err(MergeError::StartConflict { base, .. }) => {
                let mut builder = diagnostics
                    .report(DiagnosticKind::EmptyMatchConflict)
                    .origin(def.name());
                if let Some(other) = base.and_then(|id| owners.get(&id)) {
                    builder = builder.related_to(format!("`{}` matches it as well", other.name()));
                }
                builder.emit();
                continue;
            }
            Err(MergeError::WildcardConflict { .. }) => {
                diagnostics
                    .report(DiagnosticKind::WildcardConflict)
                    .origin(def.name())
                    .emit();
                continue;
            }
            Err(err @ MergeError::Graph(_)) => return Err(err.into()),
        }

        nfa = merge(std::mem::take(&mut nfa), fragment)?;
        reduce(&mut nfa);

        let required = nfa.id_bound();
        if required > STATE_CAPACITY {
            return Err(Error::CapacityExceeded {
                required,
                capacity: STATE_CAPACITY,
            });
        }
    }

    if diagnostics.has_errors() {
        return Err(Error::Build { stage, diagnostics });
    }

    let accept_names: IndexMap<AcceptId, String> = owners
        .iter()
        .map(|(&accept, def)| (accept, def.name().to_string()))
        .collect();

    let (dfa, collisions) = Determinizer::new(&nfa)
        .accept_names(&accept_names)
        .run()?;
    diagnostics.extend(collisions);

    let survivors = dfa.accept_values();
    for (accept, def) in &owners {
        if !survivors.contains(accept) {
            diagnostics
                .report(DiagnosticKind::ShadowedDefinition)
                .message(def.name())
                .emit();
        }
    }

    diagnostics
        .report(DiagnosticKind::AutomatonBuilt)
        .message(format!(
            "{stage}: {} definitions, {} NFA states, {} DFA states",
            defs.len(),
            nfa.len(),
            dfa.len()
        ))
        .emit();

    Ok((
        Built {
            nfa,
            dfa,
            accept_names,
        },
        diagnostics,
    ))
}
