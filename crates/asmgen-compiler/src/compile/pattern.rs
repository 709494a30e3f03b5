//! Symbol sequence to NFA.
//!
//! Each literal (or closed set) appends one state reached from the current
//! state. Postfix operators then rewrite the last step:
//!
//! - `+` copies the transitions of the previous state onto the new one as self-loops
//! - `*` drops the new state and folds its incoming transitions back onto the previous one
//! - `?` remembers the previous state as an anchor; the next step is also taken from it

use asmgen_core::{AcceptId, Control, END_OF_INPUT, Symbol, is_literal};

use super::error::{CompileError, Feature};
use crate::graph::{Automaton, Condition, StateId};

type Result<T> = std::result::Result<T, CompileError>;

/// Compile `symbols` into an automaton whose final state accepts with `accept`.
pub fn compile(symbols: &[Symbol], accept: AcceptId) -> Result<Automaton> {
    let mut builder = PatternBuilder::new();
    let mut position = 0;
    while position < symbols.len() {
        position = builder.step(symbols, position)?;
    }
    builder.finish(accept)
}

struct SetBuilder {
    opened_at: usize,
    members: Vec<Symbol>,
    /// Last literal written inside the set, start of a following range.
    last: Option<Symbol>,
}

impl SetBuilder {
    fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            members: Vec::new(),
            last: None,
        }
    }

    fn push(&mut self, symbol: Symbol) {
        if !self.members.contains(&symbol) {
            self.members.push(symbol);
        }
    }
}

struct PatternBuilder {
    automaton: Automaton,
    current: StateId,
    previous: Option<StateId>,
    /// State emitted by the last element, while a postfix operator may still apply to it.
    operand: Option<StateId>,
    /// Anchor of a `?` waiting for the next element.
    pending_optional: Option<StateId>,
    set: Option<SetBuilder>,
}

impl PatternBuilder {
    fn new() -> Self {
        Self {
            automaton: Automaton::new(),
            current: StateId::START,
            previous: None,
            operand: None,
            pending_optional: None,
            set: None,
        }
    }

    /// Consume the symbol at `position`, returning the position of the next one.
    fn step(&mut self, symbols: &[Symbol], position: usize) -> Result<usize> {
        let symbol = symbols[position];

        if is_literal(symbol) {
            match &mut self.set {
                Some(set) => {
                    set.push(symbol);
                    set.last = Some(symbol);
                }
                None => self.emit(&[symbol])?,
            }
            return Ok(position + 1);
        }

        let Some(control) = Control::from_symbol(symbol) else {
            return Err(CompileError::UnknownControl { symbol, position });
        };

        match control {
            Control::Plus => {
                self.reject_in_set(control, position)?;
                self.repeat(control, position)?;
            }
            Control::Star => {
                self.reject_in_set(control, position)?;
                self.repeat_optional(control, position)?;
            }
            Control::Question => {
                self.reject_in_set(control, position)?;
                self.optional(control, position)?;
            }
            Control::SetOpen => {
                self.reject_in_set(control, position)?;
                if symbols.get(position + 1) == Some(&Control::Negate.symbol()) {
                    return Err(CompileError::Unimplemented {
                        feature: Feature::NegatedSet,
                        position,
                    });
                }
                self.set = Some(SetBuilder::new(position));
            }
            Control::SetClose => {
                let Some(set) = self.set.take() else {
                    return Err(CompileError::ControlOutsideSet { control, position });
                };
                if set.members.is_empty() {
                    return Err(CompileError::EmptySet {
                        position: set.opened_at,
                    });
                }
                self.emit(&set.members)?;
            }
            Control::Range => return self.range(symbols, position),
            Control::Negate => {
                self.reject_in_set(control, position)?;
                return Err(CompileError::ControlOutsideSet { control, position });
            }
            Control::GroupOpen | Control::GroupClose => {
                return Err(CompileError::Unimplemented {
                    feature: Feature::Grouping,
                    position,
                });
            }
            Control::Alternation => {
                return Err(CompileError::Unimplemented {
                    feature: Feature::Alternation,
                    position,
                });
            }
        }

        Ok(position + 1)
    }

    fn finish(mut self, accept: AcceptId) -> Result<Automaton> {
        if let Some(set) = self.set {
            return Err(CompileError::UnclosedSet {
                position: set.opened_at,
            });
        }

        self.automaton.set_accept(self.current, Some(accept));
        if let Some(anchor) = self.pending_optional {
            self.automaton.set_accept(anchor, Some(accept));
        }
        Ok(self.automaton)
    }

    /// Append a state reached from the current one on any of `members`.
    fn emit(&mut self, members: &[Symbol]) -> Result<()> {
        let from = self.current;
        let to = self.automaton.add_state(false);
        for &member in members {
            self.automaton
                .add_transition(from, to, Condition::Symbol(member))?;
        }

        if let Some(anchor) = self.pending_optional.take() {
            let skipped = self.automaton.ensure_state(from).transitions().to_vec();
            for transition in skipped {
                self.automaton
                    .add_transition(anchor, to, transition.condition)?;
            }
        }

        self.previous = Some(from);
        self.current = to;
        self.operand = Some(to);
        Ok(())
    }

    /// `+`
    fn repeat(&mut self, control: Control, position: usize) -> Result<()> {
        let (previous, operand) = self.operand_of(control, position)?;
        let loops = self.automaton.ensure_state(previous).transitions().to_vec();
        for transition in loops {
            self.automaton
                .add_transition(operand, operand, transition.condition)?;
        }
        Ok(())
    }

    /// `*`
    ///
    /// Only the previous state becomes optional. A `?` anchor that already
    /// skipped to the folded state is not made accepting, so `ab?c*` does
    /// not accept `a`.
    fn repeat_optional(&mut self, control: Control, position: usize) -> Result<()> {
        let (previous, operand) = self.operand_of(control, position)?;
        let removed = self.automaton.remove_last_state().map(|state| state.id());
        crate::invariants::ensure_removed(operand, removed);
        self.automaton.redirect(operand, previous);

        self.current = previous;
        self.operand = None;
        Ok(())
    }

    /// `?`
    fn optional(&mut self, control: Control, position: usize) -> Result<()> {
        let (previous, _) = self.operand_of(control, position)?;
        self.pending_optional = Some(previous);
        self.operand = None;
        Ok(())
    }

    /// `-` inside a set: every symbol between the last member and the next literal.
    fn range(&mut self, symbols: &[Symbol], position: usize) -> Result<usize> {
        let invalid = |reason| CompileError::InvalidRange { reason, position };

        let Some(set) = &mut self.set else {
            return Err(CompileError::ControlOutsideSet {
                control: Control::Range,
                position,
            });
        };
        let start = set.last.ok_or_else(|| invalid("range has no start"))?;
        let end = match symbols.get(position + 1) {
            Some(&end) if is_literal(end) => end,
            _ => return Err(invalid("range has no end")),
        };
        if start == END_OF_INPUT || end == END_OF_INPUT {
            return Err(invalid("end of input cannot bound a range"));
        }

        for member in start.min(end)..=start.max(end) {
            set.push(member);
        }
        set.last = Some(end);
        Ok(position + 2)
    }

    fn reject_in_set(&self, control: Control, position: usize) -> Result<()> {
        if self.set.is_some() {
            return Err(CompileError::ControlInSet { control, position });
        }
        Ok(())
    }

    /// The previous state and the state a postfix operator applies to.
    fn operand_of(&self, control: Control, position: usize) -> Result<(StateId, StateId)> {
        match (self.previous, self.operand) {
            (Some(previous), Some(operand)) => Ok((previous, operand)),
            _ => Err(CompileError::MissingOperand { control, position }),
        }
    }
}
