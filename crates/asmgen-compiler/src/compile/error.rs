use std::fmt;

use asmgen_core::{Control, Symbol};

use crate::diagnostics::DiagnosticKind;
use crate::graph::GraphError;

/// Pattern features the compiler recognizes but does not build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    NegatedSet,
    Grouping,
    Alternation,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::NegatedSet => write!(f, "set negation `[^...]`"),
            Feature::Grouping => write!(f, "grouping `(...)`"),
            Feature::Alternation => write!(f, "alternation `|`"),
        }
    }
}

/// A malformed symbol sequence. `position` indexes the offending symbol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("`{control}` is not allowed inside a set")]
    ControlInSet { control: Control, position: usize },

    #[error("`{control}` is only valid inside a set")]
    ControlOutsideSet { control: Control, position: usize },

    #[error("`{control}` has nothing to repeat")]
    MissingOperand { control: Control, position: usize },

    #[error("invalid range: {reason}")]
    InvalidRange {
        reason: &'static str,
        position: usize,
    },

    #[error("empty set `[]` is not allowed")]
    EmptySet { position: usize },

    /// `position` is the opening `[`.
    #[error("missing closing `]`")]
    UnclosedSet { position: usize },

    #[error("unknown control code {symbol}")]
    UnknownControl { symbol: Symbol, position: usize },

    #[error("{feature} is not implemented")]
    Unimplemented { feature: Feature, position: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CompileError {
    pub fn position(&self) -> usize {
        match self {
            Self::ControlInSet { position, .. }
            | Self::ControlOutsideSet { position, .. }
            | Self::MissingOperand { position, .. }
            | Self::InvalidRange { position, .. }
            | Self::EmptySet { position }
            | Self::UnclosedSet { position }
            | Self::UnknownControl { position, .. }
            | Self::Unimplemented { position, .. } => *position,
            Self::Graph(_) => 0,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::ControlInSet { .. } => DiagnosticKind::ControlInSet,
            Self::ControlOutsideSet { .. } => DiagnosticKind::ControlOutsideSet,
            Self::MissingOperand { .. } => DiagnosticKind::MissingOperand,
            Self::InvalidRange { .. } => DiagnosticKind::InvalidRange,
            Self::EmptySet { .. } => DiagnosticKind::EmptySet,
            Self::UnclosedSet { .. } => DiagnosticKind::UnclosedSet,
            Self::UnknownControl { .. } => DiagnosticKind::UnknownControl,
            Self::Unimplemented { .. } => DiagnosticKind::Unimplemented,
            Self::Graph(_) => DiagnosticKind::WildcardConflict,
        }
    }

    /// Detail for the kind's message template, if the kind takes one.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ControlInSet { control, .. }
            | Self::ControlOutsideSet { control, .. }
            | Self::MissingOperand { control, .. } => Some(control.to_string()),
            Self::InvalidRange { reason, .. } => Some(reason.to_string()),
            Self::UnknownControl { symbol, .. } => Some(symbol.to_string()),
            Self::Unimplemented { feature, .. } => Some(feature.to_string()),
            Self::Graph(err) => Some(err.to_string()),
            Self::EmptySet { .. } | Self::UnclosedSet { .. } => None,
        }
    }
}
