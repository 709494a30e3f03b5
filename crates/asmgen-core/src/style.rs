//! Terminal styling for automaton dumps and token listings.
//!
//! Output is styled by what it shows, not by color name: state ids, accept
//! values, token names, and muted punctuation each map to one ANSI code.
//! Only the standard 16-color codes are used.

use std::fmt;

const RESET: &str = "\x1b[0m";

/// What a piece of output shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    State,
    Accept,
    Token,
    /// Arrows, byte ranges, empty-state markers.
    Muted,
}

impl Role {
    fn code(self) -> &'static str {
        match self {
            Role::State | Role::Token => "\x1b[34m",
            Role::Accept => "\x1b[32m",
            Role::Muted => "\x1b[2m",
        }
    }
}

/// Whether output is styled at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `value` so it displays in the color of `role`.
    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            role: self.enabled.then_some(role),
            value,
        }
    }
}

/// A value displayed with its role's color, or plain when styling is off.
pub struct Painted<T> {
    role: Option<Role>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "{}{}{RESET}", role.code(), self.value),
            None => write!(f, "{}", self.value),
        }
    }
}
