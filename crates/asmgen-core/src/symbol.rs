//! The integer alphabet.
//!
//! Non-negative values are literal alphabet members (character codes for the
//! lexer, token ids for the parser). `-1` is end of input. Anything below is
//! a control code: the negated character of a pattern operator. Control codes
//! only ever reach the pattern compiler; transitions never carry them.

/// One alphabet member or control code.
pub type Symbol = i32;

/// Value attached to an accepting state, identifying the token or rule.
///
/// Lower values take priority when two definitions accept the same input.
pub type AcceptId = i32;

/// End of input. Matches like a literal but is never part of a range.
pub const END_OF_INPUT: Symbol = -1;

/// Whether `symbol` may label a transition.
pub fn is_literal(symbol: Symbol) -> bool {
    symbol >= END_OF_INPUT
}

/// Pattern operators, encoded in a symbol stream as the negated operator char.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// `+`, one or more.
    Plus,
    /// `*`, zero or more.
    Star,
    /// `?`, zero or one.
    Question,
    SetOpen,
    SetClose,
    /// `-` between two set members.
    Range,
    /// `^` directly after `[`.
    Negate,
    GroupOpen,
    GroupClose,
    Alternation,
}

impl Control {
    pub const ALL: [Control; 10] = [
        Control::Plus,
        Control::Star,
        Control::Question,
        Control::SetOpen,
        Control::SetClose,
        Control::Range,
        Control::Negate,
        Control::GroupOpen,
        Control::GroupClose,
        Control::Alternation,
    ];

    pub const fn as_char(self) -> char {
        match self {
            Control::Plus => '+',
            Control::Star => '*',
            Control::Question => '?',
            Control::SetOpen => '[',
            Control::SetClose => ']',
            Control::Range => '-',
            Control::Negate => '^',
            Control::GroupOpen => '(',
            Control::GroupClose => ')',
            Control::Alternation => '|',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.as_char() == c)
    }

    /// Symbol encoding of this operator.
    pub const fn symbol(self) -> Symbol {
        -(self.as_char() as Symbol)
    }

    /// Decode a control symbol. Literals and unknown codes yield `None`.
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        if is_literal(symbol) {
            return None;
        }
        let c = char::from_u32(symbol.unsigned_abs())?;
        Self::from_char(c)
    }

    /// Postfix operators apply to the element right before them.
    pub fn is_postfix(self) -> bool {
        matches!(self, Control::Plus | Control::Star | Control::Question)
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
