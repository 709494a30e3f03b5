use rowan::TextRange;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Pattern text the character adapter cannot read
    IllegalCharacter,
    InvalidEscape,

    // Pattern structure
    UnclosedSet,
    EmptySet,
    ControlInSet,
    ControlOutsideSet,
    MissingOperand,
    InvalidRange,
    UnknownControl,
    Unimplemented,

    // Declarations
    UndefinedEnum,

    // Conflicts between definitions
    EmptyMatchConflict,
    WildcardConflict,
    AcceptIdConflict,

    // Valid, but probably not what was meant
    ShadowedDefinition,

    // Progress reporting
    AcceptCollision,
    AutomatonBuilt,
    DefinitionListed,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::ShadowedDefinition => Severity::Warning,
            Self::AcceptCollision | Self::AutomatonBuilt => Severity::Info,
            Self::DefinitionListed => Severity::Detail,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::ControlInSet | Self::ControlOutsideSet => {
                Some("escape the character with `\\` to match it literally")
            }
            Self::Unimplemented => Some("list the alternatives as separate definitions"),
            Self::AcceptIdConflict => {
                Some("definitions sharing an id must share their action as well")
            }
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::IllegalCharacter => "illegal character in pattern",
            Self::InvalidEscape => "invalid escape sequence",

            Self::UnclosedSet => "missing closing `]`",
            Self::EmptySet => "empty set `[]` is not allowed",
            Self::ControlInSet => "operator is not allowed inside a set",
            Self::ControlOutsideSet => "operator is only valid inside a set",
            Self::MissingOperand => "operator has nothing to repeat",
            Self::InvalidRange => "invalid range",
            Self::UnknownControl => "unknown control code",
            Self::Unimplemented => "not implemented",

            Self::UndefinedEnum => "undefined enumeration",

            Self::EmptyMatchConflict => "two definitions match the empty input",
            Self::WildcardConflict => "two definitions start with a wildcard",
            Self::AcceptIdConflict => "two definitions share an id",

            Self::ShadowedDefinition => "definition can never match",

            Self::AcceptCollision => "accept values collide",
            Self::AutomatonBuilt => "automaton built",
            Self::DefinitionListed => "definition",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::IllegalCharacter => "illegal character {} in pattern".to_string(),
            Self::ControlInSet => "`{}` is not allowed inside a set".to_string(),
            Self::ControlOutsideSet => "`{}` is only valid inside a set".to_string(),
            Self::MissingOperand => "`{}` has nothing to repeat".to_string(),
            Self::Unimplemented => "{} is not implemented".to_string(),
            Self::UndefinedEnum => "enumeration `{}` is not defined".to_string(),
            Self::ShadowedDefinition => "`{}` can never match".to_string(),
            Self::AutomatonBuilt | Self::DefinitionListed => "{}".to_string(),
            Self::UnclosedSet => format!("{}; {{}}", self.fallback_message()),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Detail,
    Info,
    Warning,
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Detail => write!(f, "detail"),
        }
    }
}

/// Where a diagnostic comes from: a named definition, and optionally the
/// offending part of its pattern text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub(crate) name: String,
    pub(crate) source: Option<String>,
    pub(crate) range: Option<TextRange>,
}

impl Origin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            range: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) origin: Option<Origin>,
    pub(crate) message: String,
    pub(crate) related: Vec<String>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin: None,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self::new(kind, kind.fallback_message())
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.severity())?;
        if let Some(origin) = &self.origin {
            write!(f, "{}: ", origin.name)?;
        }
        write!(f, "{}", self.message)?;
        for related in &self.related {
            write!(f, "\n  = note: {related}")?;
        }
        for hint in &self.hints {
            write!(f, "\n  = help: {hint}")?;
        }
        Ok(())
    }
}
