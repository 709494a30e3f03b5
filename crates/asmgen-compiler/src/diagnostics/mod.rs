mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, Origin, Severity};
pub use printer::DiagnosticsPrinter;

use message::DiagnosticMessage;

/// Batched diagnostics of one build.
///
/// Errors and progress reports share the collection; severity decides what
/// fails a build and what a printer shows.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Number of diagnostics of exactly `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Kinds in report order.
    pub fn kinds(&self) -> impl Iterator<Item = DiagnosticKind> + '_ {
        self.messages.iter().map(|d| d.kind)
    }

    /// Messages in report order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().map(|d| d.message.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    /// Definition the diagnostic belongs to.
    pub fn origin(mut self, name: impl Into<String>) -> Self {
        self.message.origin = Some(Origin::new(name));
        self
    }

    /// Pattern text of the origin and the offending range within it.
    pub fn span(mut self, source: impl Into<String>, range: TextRange) -> Self {
        let origin = self
            .message
            .origin
            .get_or_insert_with(|| Origin::new(String::new()));
        origin.source = Some(source.into());
        origin.range = Some(range);
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>) -> Self {
        self.message.related.push(msg.into());
        self
    }

    pub fn hint(mut self, msg: impl Into<String>) -> Self {
        self.message.hints.push(msg.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
