//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
    threshold: Severity,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
            threshold: Severity::Detail,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Hide diagnostics less severe than `severity`.
    pub fn threshold(mut self, severity: Severity) -> Self {
        self.threshold = severity;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let shown = self
            .diagnostics
            .iter()
            .filter(|d| d.severity() >= self.threshold);

        for (i, diag) in shown.enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let located = diag.origin.as_ref().and_then(|origin| {
                let source = origin.source.as_deref()?;
                let range = origin.range?;
                Some((origin.name.as_str(), source, range))
            });

            match located {
                Some((name, source, range)) => {
                    self.format_snippet(w, &renderer, diag, name, source, range)?
                }
                None => write!(w, "{diag}")?,
            }
        }

        Ok(())
    }

    fn format_snippet(
        &self,
        w: &mut impl Write,
        renderer: &Renderer,
        diag: &DiagnosticMessage,
        name: &str,
        source: &str,
        range: TextRange,
    ) -> std::fmt::Result {
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(range, source.len()))
                .label(&diag.message),
        );
        if !name.is_empty() {
            snippet = snippet.path(name);
        }

        let level = severity_to_level(diag.severity());
        let report = vec![level.primary_title(&diag.message).element(snippet)];
        write!(w, "{}", renderer.render(&report))?;

        for related in &diag.related {
            write!(w, "\n  = note: {related}")?;
        }
        for hint in &diag.hints {
            write!(w, "\n  = help: {hint}")?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Info => Level::INFO,
        Severity::Detail => Level::NOTE,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}
