//! Shared build step: load declarations, generate, report.

use std::path::Path;

use asmgen_compiler::{Diagnostics, Error, Generated, Generator, Severity};
use asmgen_core::Palette;

use super::loader::load_declarations;

/// Generate both automata or exit. Diagnostics at or above `threshold`
/// go to stderr either way.
pub fn generate_or_exit(
    decls_path: Option<&Path>,
    decls_text: Option<&str>,
    threshold: Severity,
    palette: Palette,
) -> (Generated, Diagnostics) {
    let decls = match load_declarations(decls_path, decls_text) {
        Ok(decls) => decls,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match Generator::new(&decls).generate() {
        Ok((generated, diagnostics)) => {
            report(&diagnostics, threshold, palette);
            (generated, diagnostics)
        }
        Err(e) => {
            if let Error::Build { diagnostics, .. } = &e {
                report(diagnostics, threshold, palette);
            }
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(diagnostics: &Diagnostics, threshold: Severity, palette: Palette) {
    let rendered = diagnostics
        .printer()
        .threshold(threshold)
        .colored(palette.is_enabled())
        .render();
    if !rendered.is_empty() {
        eprintln!("{}", rendered);
    }
}
