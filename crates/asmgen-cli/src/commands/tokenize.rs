use std::fmt::Write;
use std::path::PathBuf;

use asmgen_compiler::Severity;
use asmgen_compiler::catalog::TokenTable;
use asmgen_compiler::simulate::{Lexeme, tokenize};
use asmgen_core::{Palette, Role};

use super::loader::load_source;
use super::run_common::generate_or_exit;

pub struct TokenizeArgs {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub threshold: Severity,
    pub palette: Palette,
}

pub fn run(args: TokenizeArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let (generated, _) = generate_or_exit(
        args.decls_path.as_deref(),
        args.decls_text.as_deref(),
        args.threshold,
        args.palette,
    );

    match tokenize(&generated.lexer.dfa, &source) {
        Ok(lexemes) => print!(
            "{}",
            format_lexemes(&lexemes, &generated.tokens, &source, args.palette)
        ),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// One line per lexeme: byte range, token name, matched text.
pub fn format_lexemes(
    lexemes: &[Lexeme],
    tokens: &TokenTable,
    source: &str,
    palette: Palette,
) -> String {
    let mut out = String::new();
    for lexeme in lexemes {
        let name = lexeme
            .accept
            .and_then(|id| tokens.get(id))
            .map_or("?", |t| t.name.as_str());
        let start = u32::from(lexeme.range.start());
        let end = u32::from(lexeme.range.end());
        writeln!(
            out,
            "{} {} {:?}",
            palette.paint(Role::Muted, format!("{start}..{end}")),
            palette.paint(Role::Token, name),
            &source[lexeme.range]
        )
        .expect("String write never fails");
    }
    out
}
