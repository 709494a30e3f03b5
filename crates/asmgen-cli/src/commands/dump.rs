use std::fs;
use std::path::PathBuf;

use asmgen_compiler::graph::{Alphabet, AutomatonPrinter};
use asmgen_compiler::{Severity, Stage};
use asmgen_core::Palette;

use super::run_common::generate_or_exit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
}

pub struct DumpArgs {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub stage: Stage,
    pub nfa: bool,
    pub format: DumpFormat,
    pub output: Option<PathBuf>,
    pub threshold: Severity,
    pub palette: Palette,
}

pub fn run(args: DumpArgs) {
    let (generated, _) = generate_or_exit(
        args.decls_path.as_deref(),
        args.decls_text.as_deref(),
        args.threshold,
        args.palette,
    );

    let built = match args.stage {
        Stage::Lexer => &generated.lexer,
        Stage::Parser => &generated.parser,
    };
    let automaton = if args.nfa { &built.nfa } else { &built.dfa };

    // Parser symbols are token ids.
    let token_names = generated.tokens.names();
    let mut printer = AutomatonPrinter::new(automaton)
        .accept_names(&built.accept_names)
        .palette(args.palette);
    if args.stage == Stage::Parser {
        printer = printer
            .alphabet(Alphabet::Tokens)
            .symbol_names(&token_names);
    }

    let out = match args.format {
        DumpFormat::Text => printer.dump(),
        DumpFormat::Dot => printer.dot(),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, out) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", out),
    }
}
