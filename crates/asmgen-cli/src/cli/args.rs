//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declarations file (positional). `-` reads stdin.
pub fn decls_path_arg() -> Arg {
    Arg::new("decls_path")
        .value_name("DECLS")
        .value_parser(value_parser!(PathBuf))
        .help("Declarations file (JSON), or - for stdin")
}

/// Inline declarations (-d/--decls).
pub fn decls_text_arg() -> Arg {
    Arg::new("decls_text")
        .short('d')
        .long("decls")
        .value_name("JSON")
        .help("Inline declarations")
}

/// Assembly source file (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Assembly source to tokenize")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Which automaton to show (--stage).
pub fn stage_arg() -> Arg {
    Arg::new("stage")
        .long("stage")
        .value_name("STAGE")
        .default_value("lexer")
        .value_parser(["lexer", "parser"])
        .help("Automaton to show")
}

/// Show the merged NFA instead of the DFA (--nfa).
pub fn nfa_arg() -> Arg {
    Arg::new("nfa")
        .long("nfa")
        .action(ArgAction::SetTrue)
        .help("Show the merged NFA instead of the DFA")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "dot"])
        .help("Output format")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Report build progress (-v for summaries, -vv for every definition)")
}
