//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to the command handlers
//! - with inline declarations (`-d`), a single positional is the source file

use std::path::PathBuf;

use asmgen_compiler::{Severity, Stage};
use asmgen_core::Palette;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::tokenize::TokenizeArgs;

pub struct CheckParams {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub strict: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            decls_path: m.get_one::<PathBuf>("decls_path").cloned(),
            decls_text: m.get_one::<String>("decls_text").cloned(),
            strict: m.get_flag("strict"),
            verbose: m.get_count("verbose"),
            color: ColorChoice::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            decls_path: p.decls_path,
            decls_text: p.decls_text,
            strict: p.strict,
            threshold: threshold(p.verbose),
            palette: p.color.palette(),
        }
    }
}

pub struct DumpParams {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub stage: Stage,
    pub nfa: bool,
    pub format: DumpFormat,
    pub output: Option<PathBuf>,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let stage = match m.get_one::<String>("stage").map(|s| s.as_str()) {
            Some("parser") => Stage::Parser,
            _ => Stage::Lexer,
        };
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("dot") => DumpFormat::Dot,
            _ => DumpFormat::Text,
        };

        Self {
            decls_path: m.get_one::<PathBuf>("decls_path").cloned(),
            decls_text: m.get_one::<String>("decls_text").cloned(),
            stage,
            nfa: m.get_flag("nfa"),
            format,
            output: m.get_one::<PathBuf>("output").cloned(),
            verbose: m.get_count("verbose"),
            color: ColorChoice::from_matches(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        // Files and DOT output are never styled.
        let palette = if p.output.is_none() && p.format == DumpFormat::Text {
            p.color.palette()
        } else {
            Palette::OFF
        };
        Self {
            decls_path: p.decls_path,
            decls_text: p.decls_text,
            stage: p.stage,
            nfa: p.nfa,
            format: p.format,
            output: p.output,
            threshold: threshold(p.verbose),
            palette,
        }
    }
}

pub struct TokenizeParams {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TokenizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let decls_text = m.get_one::<String>("decls_text").cloned();
        let (decls_path, source_path) = shift_positional_to_source(
            decls_text.is_some(),
            m.get_one::<PathBuf>("decls_path").cloned(),
            m.get_one::<PathBuf>("source_path").cloned(),
        );

        Self {
            decls_path,
            decls_text,
            source_path,
            source_text: m.get_one::<String>("source_text").cloned(),
            verbose: m.get_count("verbose"),
            color: ColorChoice::from_matches(m),
        }
    }
}

impl From<TokenizeParams> for TokenizeArgs {
    fn from(p: TokenizeParams) -> Self {
        Self {
            decls_path: p.decls_path,
            decls_text: p.decls_text,
            source_path: p.source_path,
            source_text: p.source_text,
            threshold: threshold(p.verbose),
            palette: p.color.palette(),
        }
    }
}


/// Least severe diagnostic shown for a `-v` count.
fn threshold(verbose: u8) -> Severity {
    match verbose {
        0 => Severity::Warning,
        1 => Severity::Info,
        _ => Severity::Detail,
    }
}

/// With `-d`, a lone positional is the source: `asmgen tokenize -d '{..}' boot.asm`.
fn shift_positional_to_source(
    has_decls_text: bool,
    decls_path: Option<PathBuf>,
    source_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_decls_text && decls_path.is_some() && source_path.is_none() {
        (None, decls_path)
    } else {
        (decls_path, source_path)
    }
}
