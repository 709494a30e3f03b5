//! Tests for CLI dispatch logic: params extraction and positional shifting.

use std::path::PathBuf;

use asmgen_compiler::{Severity, Stage};
use asmgen_core::Palette;

use super::*;
use crate::cli::commands::{check_command, dump_command, tokenize_command};
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::tokenize::TokenizeArgs;

#[test]
fn check_extracts_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "z80.json", "--strict", "-vv", "--color", "never"])
        .unwrap();

    let params = CheckParams::from_matches(&m);

    assert_eq!(params.decls_path, Some(PathBuf::from("z80.json")));
    assert!(params.strict);
    assert_eq!(params.verbose, 2);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn verbosity_maps_to_threshold() {
    let threshold_for = |args: &[&str]| {
        let m = check_command().try_get_matches_from(args.iter().copied()).unwrap();
        CheckArgs::from(CheckParams::from_matches(&m)).threshold
    };

    assert_eq!(threshold_for(&["check", "z80.json"]), Severity::Warning);
    assert_eq!(threshold_for(&["check", "z80.json", "-v"]), Severity::Info);
    assert_eq!(threshold_for(&["check", "z80.json", "-vvv"]), Severity::Detail);
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "z80.json"])
        .unwrap();

    let params = DumpParams::from_matches(&m);

    assert_eq!(params.stage, Stage::Lexer);
    assert!(!params.nfa);
    assert_eq!(params.format, DumpFormat::Text);
    assert_eq!(params.output, None);
}

#[test]
fn dump_extracts_stage_and_format() {
    let m = dump_command()
        .try_get_matches_from([
            "dump", "z80.json", "--stage", "parser", "--nfa", "--format", "dot", "-o", "p.dot",
        ])
        .unwrap();

    let params = DumpParams::from_matches(&m);

    assert_eq!(params.stage, Stage::Parser);
    assert!(params.nfa);
    assert_eq!(params.format, DumpFormat::Dot);
    assert_eq!(params.output, Some(PathBuf::from("p.dot")));
}

#[test]
fn dump_to_file_is_never_colored() {
    let m = dump_command()
        .try_get_matches_from(["dump", "z80.json", "--color", "always", "-o", "out.txt"])
        .unwrap();

    let args = DumpArgs::from(DumpParams::from_matches(&m));

    assert_eq!(args.palette, Palette::OFF);
}

#[test]
fn color_choice_resolves_to_palette() {
    let m = tokenize_command()
        .try_get_matches_from(["tokenize", "z80.json", "boot.asm", "--color", "always"])
        .unwrap();

    let args = TokenizeArgs::from(TokenizeParams::from_matches(&m));

    assert_eq!(args.palette, Palette::ON);
    assert_eq!(ColorChoice::Never.palette(), Palette::OFF);
}

#[test]
fn dump_rejects_unknown_stage() {
    let result = dump_command().try_get_matches_from(["dump", "z80.json", "--stage", "linker"]);

    assert!(result.is_err());
}

#[test]
fn tokenize_with_two_positionals() {
    let m = tokenize_command()
        .try_get_matches_from(["tokenize", "z80.json", "boot.asm"])
        .unwrap();

    let args = TokenizeArgs::from(TokenizeParams::from_matches(&m));

    assert_eq!(args.decls_path, Some(PathBuf::from("z80.json")));
    assert_eq!(args.source_path, Some(PathBuf::from("boot.asm")));
}

#[test]
fn inline_decls_shift_positional_to_source() {
    let m = tokenize_command()
        .try_get_matches_from(["tokenize", "-d", "{}", "boot.asm"])
        .unwrap();

    let params = TokenizeParams::from_matches(&m);

    assert_eq!(params.decls_text.as_deref(), Some("{}"));
    assert_eq!(params.decls_path, None);
    assert_eq!(params.source_path, Some(PathBuf::from("boot.asm")));
}

#[test]
fn inline_source_keeps_positional_as_decls() {
    let m = tokenize_command()
        .try_get_matches_from(["tokenize", "z80.json", "-s", "nop"])
        .unwrap();

    let params = TokenizeParams::from_matches(&m);

    assert_eq!(params.decls_path, Some(PathBuf::from("z80.json")));
    assert_eq!(params.source_text.as_deref(), Some("nop"));
}

#[test]
fn help_lists_every_command() {
    let help = build_cli().render_help().to_string();

    assert!(help.contains("check"));
    assert!(help.contains("dump"));
    assert!(help.contains("tokenize"));
}
