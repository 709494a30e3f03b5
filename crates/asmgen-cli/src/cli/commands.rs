//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("asmgen")
        .about("Build and inspect the automata of a generated assembler")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tokenize_command())
}

/// Every command reads declarations and reports build diagnostics.
fn with_decls_args(cmd: Command) -> Command {
    cmd.arg(decls_path_arg())
        .arg(decls_text_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Build both automata and report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Build the lexer and parser, reporting problems")
        .override_usage(
            "\
  asmgen check <DECLS>
  asmgen check -d <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  asmgen check z80.json               # errors and warnings
  asmgen check z80.json -vv           # every definition and automaton size
  asmgen check z80.json --strict      # fail on shadowed definitions too"#,
        )
        .arg(strict_arg());

    with_decls_args(cmd)
}

/// Print an automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the lexer or parser automaton")
        .override_usage(
            "\
  asmgen dump <DECLS> [--stage <STAGE>] [--nfa]
  asmgen dump -d <JSON> [--format dot]",
        )
        .after_help(
            r#"EXAMPLES:
  asmgen dump z80.json                      # lexer DFA
  asmgen dump z80.json --stage parser       # parser DFA over token names
  asmgen dump z80.json --nfa                # merged lexer NFA
  asmgen dump z80.json --format dot -o l.dot"#,
        )
        .arg(stage_arg())
        .arg(nfa_arg())
        .arg(format_arg())
        .arg(output_file_arg());

    with_decls_args(cmd)
}

/// Run the lexer DFA over assembly source.
pub fn tokenize_command() -> Command {
    let cmd = Command::new("tokenize")
        .about("Split assembly source into tokens with the generated lexer")
        .override_usage(
            "\
  asmgen tokenize <DECLS> <SOURCE>
  asmgen tokenize <DECLS> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  asmgen tokenize z80.json boot.asm
  asmgen tokenize z80.json -s 'ld a, 0x10'"#,
        );

    with_decls_args(cmd)
        .arg(source_path_arg())
        .arg(source_text_arg())
}
