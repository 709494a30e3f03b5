mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

use asmgen_core::Palette;
use clap::ArgMatches;

pub use commands::build_cli;
pub use dispatch::{CheckParams, DumpParams, TokenizeParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Read `--color`; absent means auto.
    pub fn from_matches(m: &ArgMatches) -> Self {
        match m.get_one::<String>("color").map(|s| s.as_str()) {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    pub fn palette(self) -> Palette {
        Palette::new(self.is_enabled())
    }

    fn is_enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Dumps go to stdout, diagnostics to stderr: both must be terminals.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}
