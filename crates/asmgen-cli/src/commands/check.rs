use std::path::PathBuf;

use asmgen_compiler::Severity;
use asmgen_core::Palette;

use super::run_common::generate_or_exit;

pub struct CheckArgs {
    pub decls_path: Option<PathBuf>,
    pub decls_text: Option<String>,
    pub strict: bool,
    pub threshold: Severity,
    pub palette: Palette,
}

pub fn run(args: CheckArgs) {
    let (_, diagnostics) = generate_or_exit(
        args.decls_path.as_deref(),
        args.decls_text.as_deref(),
        args.threshold,
        args.palette,
    );

    if args.strict && diagnostics.has_warnings() {
        eprintln!(
            "error: {} warnings treated as errors",
            diagnostics.warning_count()
        );
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
