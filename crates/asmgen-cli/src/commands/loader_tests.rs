use std::io::Write;
use std::path::Path;

use asmgen_compiler::decls::{Argument, Opcode};

use super::loader::{LoadError, load_declarations, load_source};

const DECLS: &str = r#"{ "opcodes": [{ "mnemonic": "inc", "args": ["identifier"] }] }"#;

#[test]
fn inline_text_takes_precedence() {
    let decls = load_declarations(Some(Path::new("missing.json")), Some(DECLS)).unwrap();

    assert_eq!(decls.opcodes, [Opcode::new("inc").arg(Argument::Identifier)]);
}

#[test]
fn reads_declarations_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DECLS.as_bytes()).unwrap();

    let decls = load_declarations(Some(file.path()), None).unwrap();

    assert_eq!(decls.opcodes.len(), 1);
    assert_eq!(decls.parameters.args_separator, ',');
}

#[test]
fn missing_declarations() {
    let err = load_declarations(None, None).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"declarations are required: use a positional argument or -d/--decls");
}

#[test]
fn unreadable_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = load_declarations(Some(&path), None).unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_is_reported() {
    let err = load_declarations(None, Some(r#"{ "opcodes": [{ "args": [] }] }"#)).unwrap_err();

    let LoadError::Parse { origin, .. } = &err else {
        panic!("expected a parse error, got {err}");
    };
    assert_eq!(origin, "<inline>");
    assert!(err.to_string().contains("mnemonic"));
}

#[test]
fn source_from_file_or_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"inc a\n").unwrap();

    assert_eq!(load_source(Some(file.path()), None).unwrap(), "inc a\n");
    assert_eq!(load_source(None, Some("nop")).unwrap(), "nop");
    assert!(matches!(
        load_source(None, None),
        Err(LoadError::MissingSource)
    ));
}
