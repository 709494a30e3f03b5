use std::fs;
use std::io::{self, Read};
use std::path::Path;

use asmgen_compiler::decls::Declarations;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("declarations are required: use a positional argument or -d/--decls")]
    MissingDeclarations,

    #[error("source is required: use a positional argument or -s/--source")]
    MissingSource,

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid declarations in {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

pub fn load_declarations(
    decls_path: Option<&Path>,
    decls_text: Option<&str>,
) -> Result<Declarations, LoadError> {
    if let Some(text) = decls_text {
        return parse(text, "<inline>");
    }

    match decls_path {
        Some(path) => {
            let (text, origin) = read_input(path)?;
            parse(&text, &origin)
        }
        None => Err(LoadError::MissingDeclarations),
    }
}

pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
) -> Result<String, LoadError> {
    if let Some(text) = source_text {
        return Ok(text.to_string());
    }

    match source_path {
        Some(path) => read_input(path).map(|(text, _)| text),
        None => Err(LoadError::MissingSource),
    }
}

fn parse(text: &str, origin: &str) -> Result<Declarations, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Contents of `path` and a name for messages. `-` is stdin.
fn read_input(path: &Path) -> Result<(String, String), LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok((buf, "<stdin>".to_string()));
    }

    let name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: name.clone(),
        source,
    })?;
    Ok((content, name))
}
