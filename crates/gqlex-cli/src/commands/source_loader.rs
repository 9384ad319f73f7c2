use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use gqlex_lib::GRAPHQL;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("input is required: use a file argument, \"-\" for stdin, or -s/--source")]
    Missing,
}

/// Loads the document from inline text, stdin (`-`) or a file, in that order.
pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<String, LoadError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }

    let Some(path) = path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }

    if !GRAPHQL.matches_filename(path) {
        tracing::warn!(
            path = %path.display(),
            patterns = ?GRAPHQL.filenames,
            "file name does not look like GraphQL, tokenizing anyway"
        );
    }

    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the document or exits with an error message.
pub fn load_or_exit(path: Option<&Path>, text: Option<&str>) -> String {
    match load_source(path, text) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
