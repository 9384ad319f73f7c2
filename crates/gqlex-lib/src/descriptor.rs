//! Registration descriptor for host highlighting frameworks.
//!
//! Hosts use it to pick this tokenizer for a file name, alias or mimetype. It is a plain
//! `const` value, so any number of hosts can hold it without shared state.

use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexerDescriptor {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns matched against the file name (`*.ext` or an exact name).
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const GRAPHQL: LexerDescriptor = LexerDescriptor {
    name: "GraphQL",
    aliases: &["graphql", "gql"],
    filenames: &["*.graphql", "*.gql"],
    mimetypes: &["application/graphql"],
};

impl LexerDescriptor {
    /// Case-insensitive match against the name or any alias.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.name.eq_ignore_ascii_case(alias)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    pub fn matches_filename(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .any(|pattern| glob_matches(pattern, file_name))
    }

    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        let essence = mimetype.split(';').next().unwrap_or_default().trim();
        self.mimetypes
            .iter()
            .any(|m| m.eq_ignore_ascii_case(essence))
    }
}

fn glob_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
        None => pattern == file_name,
    }
}
