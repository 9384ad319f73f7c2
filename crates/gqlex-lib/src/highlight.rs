//! ANSI rendering of token streams.
//!
//! Styles follow the token roles:
//! - Magenta: keywords and declarations
//! - Blue: type names
//! - Cyan: directives, fragments, attributes
//! - Yellow: variables, numbers, constants
//! - Green: strings
//! - Dim: comments
//! - Red: unrecognized text

use crate::token::{Token, TokenKind, token_text};

/// ANSI color palette for highlighted output.
///
/// Uses only standard 16-color ANSI codes (no RGB) so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub keyword: &'static str,
    pub type_name: &'static str,
    pub function: &'static str,
    pub attribute: &'static str,
    pub value: &'static str,
    pub string: &'static str,
    pub comment: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        keyword: "\x1b[35m",
        type_name: "\x1b[34m",
        function: "\x1b[36m",
        attribute: "\x1b[36m",
        value: "\x1b[33m",
        string: "\x1b[32m",
        comment: "\x1b[2m",
        error: "\x1b[31m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        keyword: "",
        type_name: "",
        function: "",
        attribute: "",
        value: "",
        string: "",
        comment: "",
        error: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Escape for a token kind, or `""` for kinds rendered unstyled.
    pub fn for_kind(&self, kind: TokenKind) -> &'static str {
        use TokenKind::*;
        match kind {
            Keyword | KeywordDeclaration => self.keyword,
            NameClass => self.type_name,
            NameFunction => self.function,
            NameAttribute => self.attribute,
            NameVariable | NameConstant | KeywordConstant | Integer | Float => self.value,
            String | BlockString => self.string,
            Comment => self.comment,
            Unknown => self.error,
            Whitespace | Operator | Punctuation | Name => "",
        }
    }
}

/// Re-emits `source` with each styled token wrapped in its escape and a reset.
///
/// With [`Colors::OFF`] the output equals the source, since tokens tile it.
pub fn render(source: &str, tokens: &[Token], colors: Colors) -> String {
    let mut out = String::with_capacity(source.len());
    for token in tokens {
        let text = token_text(source, token);
        let style = colors.for_kind(token.kind);
        if style.is_empty() {
            out.push_str(text);
        } else {
            out.push_str(style);
            out.push_str(text);
            out.push_str(colors.reset);
        }
    }
    out
}
