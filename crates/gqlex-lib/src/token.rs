//! Token model for the GraphQL scanner.
//!
//! Tokens are span-based: they carry a kind and a byte range, and their text is sliced
//! from the source only when needed (see [`token_text`]).

use rowan::TextRange;
use serde::Serialize;
use std::ops::Range;

use crate::invariants::ensure_offset;

/// Lexical classification of a token.
///
/// The set is closed. Highlighters map each kind to a style, either directly or through
/// [`TokenKind::class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    /// Spaces, tabs, line breaks, commas and the byte order mark.
    Whitespace,
    /// `#` line comment.
    Comment,

    /// `query`, `implements`, `on`, `extend`, `scalar`, ...
    Keyword,
    /// `type`, `interface`, `input`, `enum`, `union`, `schema`, `fragment`, `directive`
    KeywordDeclaration,
    /// `true`, `false`, `null`
    KeywordConstant,

    /// `!`, `=`, `...`
    Operator,
    Punctuation,

    /// Selected fields, type references and otherwise unclassified identifiers.
    Name,
    /// Declared type names, union members, type conditions, operation names.
    NameClass,
    /// Directive and fragment names.
    NameFunction,
    /// Declared fields and arguments, aliases, call-site argument names.
    NameAttribute,
    /// `$variable` references.
    NameVariable,
    /// Directive locations (`FIELD_DEFINITION`, ...).
    NameConstant,

    String,
    /// `"""block string"""`
    BlockString,
    Integer,
    Float,

    /// A single character no rule in the active context accepts.
    Unknown,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == TokenKind::Unknown
    }

    /// Short style class, compatible with the classes Pygments-style themes use.
    pub fn class(self) -> &'static str {
        use TokenKind::*;
        match self {
            Whitespace => "w",
            Comment => "c1",
            Keyword => "k",
            KeywordDeclaration => "kd",
            KeywordConstant => "kc",
            Operator => "o",
            Punctuation => "p",
            Name => "n",
            NameClass => "nc",
            NameFunction => "nf",
            NameAttribute => "na",
            NameVariable => "nv",
            NameConstant => "no",
            String => "s2",
            BlockString => "sd",
            Integer => "mi",
            Float => "mf",
            Unknown => "err",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        u32::from(self.span.start()) as usize
    }

    #[inline]
    pub fn end(&self) -> usize {
        u32::from(self.span.end()) as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        u32::from(self.span.len()) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Panics if either end lies past `u32::MAX`; spans cannot address more than 4 GiB.
pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new(
        ensure_offset(range.start).into(),
        ensure_offset(range.end).into(),
    )
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[Range::<usize>::from(token.span)]
}
