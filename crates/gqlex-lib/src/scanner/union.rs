//! Micro-scanner for union member lists (`A | B | C`).
//!
//! The owning rule matches the whole list as one span; this re-lexes it into members,
//! pipes and whitespace at their absolute offsets without touching the context stack.

use logos::Logos;

use crate::token::{Token, TokenKind, range_to_text_range};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum MemberPiece {
    #[regex(r"\s+")]
    Whitespace,

    #[token("|")]
    Pipe,

    #[regex("[_A-Za-z][_0-9A-Za-z]*")]
    Member,
}

impl MemberPiece {
    fn kind(self) -> TokenKind {
        match self {
            MemberPiece::Whitespace => TokenKind::Whitespace,
            MemberPiece::Pipe => TokenKind::Punctuation,
            MemberPiece::Member => TokenKind::NameClass,
        }
    }
}

pub(crate) fn scan_union_members(text: &str, offset: usize, out: &mut Vec<Token>) {
    let mut lexer = MemberPiece::lexer(text);
    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        // The outer pattern only admits the three pieces, so errors are unreachable in
        // practice; they still cover their text.
        let kind = piece.map_or(TokenKind::Unknown, MemberPiece::kind);
        out.push(Token::new(
            kind,
            range_to_text_range(offset + span.start..offset + span.end),
        ));
    }
}
