use crate::token::{Token, TokenKind, range_to_text_range, token_text};

#[test]
fn trivia_and_error_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::String.is_trivia());
    assert!(TokenKind::Unknown.is_error());
    assert!(!TokenKind::Name.is_error());
}

#[test]
fn short_classes() {
    use TokenKind::*;
    let kinds = [
        Whitespace,
        Comment,
        Keyword,
        KeywordDeclaration,
        KeywordConstant,
        Operator,
        Punctuation,
        Name,
        NameClass,
        NameFunction,
        NameAttribute,
        NameVariable,
        NameConstant,
        String,
        BlockString,
        Integer,
        Float,
        Unknown,
    ];
    let classes: Vec<_> = kinds.iter().map(|k| format!("{k:?} {}", k.class())).collect();
    insta::assert_snapshot!(classes.join("\n"), @r"
    Whitespace w
    Comment c1
    Keyword k
    KeywordDeclaration kd
    KeywordConstant kc
    Operator o
    Punctuation p
    Name n
    NameClass nc
    NameFunction nf
    NameAttribute na
    NameVariable nv
    NameConstant no
    String s2
    BlockString sd
    Integer mi
    Float mf
    Unknown err
    ");
}

#[test]
fn span_accessors_and_text() {
    let source = "type Émoji";
    let token = Token::new(TokenKind::NameClass, range_to_text_range(5..11));
    assert_eq!(token.start(), 5);
    assert_eq!(token.end(), 11);
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
    assert_eq!(token_text(source, &token), "Émoji");
}

#[test]
fn span_at_u32_limit() {
    let end = u32::MAX as usize;
    let token = Token::new(TokenKind::String, range_to_text_range(end - 3..end));
    assert_eq!(token.start(), end - 3);
    assert_eq!(token.end(), end);
}

#[test]
#[cfg(target_pointer_width = "64")]
#[should_panic(expected = "exceeds u32::MAX")]
fn span_past_u32_limit_panics() {
    let end = u32::MAX as usize + 1;
    range_to_text_range(0..end);
}

#[test]
fn kind_serializes_as_variant_name() {
    let json = serde_json::to_string(&TokenKind::NameAttribute).expect("serialize");
    assert_eq!(json, r#""NameAttribute""#);
}
