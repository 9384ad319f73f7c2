//! GraphQL context definitions.
//!
//! Rule order inside a context is significant: the first matching rule wins, so keyword
//! rules come before the identifier rules they would otherwise lose to.

use super::{ContextDef, ContextId, RuleDef};
use crate::scanner::union::scan_union_members;
use crate::token::TokenKind::*;

macro_rules! name {
    () => {
        "[_A-Za-z][_0-9A-Za-z]*"
    };
}

macro_rules! ident {
    () => {
        r"[A-Za-z_]\w*"
    };
}

const WHITESPACE: &[RuleDef] = &[RuleDef::token(r"[ \t\n\r,\x{FEFF}]+", Whitespace)];

const COMMENT: &[RuleDef] = &[RuleDef::token(r"#[^\r\n]*", Comment)];

const BLOCK_STRING: &str = r#""""(?:\\"""|[^"\\]|\\.|"[^"]|""[^"])*""""#;
const STRING: &str = r#""(?:\\.|[^\\"])*""#;

const LITERAL: &[RuleDef] = &[
    RuleDef::token(BLOCK_STRING, BlockString),
    RuleDef::token(STRING, String),
    RuleDef::token(
        r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+(?:[eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)",
        Float,
    ),
    RuleDef::token(r"-?(?:0|[1-9][0-9]*)", Integer),
    RuleDef::token(r"\b(?:true|false|null)\b", KeywordConstant),
];

const DIRECTIVE: &[RuleDef] = &[
    RuleDef::groups(
        concat!("(@", name!(), r")(\s*)(\()"),
        &[NameFunction, Whitespace, Punctuation],
    )
    .push(ContextId::QueryFieldArgs),
    RuleDef::token(concat!("@", name!()), NameFunction),
];

const OPERATORS: &[RuleDef] = &[
    RuleDef::token(r"!|=|\.{3}", Operator),
    RuleDef::token(r"[!(){|}\[\]:=,]", Punctuation),
    RuleDef::token(concat!(r"\$", ident!()), NameVariable),
    RuleDef::token(name!(), Name),
];

/// `: Type`, `: [Type!]` after a declared field or argument.
const TYPE_REF: RuleDef = RuleDef::groups(concat!(r":[\s\[]*(", ident!(), ")"), &[Name]);

fn common(def: ContextDef) -> ContextDef {
    def.include(COMMENT)
        .include(WHITESPACE)
        .include(LITERAL)
        .include(OPERATORS)
}

pub(super) fn definitions() -> Vec<ContextDef> {
    vec![
        root(),
        schema_def(),
        type_def(),
        union_def(),
        fragment_def(),
        directive_def(),
        fields_def(),
        args_def(),
        query(),
        query_args(),
        fields_query(),
        query_alias(),
        query_field_args(),
    ]
}

fn root() -> ContextDef {
    ContextDef::new(ContextId::Root)
        .include(WHITESPACE)
        .include(COMMENT)
        // descriptions
        .rule(RuleDef::token(BLOCK_STRING, BlockString))
        .rule(RuleDef::token(STRING, String))
        .rule(RuleDef::token(r"schema\b", KeywordDeclaration).push(ContextId::SchemaDef))
        .rule(
            RuleDef::groups(
                concat!(r"(type|interface|input|enum)\b(\s*)(", name!(), ")"),
                &[KeywordDeclaration, Whitespace, NameClass],
            )
            .push(ContextId::TypeDef),
        )
        .rule(RuleDef::token(r"union\b", KeywordDeclaration).push(ContextId::UnionDef))
        .rule(RuleDef::token(ident!(), NameAttribute).followed_by(r"\s*:"))
        .rule(RuleDef::token(r"fragment\b", KeywordDeclaration).push(ContextId::FragmentDef))
        .rule(RuleDef::token(r"(?:query|mutation|subscription)\b", Keyword).push(ContextId::Query))
        .rule(
            RuleDef::groups(
                concat!(r"(extend)\b(\s*)(type)\b(\s*)(", name!(), r")(\s*)(\{)"),
                &[
                    Keyword,
                    Whitespace,
                    KeywordDeclaration,
                    Whitespace,
                    NameClass,
                    Whitespace,
                    Punctuation,
                ],
            )
            .push(ContextId::FieldsDef),
        )
        .rule(RuleDef::token(r"extend\b", Keyword))
        .rule(
            RuleDef::groups(
                concat!(r"(directive)\b(\s*)(@", name!(), ")"),
                &[KeywordDeclaration, Whitespace, NameFunction],
            )
            .push(ContextId::DirectiveDef),
        )
        .rule(RuleDef::token(r"\{", Punctuation).push(ContextId::FieldsQuery))
        .rule(RuleDef::groups(
            concat!(r"(scalar)\b(\s*)(", name!(), ")"),
            &[Keyword, Whitespace, NameClass],
        ))
}

fn schema_def() -> ContextDef {
    ContextDef::new(ContextId::SchemaDef)
        .include(WHITESPACE)
        .include(COMMENT)
        .include(DIRECTIVE)
        .rule(RuleDef::token(r"\{", Punctuation).pop_push(ContextId::FieldsDef))
        .pop_on_no_match()
}

fn type_def() -> ContextDef {
    ContextDef::new(ContextId::TypeDef)
        // `implements A, B`: a bare name only counts when a comma precedes it
        .rule(RuleDef::groups(
            concat!(r"(\s*,[\s,]*)(", name!(), ")"),
            &[Whitespace, Name],
        ))
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::groups(
            concat!(r"(implements)\b(\s*)(", name!(), ")"),
            &[Keyword, Whitespace, Name],
        ))
        .rule(RuleDef::groups(
            concat!(r"(&)(\s*)(", name!(), ")"),
            &[Punctuation, Whitespace, Name],
        ))
        .include(DIRECTIVE)
        .rule(RuleDef::token(r"\{", Punctuation).pop_push(ContextId::FieldsDef))
        .pop_on_no_match()
}

fn union_def() -> ContextDef {
    ContextDef::new(ContextId::UnionDef)
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::token(name!(), NameClass).followed_by(r"\s*[=@]"))
        .rule(RuleDef::token("=", Punctuation))
        .include(DIRECTIVE)
        .rule(
            RuleDef::callback(
                concat!(r"\|?\s*", name!(), r"(?:\s*\|\s*", name!(), ")*"),
                scan_union_members,
            )
            .pop(),
        )
        .pop_on_no_match()
}

fn fragment_def() -> ContextDef {
    ContextDef::new(ContextId::FragmentDef)
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::groups(
            concat!("(", name!(), r")(\s+)(on)\b(\s+)(", name!(), ")"),
            &[NameFunction, Whitespace, Keyword, Whitespace, NameClass],
        ))
        .include(DIRECTIVE)
        .rule(RuleDef::token(r"\{", Punctuation).pop_push(ContextId::FieldsQuery))
        .pop_on_no_match()
}

fn directive_def() -> ContextDef {
    ContextDef::new(ContextId::DirectiveDef)
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::ArgsDef))
        .rule(RuleDef::token(r"(?:on|repeatable)\b", Keyword))
        .rule(RuleDef::token(r"\|", Punctuation))
        .rule(RuleDef::token(r"[A-Z_][A-Z0-9_]*\b", NameConstant))
        .pop_on_no_match()
}

fn fields_def() -> ContextDef {
    let def = ContextDef::new(ContextId::FieldsDef)
        .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::ArgsDef))
        .rule(RuleDef::token(ident!(), NameAttribute).followed_by(r"\s*[:(]"))
        .rule(TYPE_REF)
        .rule(RuleDef::token(r"\}", Punctuation).pop())
        .include(DIRECTIVE);
    common(def)
}

fn args_def() -> ContextDef {
    let def = ContextDef::new(ContextId::ArgsDef)
        .rule(RuleDef::token(ident!(), NameAttribute).followed_by(r"\s*:"))
        .rule(TYPE_REF)
        .rule(RuleDef::token(r"\)", Punctuation).pop())
        .include(DIRECTIVE);
    common(def)
}

fn query() -> ContextDef {
    ContextDef::new(ContextId::Query)
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::token(name!(), NameClass))
        .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::QueryArgs))
        .rule(RuleDef::token(r"\{", Punctuation).pop_push(ContextId::FieldsQuery))
        .include(DIRECTIVE)
        .pop_on_no_match()
}

fn query_args() -> ContextDef {
    let def = ContextDef::new(ContextId::QueryArgs)
        .rule(RuleDef::groups(
            concat!(r"(\$", name!(), r")(\s*)(:)"),
            &[NameAttribute, Whitespace, Punctuation],
        ))
        .rule(RuleDef::token(r"\)", Punctuation).pop())
        .include(DIRECTIVE);
    common(def)
}

fn fields_query() -> ContextDef {
    let def = ContextDef::new(ContextId::FieldsQuery)
        // alias
        .rule(RuleDef::token(name!(), NameAttribute).followed_by(r"\s*:"))
        .rule(RuleDef::token(name!(), Name))
        .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::QueryFieldArgs))
        .rule(RuleDef::token(":", Punctuation).push(ContextId::QueryAlias))
        .rule(RuleDef::token(r"\}", Punctuation).pop())
        .rule(RuleDef::token(r"\{", Punctuation).push_self())
        .rule(RuleDef::groups(
            concat!(r"(\.{3})(\s*)(on)\b(\s*)(", name!(), ")"),
            &[Operator, Whitespace, Keyword, Whitespace, NameClass],
        ))
        .rule(RuleDef::groups(
            concat!(r"(\.{3})(\s*)(", name!(), ")"),
            &[Operator, Whitespace, NameFunction],
        ))
        .include(DIRECTIVE);
    common(def)
}

fn query_alias() -> ContextDef {
    ContextDef::new(ContextId::QueryAlias)
        .include(WHITESPACE)
        .include(COMMENT)
        .rule(RuleDef::token(name!(), Name).pop())
        .rule(RuleDef::token(r"\)", Punctuation).pop())
        .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::QueryFieldArgs))
        .rule(RuleDef::token(r"\{", Punctuation).pop_push(ContextId::FieldsQuery))
        .pop_on_no_match()
}

fn query_field_args() -> ContextDef {
    let def = ContextDef::new(ContextId::QueryFieldArgs)
        .rule(RuleDef::groups(
            concat!("(", name!(), r")(\s*)(:)"),
            &[NameAttribute, Whitespace, Punctuation],
        ))
        .rule(RuleDef::token(r"\)", Punctuation).pop());
    common(def)
}
