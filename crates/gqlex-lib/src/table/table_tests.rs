use super::{ContextDef, ContextId, ContextTable, RuleDef, TableError};
use crate::scanner::Scanner;
use crate::token::TokenKind::{
    Integer, Name, NameAttribute, NameFunction, Punctuation, Whitespace,
};
use crate::token::token_text;

fn scan_with(table: &ContextTable, source: &str) -> String {
    Scanner::with_table(source, table)
        .map(|t| format!("{:?} {:?}\n", t.kind, token_text(source, &t)))
        .collect()
}

fn build_err(defs: Vec<ContextDef>) -> TableError {
    ContextTable::build(defs).expect_err("table should be rejected")
}

#[test]
fn builtin_defines_every_context() {
    let table = ContextTable::builtin();
    assert_eq!(table.context_count(), ContextId::ALL.len());
    for id in ContextId::ALL {
        let context = table.get(id).expect("context defined");
        assert_eq!(context.id, id);
        assert!(!context.rules.is_empty(), "{id} has no rules");
    }
}

#[test]
fn builtin_is_shared() {
    assert!(std::ptr::eq(ContextTable::builtin(), ContextTable::builtin()));
}

#[test]
fn context_names() {
    let names: Vec<_> = ContextId::ALL.iter().map(|id| id.to_string()).collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    root
    schema-def
    type-def
    union-def
    fragment-def
    directive-def
    fields-def
    args-def
    query
    query-args
    fields-query
    query-alias
    query-field-args
    ");
}

#[test]
fn custom_table_push_and_pop() {
    let table = ContextTable::build(vec![
        ContextDef::new(ContextId::Root)
            .rule(RuleDef::token("[a-z]+", Name))
            .rule(RuleDef::token(r"\{", Punctuation).push(ContextId::FieldsQuery)),
        ContextDef::new(ContextId::FieldsQuery)
            .rule(RuleDef::token(r"\}", Punctuation).pop())
            .rule(RuleDef::token("[0-9]+", Integer)),
    ])
    .expect("valid table");

    insta::assert_snapshot!(scan_with(&table, "ab{12}c!"), @r#"
    Name "ab"
    Punctuation "{"
    Integer "12"
    Punctuation "}"
    Name "c"
    Unknown "!"
    "#);
}

#[test]
fn pop_fallback_retries_in_parent() {
    let table = ContextTable::build(vec![
        ContextDef::new(ContextId::Root)
            .rule(RuleDef::token("x", Name))
            .rule(RuleDef::token(r"\(", Punctuation).push(ContextId::Query)),
        ContextDef::new(ContextId::Query)
            .rule(RuleDef::token("[0-9]", Integer))
            .pop_on_no_match(),
    ])
    .expect("valid table");

    let source = "(1x";
    let mut scanner = Scanner::with_table(source, &table);
    let tokens: Vec<_> = scanner
        .by_ref()
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, &t)))
        .collect();
    assert_eq!(tokens, ["Punctuation \"(\"", "Integer \"1\"", "Name \"x\""]);
    assert_eq!(scanner.depth(), 1);
}

#[test]
fn lookahead_gates_a_rule() {
    let table = ContextTable::build(vec![
        ContextDef::new(ContextId::Root)
            .rule(RuleDef::token("[a-z]+", NameAttribute).followed_by(r"\s*:"))
            .rule(RuleDef::token("[a-z]+", Name))
            .rule(RuleDef::token(r"[:\s]+", Punctuation)),
    ])
    .expect("valid table");

    insta::assert_snapshot!(scan_with(&table, "key : value"), @r#"
    NameAttribute "key"
    Punctuation " : "
    Name "value"
    "#);
}

#[test]
fn group_rule_skips_empty_groups() {
    let table = ContextTable::build(vec![ContextDef::new(ContextId::Root).rule(RuleDef::groups(
        r"(@[a-z]+)(\s*)(\()",
        &[NameFunction, Whitespace, Punctuation],
    ))])
    .expect("valid table");

    insta::assert_snapshot!(scan_with(&table, "@a(@b ("), @r#"
    NameFunction "@a"
    Punctuation "("
    NameFunction "@b"
    Whitespace " "
    Punctuation "("
    "#);
}

#[test]
fn rejects_invalid_pattern() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root).rule(RuleDef::token("(", Punctuation)),
    ]);
    assert!(
        matches!(
            err,
            TableError::InvalidPattern {
                context: ContextId::Root,
                pattern: "(",
                ..
            }
        ),
        "{err:?}"
    );
}

#[test]
fn rejects_empty_match() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root).rule(RuleDef::token(r"\s*", Whitespace)),
    ]);
    assert_eq!(
        err,
        TableError::EmptyMatch {
            context: ContextId::Root,
            pattern: r"\s*",
        }
    );
    insta::assert_snapshot!(err, @r#"pattern "\\s*" in context `root` can match empty input"#);
}

#[test]
fn rejects_group_count_mismatch() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root).rule(RuleDef::groups("(a)(b)", &[Name])),
    ]);
    assert_eq!(
        err,
        TableError::GroupCountMismatch {
            context: ContextId::Root,
            pattern: "(a)(b)",
            groups: 2,
            kinds: 1,
        }
    );
}

#[test]
fn rejects_duplicate_context() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root).rule(RuleDef::token("a", Name)),
        ContextDef::new(ContextId::Root).rule(RuleDef::token("b", Name)),
    ]);
    assert_eq!(err, TableError::DuplicateContext(ContextId::Root));
}

#[test]
fn rejects_missing_root() {
    let err = build_err(vec![
        ContextDef::new(ContextId::FieldsQuery).rule(RuleDef::token("a", Name)),
    ]);
    assert_eq!(err, TableError::MissingContext(ContextId::Root));
}

#[test]
fn rejects_missing_push_target() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root)
            .rule(RuleDef::token(r"\{", Punctuation).push(ContextId::FieldsQuery)),
    ]);
    assert_eq!(err, TableError::MissingContext(ContextId::FieldsQuery));
    insta::assert_snapshot!(err, @"context `fields-query` is referenced but not defined");
}

#[test]
fn rejects_root_pop() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root).rule(RuleDef::token(r"\}", Punctuation).pop()),
    ]);
    assert_eq!(err, TableError::RootPop(r"\}"));
}

#[test]
fn rejects_root_pop_fallback() {
    let err = build_err(vec![
        ContextDef::new(ContextId::Root)
            .rule(RuleDef::token("a", Name))
            .pop_on_no_match(),
    ]);
    assert_eq!(err, TableError::RootFallback);
}

#[test]
fn build_table_wraps_errors() {
    let err = crate::build_table(vec![]).expect_err("no root");
    assert_eq!(err, crate::Error::Table(TableError::MissingContext(ContextId::Root)));
    insta::assert_snapshot!(err, @"invalid context table: context `root` is referenced but not defined");
}
