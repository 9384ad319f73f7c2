use std::path::Path;

use crate::descriptor::GRAPHQL;

#[test]
fn aliases_match_case_insensitively() {
    assert!(GRAPHQL.matches_alias("graphql"));
    assert!(GRAPHQL.matches_alias("GQL"));
    assert!(GRAPHQL.matches_alias("GraphQL"));
    assert!(!GRAPHQL.matches_alias("json"));
}

#[test]
fn filenames_match_globs() {
    assert!(GRAPHQL.matches_filename(Path::new("schema.graphql")));
    assert!(GRAPHQL.matches_filename(Path::new("src/queries/hero.gql")));
    assert!(!GRAPHQL.matches_filename(Path::new("schema.graphqls")));
    assert!(!GRAPHQL.matches_filename(Path::new("graphql")));
    assert!(!GRAPHQL.matches_filename(Path::new(".gql")));
    assert!(!GRAPHQL.matches_filename(Path::new("")));
}

#[test]
fn mimetype_ignores_parameters() {
    assert!(GRAPHQL.matches_mimetype("application/graphql"));
    assert!(GRAPHQL.matches_mimetype("Application/GraphQL; charset=utf-8"));
    assert!(!GRAPHQL.matches_mimetype("application/json"));
}

#[test]
fn descriptor_serializes() {
    let json = serde_json::to_string_pretty(&GRAPHQL).expect("serialize");
    insta::assert_snapshot!(json, @r#"
    {
      "name": "GraphQL",
      "aliases": [
        "graphql",
        "gql"
      ],
      "filenames": [
        "*.graphql",
        "*.gql"
      ],
      "mimetypes": [
        "application/graphql"
      ]
    }
    "#);
}
