//! Context table: the named rule sets the scanner switches between.
//!
//! # Architecture
//!
//! Contexts are declared as [`ContextDef`]s: ordered [`RuleDef`]s built from `'static`
//! pattern strings. Shared subsets (whitespace, comments, literals, ...) are copied into
//! each definition with [`ContextDef::include`], so a built [`Context`] is one flat list
//! and the scanner never follows include references at runtime.
//!
//! [`ContextTable::build`] compiles every pattern and validates the graph once. A table
//! that passes validation cannot stall the scanner (every rule consumes input) and cannot
//! pop the root context.

mod grammar;
mod matcher;

#[cfg(test)]
mod table_tests;

use std::fmt;
use std::sync::LazyLock;

use crate::token::{Token, TokenKind};

pub(crate) use matcher::Matcher;

/// Re-lexes a matched span, pushing tokens with absolute offsets.
///
/// Arguments: the matched text and its byte offset in the source.
pub type Callback = fn(&str, usize, &mut Vec<Token>);

/// Identifies a lexical context. Also the index into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ContextId {
    Root = 0,
    SchemaDef,
    TypeDef,
    UnionDef,
    FragmentDef,
    DirectiveDef,
    FieldsDef,
    ArgsDef,
    Query,
    QueryArgs,
    FieldsQuery,
    QueryAlias,
    QueryFieldArgs,
}

impl ContextId {
    pub const ALL: [ContextId; 13] = [
        ContextId::Root,
        ContextId::SchemaDef,
        ContextId::TypeDef,
        ContextId::UnionDef,
        ContextId::FragmentDef,
        ContextId::DirectiveDef,
        ContextId::FieldsDef,
        ContextId::ArgsDef,
        ContextId::Query,
        ContextId::QueryArgs,
        ContextId::FieldsQuery,
        ContextId::QueryAlias,
        ContextId::QueryFieldArgs,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContextId::Root => "root",
            ContextId::SchemaDef => "schema-def",
            ContextId::TypeDef => "type-def",
            ContextId::UnionDef => "union-def",
            ContextId::FragmentDef => "fragment-def",
            ContextId::DirectiveDef => "directive-def",
            ContextId::FieldsDef => "fields-def",
            ContextId::ArgsDef => "args-def",
            ContextId::Query => "query",
            ContextId::QueryArgs => "query-args",
            ContextId::FieldsQuery => "fields-query",
            ContextId::QueryAlias => "query-alias",
            ContextId::QueryFieldArgs => "query-field-args",
        }
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack transition applied after a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Push(ContextId),
    Pop,
    PopPush(ContextId),
    /// Re-enter the active context (nested selection sets).
    PushSelf,
}

/// How a match turns into tokens.
#[derive(Debug, Clone, Copy)]
pub enum Emit {
    /// The whole match is one token.
    Token(TokenKind),
    /// One kind per capture group, in order. Empty groups emit nothing.
    Groups(&'static [TokenKind]),
    /// The match is handed to a micro-scanner.
    Callback(Callback),
}

/// What to do when no rule in a context matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Emit a one-character `Unknown` token and stay.
    #[default]
    Unknown,
    /// Pop the context and retry at the same position.
    Pop,
}

/// Uncompiled rule: patterns plus emission and transition.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub pattern: &'static str,
    /// Anchored lookahead that must match at the end of `pattern`'s match.
    pub followed_by: Option<&'static str>,
    pub emit: Emit,
    pub action: Action,
}

impl RuleDef {
    pub const fn token(pattern: &'static str, kind: TokenKind) -> Self {
        Self {
            pattern,
            followed_by: None,
            emit: Emit::Token(kind),
            action: Action::Stay,
        }
    }

    pub const fn groups(pattern: &'static str, kinds: &'static [TokenKind]) -> Self {
        Self {
            pattern,
            followed_by: None,
            emit: Emit::Groups(kinds),
            action: Action::Stay,
        }
    }

    pub const fn callback(pattern: &'static str, callback: Callback) -> Self {
        Self {
            pattern,
            followed_by: None,
            emit: Emit::Callback(callback),
            action: Action::Stay,
        }
    }

    pub const fn followed_by(self, lookahead: &'static str) -> Self {
        Self {
            followed_by: Some(lookahead),
            ..self
        }
    }

    pub const fn push(self, context: ContextId) -> Self {
        self.then(Action::Push(context))
    }

    pub const fn pop(self) -> Self {
        self.then(Action::Pop)
    }

    pub const fn pop_push(self, context: ContextId) -> Self {
        self.then(Action::PopPush(context))
    }

    pub const fn push_self(self) -> Self {
        self.then(Action::PushSelf)
    }

    pub const fn then(self, action: Action) -> Self {
        Self { action, ..self }
    }
}

/// Uncompiled context definition.
#[derive(Debug, Clone)]
pub struct ContextDef {
    pub id: ContextId,
    pub rules: Vec<RuleDef>,
    pub fallback: Fallback,
}

impl ContextDef {
    pub fn new(id: ContextId) -> Self {
        Self {
            id,
            rules: Vec::new(),
            fallback: Fallback::Unknown,
        }
    }

    pub fn rule(mut self, rule: RuleDef) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a shared rule subset in place.
    pub fn include(mut self, rules: &[RuleDef]) -> Self {
        self.rules.extend_from_slice(rules);
        self
    }

    pub fn pop_on_no_match(mut self) -> Self {
        self.fallback = Fallback::Pop;
        self
    }
}

/// Compiled rule.
#[derive(Debug)]
pub struct Rule {
    pub pattern: &'static str,
    pub(crate) matcher: Matcher,
    pub emit: Emit,
    pub action: Action,
}

/// Compiled context: a flat, ordered rule list.
#[derive(Debug)]
pub struct Context {
    pub id: ContextId,
    pub rules: Vec<Rule>,
    pub fallback: Fallback,
}

/// Errors detected while building a context table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid pattern {pattern:?} in context `{context}`: {message}")]
    InvalidPattern {
        context: ContextId,
        pattern: &'static str,
        message: String,
    },

    #[error("pattern {pattern:?} in context `{context}` can match empty input")]
    EmptyMatch {
        context: ContextId,
        pattern: &'static str,
    },

    #[error(
        "pattern {pattern:?} in context `{context}` has {groups} capture groups but {kinds} token kinds"
    )]
    GroupCountMismatch {
        context: ContextId,
        pattern: &'static str,
        groups: usize,
        kinds: usize,
    },

    #[error("context `{0}` is defined more than once")]
    DuplicateContext(ContextId),

    #[error("context `{0}` is referenced but not defined")]
    MissingContext(ContextId),

    #[error("pattern {0:?} would pop the root context")]
    RootPop(&'static str),

    #[error("the root context cannot pop on no match")]
    RootFallback,
}

/// Immutable set of compiled contexts, indexed by [`ContextId`].
#[derive(Debug)]
pub struct ContextTable {
    contexts: Vec<Option<Context>>,
}

static BUILTIN: LazyLock<ContextTable> = LazyLock::new(|| {
    let table = ContextTable::build(grammar::definitions());
    let table = ContextTable::ensure_builtin(table);
    tracing::debug!(
        contexts = table.context_count(),
        rules = table.rule_count(),
        "built GraphQL context table"
    );
    table
});

impl ContextTable {
    /// The GraphQL table, built and validated on first use.
    pub fn builtin() -> &'static ContextTable {
        &BUILTIN
    }

    /// Compiles and validates context definitions.
    pub fn build(defs: Vec<ContextDef>) -> Result<Self, TableError> {
        let mut contexts: Vec<Option<Context>> = ContextId::ALL.iter().map(|_| None).collect();

        for def in defs {
            let slot = &mut contexts[def.id.index()];
            if slot.is_some() {
                return Err(TableError::DuplicateContext(def.id));
            }
            *slot = Some(compile_context(def)?);
        }

        let table = Self { contexts };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TableError> {
        let root = self
            .get(ContextId::Root)
            .ok_or(TableError::MissingContext(ContextId::Root))?;

        if root.fallback == Fallback::Pop {
            return Err(TableError::RootFallback);
        }
        if let Some(rule) = root
            .rules
            .iter()
            .find(|rule| matches!(rule.action, Action::Pop | Action::PopPush(_)))
        {
            return Err(TableError::RootPop(rule.pattern));
        }

        for context in self.contexts.iter().flatten() {
            for rule in &context.rules {
                if let Action::Push(target) | Action::PopPush(target) = rule.action {
                    if self.get(target).is_none() {
                        return Err(TableError::MissingContext(target));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn get(&self, id: ContextId) -> Option<&Context> {
        self.contexts[id.index()].as_ref()
    }

    pub fn context_count(&self) -> usize {
        self.contexts.iter().flatten().count()
    }

    pub fn rule_count(&self) -> usize {
        self.contexts.iter().flatten().map(|c| c.rules.len()).sum()
    }
}

fn compile_context(def: ContextDef) -> Result<Context, TableError> {
    let id = def.id;
    let rules = def
        .rules
        .into_iter()
        .map(|rule| compile_rule(id, rule))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Context {
        id,
        rules,
        fallback: def.fallback,
    })
}

fn compile_rule(context: ContextId, def: RuleDef) -> Result<Rule, TableError> {
    let matcher = Matcher::compile(context, def.pattern, def.followed_by)?;

    if !matches!(matcher::minimum_len(def.pattern), Some(len) if len > 0) {
        return Err(TableError::EmptyMatch {
            context,
            pattern: def.pattern,
        });
    }

    if let Emit::Groups(kinds) = def.emit {
        let groups = matcher.group_count();
        if groups != kinds.len() {
            return Err(TableError::GroupCountMismatch {
                context,
                pattern: def.pattern,
                groups,
                kinds: kinds.len(),
            });
        }
    }

    Ok(Rule {
        pattern: def.pattern,
        matcher,
        emit: def.emit,
        action: def.action,
    })
}
