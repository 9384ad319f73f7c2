//! Stateful scanner driving the context table.
//!
//! # Algorithm
//!
//! At each position the scanner consults the context on top of its stack and takes the
//! first rule that matches there. The rule's tokens are emitted, the cursor moves past the
//! match, and the rule's action adjusts the stack. When nothing matches, a context that
//! pops on no match is popped and the position retried; otherwise one character becomes
//! an `Unknown` token. Every step either consumes input or pops, so the scan terminates
//! and the tokens tile the source.
//!
//! The scanner is a lazy iterator. Rules that produce several tokens buffer them in a
//! small queue that drains before the next step.
//!
//! Spans are `u32` offsets, so a source may be at most 4 GiB long.

mod stack;
pub(crate) mod union;


use std::collections::VecDeque;

pub use stack::ContextStack;

use crate::invariants::ensure_progress;
use crate::table::{Action, ContextId, ContextTable, Emit, Fallback, Rule};
use crate::token::{Token, TokenKind, range_to_text_range};

/// Tokenizes `source` eagerly.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Single-use scanner over one document.
#[derive(Debug)]
pub struct Scanner<'src, 't> {
    source: &'src str,
    table: &'t ContextTable,
    stack: ContextStack,
    pos: usize,
    pending: VecDeque<Token>,
    scratch: Vec<Token>,
}

impl<'src> Scanner<'src, 'static> {
    /// Scanner using the built-in GraphQL table.
    pub fn new(source: &'src str) -> Self {
        Self::with_table(source, ContextTable::builtin())
    }
}

impl<'src, 't> Scanner<'src, 't> {
    pub fn with_table(source: &'src str, table: &'t ContextTable) -> Self {
        Self {
            source,
            table,
            stack: ContextStack::new(),
            pos: 0,
            pending: VecDeque::new(),
            scratch: Vec::new(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current stack depth (1 when only the root is active).
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Active contexts, innermost last.
    pub fn stack(&self) -> &[ContextId] {
        self.stack.frames()
    }

    /// Scans until at least one token is queued or the input is exhausted.
    fn step(&mut self) {
        let table = self.table;
        loop {
            let context = table.ensure_context(self.stack.top());

            if let Some(rule) = context
                .rules
                .iter()
                .find_map(|rule| self.try_rule(context.id, rule))
            {
                self.apply(rule);
                return;
            }

            if context.fallback == Fallback::Pop && self.stack.can_pop() {
                tracing::trace!(context = %context.id, at = self.pos, "no match, popping");
                self.stack.pop();
                continue;
            }

            self.emit_unknown();
            return;
        }
    }

    /// Emits the rule's tokens if it matches at the cursor, returning its action.
    fn try_rule(&mut self, context: ContextId, rule: &Rule) -> Option<Action> {
        let start = self.pos;
        let end = match rule.emit {
            Emit::Groups(kinds) => self.emit_groups(rule, kinds)?,
            Emit::Token(kind) => {
                let end = rule.matcher.match_at(self.source, start)?;
                self.pending
                    .push_back(Token::new(kind, range_to_text_range(start..end)));
                end
            }
            Emit::Callback(callback) => {
                let end = rule.matcher.match_at(self.source, start)?;
                self.scratch.clear();
                callback(&self.source[start..end], start, &mut self.scratch);
                self.pending.extend(self.scratch.drain(..));
                end
            }
        };

        ensure_progress(context, rule.pattern, start, end);
        self.pos = end;
        Some(rule.action)
    }

    fn emit_groups(&mut self, rule: &Rule, kinds: &[TokenKind]) -> Option<usize> {
        let mut caps = rule.matcher.create_captures();
        if !rule.matcher.captures_at(self.source, self.pos, &mut caps) {
            return None;
        }
        let whole = caps.get_match()?;

        let mut cursor = whole.start();
        for (idx, &kind) in kinds.iter().enumerate() {
            let Some(span) = caps.get_group(idx + 1) else {
                continue;
            };
            if span.is_empty() {
                continue;
            }
            self.emit_filler(cursor, span.start);
            self.pending
                .push_back(Token::new(kind, range_to_text_range(span.start..span.end)));
            cursor = span.end;
        }
        self.emit_filler(cursor, whole.end());

        Some(whole.end())
    }

    /// Covers text a rule consumed outside its groups: whitespace runs, then single
    /// punctuation characters.
    fn emit_filler(&mut self, start: usize, end: usize) {
        let source = self.source;
        let mut run_start: Option<usize> = None;
        for (offset, ch) in source[start..end].char_indices() {
            let at = start + offset;
            if ch.is_whitespace() || ch == ',' {
                run_start.get_or_insert(at);
                continue;
            }
            if let Some(ws) = run_start.take() {
                self.pending.push_back(Token::new(
                    TokenKind::Whitespace,
                    range_to_text_range(ws..at),
                ));
            }
            self.pending.push_back(Token::new(
                TokenKind::Punctuation,
                range_to_text_range(at..at + ch.len_utf8()),
            ));
        }
        if let Some(ws) = run_start {
            self.pending.push_back(Token::new(
                TokenKind::Whitespace,
                range_to_text_range(ws..end),
            ));
        }
    }

    fn emit_unknown(&mut self) {
        let start = self.pos;
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = start + width;
        tracing::trace!(context = %self.stack.top(), at = start, "unrecognized character");
        self.pending.push_back(Token::new(
            TokenKind::Unknown,
            range_to_text_range(start..end),
        ));
        self.pos = end;
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Stay => {}
            Action::Push(context) => self.stack.push(context),
            Action::Pop => {
                self.stack.pop();
            }
            Action::PopPush(context) => {
                self.stack.pop();
                self.stack.push(context);
            }
            Action::PushSelf => self.stack.push(self.stack.top()),
        }
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pending.is_empty() {
            if self.pos >= self.source.len() {
                return None;
            }
            self.step();
        }
        self.pending.pop_front()
    }
}
