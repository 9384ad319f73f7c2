//! Anchored regex matching at the scanner cursor.
//!
//! Patterns run against the whole source with the search anchored at the cursor, so
//! look-behind assertions such as `\b` see the preceding text.

use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use regex_automata::{Anchored, Input};

use super::TableError;
use super::ContextId;

#[derive(Debug)]
pub(crate) struct Matcher {
    regex: Regex,
    followed_by: Option<Regex>,
}

impl Matcher {
    pub(crate) fn compile(
        context: ContextId,
        pattern: &'static str,
        followed_by: Option<&'static str>,
    ) -> Result<Self, TableError> {
        let regex = compile_one(context, pattern)?;
        let followed_by = followed_by
            .map(|lookahead| compile_one(context, lookahead))
            .transpose()?;
        Ok(Self { regex, followed_by })
    }

    /// Number of explicit capture groups (group 0 excluded).
    pub(crate) fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub(crate) fn create_captures(&self) -> Captures {
        self.regex.create_captures()
    }

    /// Returns the end offset of a match starting exactly at `at`.
    pub(crate) fn match_at(&self, source: &str, at: usize) -> Option<usize> {
        let input = Input::new(source).range(at..).anchored(Anchored::Yes);
        let end = self.regex.search(&input)?.end();
        self.lookahead_holds(source, end).then_some(end)
    }

    /// Like [`Matcher::match_at`], filling `caps` with group spans.
    pub(crate) fn captures_at(&self, source: &str, at: usize, caps: &mut Captures) -> bool {
        let input = Input::new(source).range(at..).anchored(Anchored::Yes);
        self.regex.search_captures(&input, caps);
        match caps.get_match() {
            Some(m) => self.lookahead_holds(source, m.end()),
            None => false,
        }
    }

    fn lookahead_holds(&self, source: &str, at: usize) -> bool {
        match &self.followed_by {
            Some(lookahead) => {
                lookahead.is_match(Input::new(source).range(at..).anchored(Anchored::Yes))
            }
            None => true,
        }
    }
}

fn compile_one(context: ContextId, pattern: &'static str) -> Result<Regex, TableError> {
    Regex::new(pattern).map_err(|e| TableError::InvalidPattern {
        context,
        pattern,
        message: e.to_string(),
    })
}

/// Shortest text the pattern can match, or `None` when it can never match.
pub(crate) fn minimum_len(pattern: &str) -> Option<usize> {
    regex_syntax::parse(pattern)
        .ok()
        .and_then(|hir| hir.properties().minimum_len())
}
