//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::scanner::ContextStack;
use crate::table::{Context, ContextId, ContextTable, TableError};

impl ContextStack {
    #[inline]
    pub(crate) fn ensure_top(&self) -> ContextId {
        *self
            .frames()
            .last()
            .unwrap_or_else(|| panic!("context stack is empty (root must never be popped)"))
    }

    #[inline]
    pub(crate) fn ensure_poppable(&self) {
        assert!(
            self.can_pop(),
            "broken scanner invariant: pop would remove the root context \
             (table validation must reject root pops)"
        );
    }
}

impl ContextTable {
    pub(crate) fn ensure_builtin(table: Result<ContextTable, TableError>) -> ContextTable {
        table.unwrap_or_else(|err| panic!("built-in GraphQL context table is malformed: {err}"))
    }

    #[inline]
    pub(crate) fn ensure_context(&self, id: ContextId) -> &Context {
        self.get(id).unwrap_or_else(|| {
            panic!("context `{id}` not found (table validation must check every push target)")
        })
    }
}

#[inline]
pub(crate) fn ensure_progress(context: ContextId, pattern: &str, start: usize, end: usize) {
    assert!(
        end > start,
        "rule {pattern:?} in context `{context}` matched empty input at {start} \
         (table validation must reject empty matches)"
    );
}

/// Spans are `u32` offsets, so sources are limited to 4 GiB.
#[inline]
pub(crate) fn ensure_offset(offset: usize) -> u32 {
    u32::try_from(offset)
        .unwrap_or_else(|_| panic!("byte offset {offset} exceeds u32::MAX (sources are limited to 4 GiB)"))
}
