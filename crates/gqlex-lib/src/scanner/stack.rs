//! Per-scan context stack.

use crate::table::ContextId;

/// Active contexts, innermost last. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextStack {
    frames: Vec<ContextId>,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ContextId::Root],
        }
    }

    #[inline]
    pub fn top(&self) -> ContextId {
        self.ensure_top()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[ContextId] {
        &self.frames
    }

    pub fn push(&mut self, context: ContextId) {
        tracing::trace!(%context, depth = self.frames.len() + 1, "push");
        self.frames.push(context);
    }

    pub fn pop(&mut self) -> ContextId {
        self.ensure_poppable();
        let popped = self.ensure_top();
        self.frames.pop();
        tracing::trace!(context = %popped, depth = self.frames.len(), "pop");
        popped
    }

    /// Whether a pop would leave at least the root behind.
    #[inline]
    pub fn can_pop(&self) -> bool {
        self.frames.len() > 1
    }
}
