//! Active observer context.
//!
//! The context answers one question during a property read: which observer,
//! if any, is currently evaluating? Instead of a process-wide slot, the
//! context is an explicit value passed by reference through reads, with a
//! save/restore stack so nested evaluations restore the outer observer on
//! exit instead of clearing it.
//!
//! Discipline is the caller's obligation: enter before evaluating an
//! observer's body, exit after. The engine does not detect a missed exit;
//! misuse shows up as mis-attributed dependency edges, not an error.

use crate::observer::Observer;
use alloc::rc::Rc;
use alloc::vec::Vec;

/// The stack of currently-evaluating observers.
///
/// The innermost (most recently entered) observer is the one that receives
/// new dependency edges from reads.
pub struct ObserverContext {
    stack: Vec<Rc<dyn Observer>>,
}

impl Default for ObserverContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverContext {
    /// Creates a context with no active observer.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Returns the innermost active observer, if any.
    #[inline]
    pub fn current(&self) -> Option<&Rc<dyn Observer>> {
        self.stack.last()
    }

    /// Returns true if some observer is currently active.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the nesting depth of active evaluations.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Makes `observer` the active one until the matching `exit`.
    pub fn enter(&mut self, observer: Rc<dyn Observer>) {
        self.stack.push(observer);
    }

    /// Ends the innermost evaluation, restoring the previous observer.
    ///
    /// Returns the observer that was active, or None if the stack was
    /// already empty.
    pub fn exit(&mut self) -> Option<Rc<dyn Observer>> {
        self.stack.pop()
    }

    /// Runs `f` with `observer` active, restoring the previous observer
    /// afterwards.
    ///
    /// This is the preferred entry point for evaluation drivers: the
    /// save/restore pairing cannot be forgotten.
    pub fn scope<R>(
        &mut self,
        observer: Rc<dyn Observer>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.enter(observer);
        let result = f(self);
        self.exit();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{observer_id, CallbackObserver};

    #[test]
    fn test_context_empty() {
        let ctx = ObserverContext::new();
        assert!(ctx.current().is_none());
        assert!(!ctx.is_tracking());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_context_enter_exit() {
        let mut ctx = ObserverContext::new();
        let observer = CallbackObserver::shared(|| {});

        ctx.enter(observer.clone());
        assert!(ctx.is_tracking());
        assert_eq!(
            ctx.current().map(observer_id),
            Some(observer_id(&observer))
        );

        let popped = ctx.exit().unwrap();
        assert_eq!(observer_id(&popped), observer_id(&observer));
        assert!(!ctx.is_tracking());
    }

    #[test]
    fn test_context_exit_empty() {
        let mut ctx = ObserverContext::new();
        assert!(ctx.exit().is_none());
    }

    #[test]
    fn test_context_scope_restores() {
        let mut ctx = ObserverContext::new();
        let observer = CallbackObserver::shared(|| {});

        let depth_inside = ctx.scope(observer, |ctx| ctx.depth());

        assert_eq!(depth_inside, 1);
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_context_nested_scopes_restore_outer() {
        let mut ctx = ObserverContext::new();
        let outer = CallbackObserver::shared(|| {});
        let inner = CallbackObserver::shared(|| {});

        let outer_id = observer_id(&outer);
        let inner_id = observer_id(&inner);

        ctx.scope(outer, |ctx| {
            assert_eq!(ctx.current().map(observer_id), Some(outer_id));

            ctx.scope(inner.clone(), |ctx| {
                assert_eq!(ctx.current().map(observer_id), Some(inner_id));
                assert_eq!(ctx.depth(), 2);
            });

            // Inner evaluation done: the outer observer is active again,
            // so subsequent reads are attributed correctly.
            assert_eq!(ctx.current().map(observer_id), Some(outer_id));
        });

        assert!(ctx.current().is_none());
    }
}
