//! Per-property subscriber registry.
//!
//! Every instrumented property slot owns one `Dep`. Reads under an active
//! observer register that observer here; writes fan out through `notify`.
//! The registry only ever grows on its own — `remove` exists but is never
//! called automatically when an observer stops depending on a property.

use crate::observer::{observer_id, Observer, ObserverId};
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

/// A per-property container of interested observers.
///
/// Subscribers are held as weak references keyed by identity, in insertion
/// order, with no duplicates. The registry does not own observer lifecycles:
/// a dropped observer is silently skipped at notification time.
pub struct Dep {
    /// Subscribers in insertion order, identity-deduplicated.
    subs: RefCell<Vec<(ObserverId, Weak<dyn Observer>)>>,
}

impl Default for Dep {
    fn default() -> Self {
        Self::new()
    }
}

impl Dep {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            subs: RefCell::new(Vec::new()),
        }
    }

    /// Registers an observer.
    ///
    /// Idempotent: an observer already present is not added again, so a
    /// property read twice under the same active observer still yields one
    /// `update` per write.
    pub fn add(&self, observer: &Rc<dyn Observer>) {
        let id = observer_id(observer);
        let mut subs = self.subs.borrow_mut();
        if !subs.iter().any(|(existing, _)| *existing == id) {
            subs.push((id, Rc::downgrade(observer)));
        }
    }

    /// Removes an observer if present.
    ///
    /// Returns true if the observer was found and removed. The engine never
    /// calls this on its own; it is an explicit operation for callers.
    pub fn remove(&self, observer: &Rc<dyn Observer>) -> bool {
        self.remove_id(observer_id(observer))
    }

    /// Removes a subscriber by identity.
    pub fn remove_id(&self, id: ObserverId) -> bool {
        let mut subs = self.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(existing, _)| *existing != id);
        subs.len() != before
    }

    /// Returns true if the observer is currently registered.
    pub fn contains(&self, observer: &Rc<dyn Observer>) -> bool {
        let id = observer_id(observer);
        self.subs
            .borrow()
            .iter()
            .any(|(existing, _)| *existing == id)
    }

    /// Invokes `update` on every live subscriber, in insertion order.
    ///
    /// Iterates a snapshot taken before the first call: an `update` that
    /// registers new subscribers on this same registry is tolerated, and the
    /// newcomers are notified starting from the next write. Dropped
    /// observers are skipped.
    pub fn notify(&self) {
        let snapshot: Vec<Weak<dyn Observer>> = self
            .subs
            .borrow()
            .iter()
            .map(|(_, weak)| weak.clone())
            .collect();

        for weak in snapshot {
            if let Some(observer) = weak.upgrade() {
                observer.update();
            }
        }
    }

    /// Returns the number of live subscribers.
    pub fn len(&self) -> usize {
        self.subs
            .borrow()
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    /// Returns true if there are no live subscribers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
