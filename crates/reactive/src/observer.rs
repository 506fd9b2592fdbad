//! Observer trait and callback-backed observers.
//!
//! An `Observer` is anything that wants to be told when a dependency it has
//! read changes. The engine holds observers behind `Rc<dyn Observer>` and
//! identifies them by pointer, so the same observer read through two
//! different properties is still one subscriber in each registry.

use alloc::boxed::Box;
use alloc::rc::Rc;

/// An entity notified when a dependency it is linked to changes.
///
/// `update` takes no arguments: the observer is expected to re-read whatever
/// state it cares about. It may perform further reactive reads and writes;
/// notification is synchronous and re-entrant.
pub trait Observer {
    /// Called once per write to any property this observer has read.
    fn update(&self);
}

/// Identity of an observer, derived from its `Rc` allocation.
pub type ObserverId = usize;

/// Returns the identity of an observer reference.
///
/// Two `Rc` clones of the same observer share an id; distinct observers
/// never collide while both are alive.
#[inline]
pub fn observer_id(observer: &Rc<dyn Observer>) -> ObserverId {
    Rc::as_ptr(observer) as *const () as usize
}

/// An observer backed by a plain callback.
///
/// This is the usual way drivers construct observers: wrap a closure that
/// re-runs the evaluation, and hand the `Rc` to an `ObserverContext` scope.
pub struct CallbackObserver {
    callback: Box<dyn Fn()>,
}

impl CallbackObserver {
    /// Creates an observer that invokes `callback` on every update.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Creates a shared observer, ready to hand to a registry or context.
    pub fn shared<F>(callback: F) -> Rc<dyn Observer>
    where
        F: Fn() + 'static,
    {
        Rc::new(Self::new(callback))
    }
}

impl Observer for CallbackObserver {
    fn update(&self) {
        (self.callback)();
    }
}
