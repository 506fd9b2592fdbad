//! Reactive instrumentation.
//!
//! `observe` turns a plain `Data` tree into a self-reporting one: every
//! field of every aggregate gets its own subscriber registry, and all reads
//! and writes go through accessors that link reads to the active observer
//! and writes to notification.
//!
//! Instrumentation happens exactly once, at construction. The field set of a
//! `ReactiveObject` is fixed from then on: reassigning a field replaces the
//! value held inside the slot (freshly instrumenting it when it is an
//! aggregate), never the slot or its registry. A replaced nested aggregate
//! therefore starts over with empty registries of its own.

use crate::context::ObserverContext;
use crate::dep::Dep;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use hashbrown::HashMap;
use ripple_core::{Data, Error, Result, Value};

/// An instrumented value: a terminal scalar or a reactive aggregate.
#[derive(Clone)]
pub enum ReactiveValue {
    /// A terminal scalar; reads of it are tracked by the enclosing slot.
    Leaf(Value),
    /// A recursively instrumented aggregate with independently trackable
    /// fields.
    Aggregate(Rc<ReactiveObject>),
}

impl ReactiveValue {
    /// Returns true if this is a terminal scalar.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, ReactiveValue::Leaf(_))
    }

    /// Returns true if this is an instrumented aggregate.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, ReactiveValue::Aggregate(_))
    }

    /// Returns the scalar value if this is a leaf, None otherwise.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ReactiveValue::Leaf(v) => Some(v),
            ReactiveValue::Aggregate(_) => None,
        }
    }

    /// Returns the aggregate if this is one, None otherwise.
    pub fn as_object(&self) -> Option<&Rc<ReactiveObject>> {
        match self {
            ReactiveValue::Leaf(_) => None,
            ReactiveValue::Aggregate(obj) => Some(obj),
        }
    }

    /// Reconstructs an uninstrumented snapshot of this value.
    ///
    /// Snapshotting does not register any dependencies.
    pub fn to_data(&self) -> Data {
        match self {
            ReactiveValue::Leaf(v) => Data::Leaf(v.clone()),
            ReactiveValue::Aggregate(obj) => obj.to_data(),
        }
    }
}

impl fmt::Debug for ReactiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactiveValue::Leaf(v) => f.debug_tuple("Leaf").field(v).finish(),
            ReactiveValue::Aggregate(obj) => obj.fmt(f),
        }
    }
}

/// One instrumented property: the current value plus its registry.
///
/// Created once per field at instrumentation time and never replaced.
struct ReactiveSlot {
    value: RefCell<ReactiveValue>,
    dep: Dep,
}

impl ReactiveSlot {
    fn new(data: Data) -> Self {
        Self {
            value: RefCell::new(observe(data)),
            dep: Dep::new(),
        }
    }
}

/// An aggregate whose fields report reads and writes.
///
/// # Example
///
/// ```rust
/// use ripple_core::Data;
/// use ripple_reactive::{observe, CallbackObserver, ObserverContext};
///
/// let root = observe(Data::object_from([("count", Data::leaf(0i64))]));
/// let root = root.as_object().unwrap().clone();
///
/// let observer = CallbackObserver::shared(|| { /* re-run evaluation */ });
///
/// let mut ctx = ObserverContext::new();
/// ctx.scope(observer, |ctx| {
///     root.read("count", ctx); // links the observer to "count"
/// });
///
/// root.write("count", Data::leaf(1i64)); // invokes the observer
/// ```
pub struct ReactiveObject {
    fields: HashMap<String, ReactiveSlot>,
}

/// Instruments a plain data tree.
///
/// A leaf is a valid terminal node: it passes through untouched, with no
/// registry allocated. An aggregate has each of its fields instrumented
/// recursively, children first, so nested reads are independently trackable
/// by the time the enclosing slot exists.
pub fn observe(data: Data) -> ReactiveValue {
    match data {
        Data::Leaf(value) => ReactiveValue::Leaf(value),
        Data::Object(fields) => {
            ReactiveValue::Aggregate(Rc::new(ReactiveObject::from_fields(fields)))
        }
    }
}

impl ReactiveObject {
    fn from_fields(fields: HashMap<String, Data>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, data)| (key, ReactiveSlot::new(data)))
                .collect(),
        }
    }

    /// Reads the field `key`.
    ///
    /// If an observer is active in `ctx`, it is registered with the field's
    /// registry (idempotently) before the value is returned. Returns None
    /// for unknown keys.
    pub fn read(&self, key: &str, ctx: &ObserverContext) -> Option<ReactiveValue> {
        let slot = self.fields.get(key)?;
        if let Some(observer) = ctx.current() {
            slot.dep.add(observer);
        }
        Some(slot.value.borrow().clone())
    }

    /// Reads the field `key` without dependency tracking.
    pub fn peek(&self, key: &str) -> Option<ReactiveValue> {
        let slot = self.fields.get(key)?;
        Some(slot.value.borrow().clone())
    }

    /// Writes the field `key`, then notifies every subscriber.
    ///
    /// The new value is instrumented first when it is an aggregate.
    /// Notification is unconditional: assigning a value equal to the current
    /// one still notifies. Returns false for unknown keys — the field set is
    /// fixed at instrumentation time, so nothing is inserted and nobody is
    /// notified.
    pub fn write(&self, key: &str, data: Data) -> bool {
        let slot = match self.fields.get(key) {
            Some(slot) => slot,
            None => return false,
        };

        let next = observe(data);
        // The borrow is released before notify so an update may re-enter
        // this same slot.
        *slot.value.borrow_mut() = next;

        slot.dep.notify();
        true
    }

    /// Reads a nested field one path segment at a time.
    ///
    /// Each traversed level registers the active observer exactly as a
    /// direct `read` of that level would.
    pub fn read_path(&self, path: &[&str], ctx: &ObserverContext) -> Result<ReactiveValue> {
        let (&first, rest) = path.split_first().ok_or(Error::EmptyPath)?;
        let value = self
            .read(first, ctx)
            .ok_or_else(|| Error::key_not_found(first))?;

        if rest.is_empty() {
            return Ok(value);
        }
        match value {
            ReactiveValue::Aggregate(obj) => obj.read_path(rest, ctx),
            ReactiveValue::Leaf(_) => Err(Error::not_an_aggregate(first)),
        }
    }

    /// Writes a nested field addressed by path.
    ///
    /// Traversal does not register dependencies; only the final segment's
    /// subscribers are notified.
    pub fn write_path(&self, path: &[&str], data: Data) -> Result<()> {
        let (&first, rest) = path.split_first().ok_or(Error::EmptyPath)?;

        if rest.is_empty() {
            if self.write(first, data) {
                return Ok(());
            }
            return Err(Error::key_not_found(first));
        }

        let slot = self
            .fields
            .get(first)
            .ok_or_else(|| Error::key_not_found(first))?;
        // Clone the handle out so the borrow is not held across the
        // recursive write.
        let child = slot.value.borrow().clone();
        match child {
            ReactiveValue::Aggregate(obj) => obj.write_path(rest, data),
            ReactiveValue::Leaf(_) => Err(Error::not_an_aggregate(first)),
        }
    }

    /// Returns the registry attached to `key`, if the field exists.
    pub fn dep(&self, key: &str) -> Option<&Dep> {
        self.fields.get(key).map(|slot| &slot.dep)
    }

    /// Returns the number of live subscribers on `key`, if the field exists.
    pub fn subscriber_count(&self, key: &str) -> Option<usize> {
        self.fields.get(key).map(|slot| slot.dep.len())
    }

    /// Returns true if the field exists.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the field names.
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the aggregate has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reconstructs an uninstrumented snapshot of this aggregate.
    pub fn to_data(&self) -> Data {
        Data::Object(
            self.fields
                .iter()
                .map(|(key, slot)| (key.clone(), slot.value.borrow().to_data()))
                .collect(),
        )
    }
}

impl fmt::Debug for ReactiveObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|(key, slot)| (key, slot.value.borrow().clone())),
            )
            .finish()
    }
}
