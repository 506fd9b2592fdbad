//! Ripple Reactive - a minimal reactive dependency-tracking engine.
//!
//! This crate instruments a plain data tree so that reads are recorded as
//! dependencies and writes automatically notify every dependent observer.
//!
//! # Core Concepts
//!
//! - `Dep`: per-property subscriber registry (add, remove, fan-out notify)
//! - `Observer`: anything with an `update()` capability; `CallbackObserver`
//!   wraps a closure
//! - `ObserverContext`: explicit save/restore stack of the currently
//!   evaluating observer, passed by reference through reads
//! - `observe` / `ReactiveObject`: recursive instrumentation of a `Data`
//!   tree into accessor-backed property slots
//!
//! # How tracking works
//!
//! Reads performed while an observer is active in the context register that
//! observer with the property's registry. Writes instrument the incoming
//! value (when it is an aggregate) and then notify unconditionally — no
//! equality short-circuit, no batching, no async scheduling. Registries only
//! grow on their own; removal is an explicit operation.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::Data;
//! use ripple_reactive::{observe, CallbackObserver, ObserverContext};
//!
//! // { user: { age: 25 } }
//! let root = observe(Data::object_from([(
//!     "user",
//!     Data::object_from([("age", Data::leaf(25i64))]),
//! )]));
//! let root = root.as_object().unwrap().clone();
//!
//! let observer = CallbackObserver::shared(|| { /* re-run evaluation */ });
//!
//! let mut ctx = ObserverContext::new();
//! ctx.scope(observer, |ctx| {
//!     root.read_path(&["user", "age"], ctx).unwrap();
//! });
//!
//! // Invokes the observer: it read "user.age" and the value changed.
//! root.write_path(&["user", "age"], Data::leaf(26i64)).unwrap();
//! ```

#![no_std]

extern crate alloc;

pub mod context;
pub mod dep;
pub mod observe;
pub mod observer;

pub use context::ObserverContext;
pub use dep::Dep;
pub use observe::{observe, ReactiveObject, ReactiveValue};
pub use observer::{observer_id, CallbackObserver, Observer, ObserverId};

// Re-export commonly used types from dependencies
pub use ripple_core::{Data, Error, Result, Value};
