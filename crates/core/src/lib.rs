//! Ripple Core - Core types for the Ripple reactive engine.
//!
//! This crate provides the foundational types shared across the Ripple
//! workspace:
//!
//! - `Value`: Scalar leaf values (Null, Boolean, Int64, Float64, String)
//! - `Data`: A plain, uninstrumented data tree (tagged union of leaf and aggregate)
//! - `Error`: Error types for path-addressed operations
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{Data, Value};
//!
//! // Build a plain data tree: { user: { age: 25 }, active: true }
//! let data = Data::object_from([
//!     ("user", Data::object_from([("age", Data::leaf(25i64))])),
//!     ("active", Data::leaf(true)),
//! ]);
//!
//! assert!(data.is_object());
//! assert_eq!(
//!     data.get("user").and_then(|u| u.get("age")).and_then(|a| a.as_value()),
//!     Some(&Value::Int64(25)),
//! );
//! ```

#![no_std]

extern crate alloc;

mod data;
mod error;
mod value;

pub use data::Data;
pub use error::{Error, Result};
pub use value::Value;
