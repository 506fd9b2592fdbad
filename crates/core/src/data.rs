//! Plain data trees.
//!
//! `Data` is the uninstrumented input to the reactive engine: a tagged union
//! over leaf scalars and string-keyed aggregates. Recursive instrumentation
//! pattern-matches this union exhaustively, so there is no runtime type
//! sniffing to decide whether a node has fields of its own.

use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// A plain, uninstrumented data tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    /// A terminal scalar node.
    Leaf(Value),
    /// An aggregate node with named fields.
    Object(HashMap<String, Data>),
}

impl Data {
    /// Creates a leaf node from anything convertible to a `Value`.
    #[inline]
    pub fn leaf(value: impl Into<Value>) -> Self {
        Data::Leaf(value.into())
    }

    /// Creates an empty aggregate node.
    #[inline]
    pub fn object() -> Self {
        Data::Object(HashMap::new())
    }

    /// Creates an aggregate node from `(key, value)` pairs.
    pub fn object_from<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Data)>,
    {
        Data::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Returns true if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Data::Leaf(_))
    }

    /// Returns true if this node is an aggregate.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Data::Object(_))
    }

    /// Returns the scalar value if this is a leaf, None otherwise.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Data::Leaf(v) => Some(v),
            Data::Object(_) => None,
        }
    }

    /// Returns the field map if this is an aggregate, None otherwise.
    pub fn as_object(&self) -> Option<&HashMap<String, Data>> {
        match self {
            Data::Leaf(_) => None,
            Data::Object(fields) => Some(fields),
        }
    }

    /// Returns the child under `key` if this is an aggregate holding it.
    pub fn get(&self, key: &str) -> Option<&Data> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Inserts a field into an aggregate node.
    ///
    /// Returns the previous value under `key`, or None. Calling this on a
    /// leaf node is a no-op returning None.
    pub fn insert(&mut self, key: impl Into<String>, value: Data) -> Option<Data> {
        match self {
            Data::Leaf(_) => None,
            Data::Object(fields) => fields.insert(key.into(), value),
        }
    }

    /// Returns the field names if this is an aggregate, empty otherwise.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Data::Leaf(_) => Vec::new(),
            Data::Object(fields) => fields.keys().map(String::as_str).collect(),
        }
    }
}

impl From<Value> for Data {
    fn from(v: Value) -> Self {
        Data::Leaf(v)
    }
}

impl From<bool> for Data {
    fn from(v: bool) -> Self {
        Data::leaf(v)
    }
}

impl From<i64> for Data {
    fn from(v: i64) -> Self {
        Data::leaf(v)
    }
}

impl From<f64> for Data {
    fn from(v: f64) -> Self {
        Data::leaf(v)
    }
}

impl From<&str> for Data {
    fn from(v: &str) -> Self {
        Data::leaf(v)
    }
}

impl From<String> for Data {
    fn from(v: String) -> Self {
        Data::leaf(v)
    }
}
