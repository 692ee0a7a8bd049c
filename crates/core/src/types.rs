//! Core types for TallyKV
//!
//! This module defines the identifiers used throughout the system:
//! - [`EntryKey`]: Unique key under which a cached value is stored
//! - [`OperationName`]: Identity of an instrumented operation

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Unique key for a cached entry
///
/// Generated once per write from a random UUID v4 in hyphenated form.
/// Collisions are not checked for; at the scale a cache runs they are
/// negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryKey(String);

impl EntryKey {
    /// Create a new random key using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use tallykv_core::EntryKey;
    ///
    /// let k1 = EntryKey::generate();
    /// let k2 = EntryKey::generate();
    /// assert_ne!(k1, k2);
    /// ```
    pub fn generate() -> Self {
        EntryKey(Uuid::new_v4().hyphenated().to_string())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for EntryKey {
    fn from(s: String) -> Self {
        EntryKey(s)
    }
}

impl From<&str> for EntryKey {
    fn from(s: &str) -> Self {
        EntryKey(s.to_string())
    }
}

impl AsRef<str> for EntryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntryKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntryKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of an instrumented operation
///
/// A qualified name such as `Cache.write`. Every store-side record kept
/// for the operation is derived from it:
///
/// | Record | Store key |
/// |--------|-----------|
/// | call counter | `Cache.write` |
/// | inputs list | `Cache.write:inputs` |
/// | outputs list | `Cache.write:outputs` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationName(String);

impl OperationName {
    /// Build a name from a qualifier and a method: `Cache` + `write`
    pub fn qualified(qualifier: &str, method: &str) -> Self {
        if qualifier.is_empty() {
            OperationName(method.to_string())
        } else {
            OperationName(format!("{}.{}", qualifier, method))
        }
    }

    /// Use a name verbatim
    pub fn new(name: impl Into<String>) -> Self {
        OperationName(name.into())
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key of the call counter
    pub fn counter_key(&self) -> &str {
        &self.0
    }

    /// Store key of the inputs history list
    pub fn inputs_key(&self) -> String {
        format!("{}:inputs", self.0)
    }

    /// Store key of the outputs history list
    pub fn outputs_key(&self) -> String {
        format!("{}:outputs", self.0)
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
