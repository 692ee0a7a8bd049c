//! Cache configuration.
//!
//! Options can be set through [`CacheBuilder`](crate::CacheBuilder) setters
//! or loaded from TOML:
//!
//! ```toml
//! reset_on_open = false
//! capacity = 4096
//! operation_prefix = "Sessions"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;

/// Options controlling how a cache is opened.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheOptions {
    /// Flush the store when the cache opens (default `true`).
    pub reset_on_open: bool,

    /// Expected number of keys, used to size the embedded store.
    pub capacity: usize,

    /// Qualifier of instrumented operation names: `<prefix>.write`.
    pub operation_prefix: String,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            reset_on_open: true,
            capacity: 0,
            operation_prefix: "Cache".to_string(),
        }
    }
}

impl CacheOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: CacheOptions = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the options are usable.
    ///
    /// The operation prefix must be non-empty and free of `:` and
    /// whitespace, since history keys append `:inputs` / `:outputs`.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.operation_prefix;
        if prefix.is_empty() {
            return Err(Error::Config("operation_prefix must not be empty".into()));
        }
        if prefix.contains(':') || prefix.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "operation_prefix {:?} must not contain ':' or whitespace",
                prefix
            )));
        }
        Ok(())
    }
}
