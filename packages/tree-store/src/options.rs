//! Store-wide and per-call options.

use serde::{Deserialize, Serialize};

/// Options fixed for the lifetime of a [`MemoryStore`](crate::MemoryStore).
///
/// Deserializable from any serde format; missing fields take their defaults.
///
/// ```rust
/// use treefs_store::StoreOptions;
///
/// let options = StoreOptions::default().prefer_errors(true);
/// assert!(options.prefer_errors);
/// assert!(options.recursive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Report failures as `Err` instead of `None`/`false`.
    pub prefer_errors: bool,
    /// Default for [`WriteOptions::recursive`] when a call does not pass one.
    pub recursive: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            prefer_errors: false,
            recursive: true,
        }
    }
}

impl StoreOptions {
    #[must_use]
    pub fn prefer_errors(mut self, prefer_errors: bool) -> Self {
        self.prefer_errors = prefer_errors;
        self
    }

    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// The per-call options implied by these defaults.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            recursive: self.recursive,
        }
    }
}

/// Options for a single create or write call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Create missing intermediate directories.
    pub recursive: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions { recursive: true }
    }
}

impl WriteOptions {
    pub fn recursive() -> Self {
        WriteOptions { recursive: true }
    }

    pub fn non_recursive() -> Self {
        WriteOptions { recursive: false }
    }
}
