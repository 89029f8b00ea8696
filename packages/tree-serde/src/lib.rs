//! Serde integration for TreeFS stores.
//!
//! This layer adds typed access on top of `treefs-store`:
//! - `TypedReader` / `TypedWriter`: read and write Rust types as file content
//! - `JsonCodec`: a codec for JSON over `Bytes`, `String` or `serde_json::Value`
//! - `snapshot`: save and restore a whole tree as JSON
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use treefs_serde::{snapshot, JsonCodec, TypedReader, TypedWriter};
//! use treefs_store::TreeStore;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut store: TreeStore<String> = TreeStore::new();
//! let user = User { name: "ada".into(), age: 36 };
//! store.write_as("users/ada", &user, &JsonCodec).unwrap();
//!
//! let saved = snapshot::to_json(&store).unwrap();
//! let restored: TreeStore<String> = snapshot::from_json(saved).unwrap();
//! let back: User = restored.read_as("users/ada", &JsonCodec).unwrap();
//! assert_eq!(back, user);
//! ```

pub use bytes::Bytes;

mod codec;
mod error;
pub mod snapshot;
mod typed;

pub use codec::{Codec, JsonCodec};
pub use error::{Error, Result};
pub use typed::{TypedReader, TypedWriter};

// Re-export core types for convenience
pub use treefs_store::{Path, TreeStore, WriteOptions};
