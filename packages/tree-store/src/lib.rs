//! TreeFS: an in-memory file/directory tree addressed by paths.
//!
//! The store behaves like a small filesystem without touching real storage:
//! - `Path`: an ordered list of segments, split literally from `a/b/c` strings
//! - `Entry`: a `File` (opaque content) or a `Directory` (named children)
//! - `TreeStore`: create, read, write and remove with `Result` returns
//! - `MemoryStore`: the same operations with a store-wide choice between
//!   returning errors and returning `None`/`false`
//!
//! Content and per-node auxiliary data are generic and never inspected.
//!
//! # Example
//!
//! ```rust
//! use treefs_store::{TreeStore, path};
//!
//! let mut store: TreeStore<String> = TreeStore::new();
//! store.write_file("foo/bar/baz.txt", "hi".to_string()).unwrap();
//!
//! let visited: Vec<String> = store.walk().map(|(p, _)| p.to_string()).collect();
//! assert_eq!(visited, vec!["foo", "foo/bar", "foo/bar/baz.txt"]);
//!
//! store.remove(path!("foo/bar")).unwrap();
//! assert!(!store.exists("foo/bar/baz.txt"));
//! ```

pub use bytes::Bytes;

mod error;
mod memory_store;
mod node;
mod options;
mod path;
mod store;
mod walk;
mod walker;

pub use error::{Error, ErrorKind, Operation, Result};
pub use memory_store::MemoryStore;
pub use node::{Directory, Entry, EntryKind, File, Metadata, Node};
pub use options::{StoreOptions, WriteOptions};
pub use path::Path;
pub use store::TreeStore;
pub use walk::Walk;
pub use walker::EntryRef;
