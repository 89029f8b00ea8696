//! A tree store with a store-wide failure reporting mode.

use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::node::{Directory, File, Metadata};
use crate::options::{StoreOptions, WriteOptions};
use crate::path::Path;
use crate::store::TreeStore;
use crate::walk::Walk;

/// A [`TreeStore`] that shapes failures according to [`StoreOptions`].
///
/// Reads return `Ok(Some(value))` on success and writes return `Ok(true)`.
/// On failure the store either returns the error (`prefer_errors`) or
/// swallows it and returns `Ok(None)` / `Ok(false)`. In the second mode no
/// method ever returns `Err`, and the cause is only visible in debug logs.
///
/// # Example
///
/// ```rust
/// use treefs_store::{MemoryStore, StoreOptions};
///
/// let store: MemoryStore<String> = MemoryStore::new();
/// assert_eq!(store.read_file("missing").unwrap(), None);
///
/// let strict: MemoryStore<String> =
///     MemoryStore::with_options(StoreOptions::default().prefer_errors(true));
/// assert!(strict.read_file("missing").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStore<C = Bytes, A = Metadata> {
    tree: TreeStore<C, A>,
    options: StoreOptions,
}

impl<C, A: Default> MemoryStore<C, A> {
    /// Create an empty store in sentinel mode.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        MemoryStore {
            tree: TreeStore::new(),
            options,
        }
    }
}

impl<C, A: Default> Default for MemoryStore<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> MemoryStore<C, A> {
    /// Wrap an existing tree.
    pub fn from_tree(tree: TreeStore<C, A>, options: StoreOptions) -> Self {
        MemoryStore { tree, options }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The result-typed store underneath.
    pub fn tree(&self) -> &TreeStore<C, A> {
        &self.tree
    }

    pub fn into_tree(self) -> TreeStore<C, A> {
        self.tree
    }

    /// Shape a failure per the reporting mode.
    fn report<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if self.options.prefer_errors => Err(e),
            Err(e) => {
                debug!("{}", e);
                Ok(None)
            }
        }
    }

    fn report_done(&self, result: Result<()>) -> Result<bool> {
        self.report(result).map(|done| done.is_some())
    }

    /// List the names of a directory's immediate children.
    pub fn read_directory(&self, path: impl Into<Path>) -> Result<Option<Vec<String>>> {
        self.report(self.tree.read_directory(path))
    }

    pub fn read_directory_entry(
        &self,
        path: impl Into<Path>,
    ) -> Result<Option<&Directory<C, A>>> {
        self.report(self.tree.read_directory_entry(path))
    }

    pub fn read_file(&self, path: impl Into<Path>) -> Result<Option<&C>> {
        self.report(self.tree.read_file(path))
    }

    pub fn read_file_entry(&self, path: impl Into<Path>) -> Result<Option<&File<C, A>>> {
        self.report(self.tree.read_file_entry(path))
    }

    pub fn exists(&self, path: impl Into<Path>) -> bool {
        self.tree.exists(path)
    }

    pub fn walk(&self) -> Walk<'_, C, A> {
        self.tree.walk()
    }
}

impl<C, A: Default> MemoryStore<C, A> {
    /// Ensure a directory exists, using the store's default options.
    pub fn create_directory(&mut self, path: impl Into<Path>) -> Result<bool> {
        let options = self.options.write_options();
        self.create_directory_with(path, options)
    }

    pub fn create_directory_with(
        &mut self,
        path: impl Into<Path>,
        options: WriteOptions,
    ) -> Result<bool> {
        let result = self.tree.create_directory_with(path, options);
        self.report_done(result)
    }

    /// Write a file, using the store's default options.
    pub fn write_file(&mut self, path: impl Into<Path>, content: C) -> Result<bool> {
        let options = self.options.write_options();
        self.write_file_with(path, content, options)
    }

    pub fn write_file_with(
        &mut self,
        path: impl Into<Path>,
        content: C,
        options: WriteOptions,
    ) -> Result<bool> {
        let result = self.tree.write_file_with(path, content, options);
        self.report_done(result)
    }

    /// Update a file through a callback, using the store's default options.
    pub fn update_file<F>(&mut self, path: impl Into<Path>, update: F) -> Result<bool>
    where
        F: FnOnce(&mut File<C, A>),
    {
        let options = self.options.write_options();
        self.update_file_with(path, options, update)
    }

    pub fn update_file_with<F>(
        &mut self,
        path: impl Into<Path>,
        options: WriteOptions,
        update: F,
    ) -> Result<bool>
    where
        F: FnOnce(&mut File<C, A>),
    {
        let result = self.tree.update_file_with(path, options, update);
        self.report_done(result)
    }

    /// Remove an entry and its subtree.
    pub fn remove(&mut self, path: impl Into<Path>) -> Result<bool> {
        let result = self.tree.remove(path).map(drop);
        self.report_done(result)
    }
}

impl<C, A> From<TreeStore<C, A>> for MemoryStore<C, A> {
    fn from(tree: TreeStore<C, A>) -> Self {
        Self::from_tree(tree, StoreOptions::default())
    }
}
