//! The result-typed tree store.

use bytes::Bytes;
use tracing::debug;

use crate::error::{Error, Operation, Result};
use crate::node::{Directory, Entry, File, Metadata};
use crate::options::WriteOptions;
use crate::path::Path;
use crate::walk::Walk;
use crate::walker::{self, EntryRef, Policy};

/// An in-memory tree of files and directories addressed by [`Path`].
///
/// Every operation returns a [`Result`]; nothing is rolled back on failure.
/// See [`MemoryStore`](crate::MemoryStore) for the variant that can report
/// failures as `None`/`false` instead.
///
/// Entries handed out by the read methods are shared borrows, so the tree
/// cannot be changed through them. Clone them for an owned copy.
///
/// # Example
///
/// ```rust
/// use treefs_store::TreeStore;
///
/// let mut store: TreeStore<String> = TreeStore::new();
/// store.write_file("docs/readme.md", "hello".to_string()).unwrap();
///
/// assert_eq!(store.read_directory("").unwrap(), vec!["docs"]);
/// assert_eq!(store.read_file("docs/readme.md").unwrap(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TreeStore<C = Bytes, A = Metadata> {
    root: Directory<C, A>,
}

impl<C, A: Default> TreeStore<C, A> {
    /// Create an empty store with an unnamed root.
    pub fn new() -> Self {
        TreeStore {
            root: Directory::root(),
        }
    }

    /// Build a store from `(path, content)` pairs, creating parents as needed.
    ///
    /// Fails on the first pair that collides with an entry of the other kind.
    pub fn from_files<P, I>(files: I) -> Result<Self>
    where
        P: Into<Path>,
        I: IntoIterator<Item = (P, C)>,
    {
        let mut store = Self::new();
        for (path, content) in files {
            store.write_file(path, content)?;
        }
        Ok(store)
    }
}

impl<C, A: Default> Default for TreeStore<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> TreeStore<C, A> {
    /// Create a store over an existing tree.
    pub fn with_root(root: Directory<C, A>) -> Self {
        TreeStore { root }
    }

    pub fn root(&self) -> &Directory<C, A> {
        &self.root
    }

    pub fn into_root(self) -> Directory<C, A> {
        self.root
    }

    /// Resolve a path to the root or an entry, without mutating.
    pub fn entry(&self, path: impl Into<Path>) -> Result<EntryRef<'_, C, A>> {
        walker::lookup(&self.root, &path.into(), Operation::Lookup)
    }

    pub fn exists(&self, path: impl Into<Path>) -> bool {
        self.entry(path).is_ok()
    }

    pub fn is_file(&self, path: impl Into<Path>) -> bool {
        self.entry(path).is_ok_and(|entry| entry.is_file())
    }

    pub fn is_directory(&self, path: impl Into<Path>) -> bool {
        self.entry(path).is_ok_and(|entry| entry.is_directory())
    }

    /// List the names of a directory's immediate children.
    pub fn read_directory(&self, path: impl Into<Path>) -> Result<Vec<String>> {
        self.read_directory_entry(path).map(Directory::names)
    }

    /// Resolve a path that must name a directory.
    pub fn read_directory_entry(&self, path: impl Into<Path>) -> Result<&Directory<C, A>> {
        let path = path.into();
        match walker::lookup(&self.root, &path, Operation::ReadDirectory)? {
            EntryRef::Directory(dir) => Ok(dir),
            EntryRef::File(_) => Err(Error::NotADirectory {
                operation: Operation::ReadDirectory,
                path,
            }),
        }
    }

    /// Read the content of a file.
    ///
    /// A file that was never written fails with [`Error::EmptyContent`].
    pub fn read_file(&self, path: impl Into<Path>) -> Result<&C> {
        let path = path.into();
        let file = self.resolve_file(&path)?;
        file.content().ok_or(Error::EmptyContent {
            operation: Operation::ReadFile,
            path,
        })
    }

    /// Resolve a path that must name a file with content.
    pub fn read_file_entry(&self, path: impl Into<Path>) -> Result<&File<C, A>> {
        let path = path.into();
        let file = self.resolve_file(&path)?;
        if !file.has_content() {
            return Err(Error::EmptyContent {
                operation: Operation::ReadFile,
                path,
            });
        }
        Ok(file)
    }

    fn resolve_file(&self, path: &Path) -> Result<&File<C, A>> {
        match walker::lookup(&self.root, path, Operation::ReadFile)? {
            EntryRef::File(file) => Ok(file),
            EntryRef::Directory(_) => Err(Error::IsADirectory {
                operation: Operation::ReadFile,
                path: path.clone(),
            }),
        }
    }

    /// Pre-order traversal of every entry below the root.
    pub fn walk(&self) -> Walk<'_, C, A> {
        self.root.walk()
    }

    /// Number of entries below the root, at any depth.
    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl<C, A: Default> TreeStore<C, A> {
    /// Ensure a directory exists at `path`, creating missing parents.
    pub fn create_directory(&mut self, path: impl Into<Path>) -> Result<()> {
        self.create_directory_with(path, WriteOptions::default())
    }

    /// Ensure a directory exists at `path`.
    ///
    /// Without `recursive`, every parent must already exist; the final
    /// directory itself is still created. An existing directory is not an
    /// error. Directories created before a failure are kept.
    pub fn create_directory_with(
        &mut self,
        path: impl Into<Path>,
        options: WriteOptions,
    ) -> Result<()> {
        let path = path.into();
        let Some((last, parents)) = path.split_last() else {
            return Ok(());
        };

        let parent = walker::descend_mut(
            &mut self.root,
            parents,
            Operation::CreateDirectory,
            Policy::Create {
                recursive: options.recursive,
            },
        )?;

        match parent.get(last) {
            Some(Entry::Directory(_)) => Ok(()),
            Some(Entry::File(_)) => Err(Error::NotADirectory {
                operation: Operation::CreateDirectory,
                path,
            }),
            None => {
                parent.insert(Directory::new(last).into());
                debug!("create_directory: created '{}'", path);
                Ok(())
            }
        }
    }

    /// Write `content` to the file at `path`, creating it and any missing
    /// parents.
    pub fn write_file(&mut self, path: impl Into<Path>, content: C) -> Result<()> {
        self.write_file_with(path, content, WriteOptions::default())
    }

    /// Write `content` to the file at `path`.
    ///
    /// An existing file keeps its auxiliary data.
    pub fn write_file_with(
        &mut self,
        path: impl Into<Path>,
        content: C,
        options: WriteOptions,
    ) -> Result<()> {
        self.update_file_with(path, options, |file| {
            file.set_content(content);
        })
    }

    /// Apply `update` to the file at `path`, creating it and any missing
    /// parents first.
    pub fn update_file<R, F>(&mut self, path: impl Into<Path>, update: F) -> Result<R>
    where
        F: FnOnce(&mut File<C, A>) -> R,
    {
        self.update_file_with(path, WriteOptions::default(), update)
    }

    /// Apply `update` to the file at `path` in a single descent.
    ///
    /// A new file starts without content, so the callback sees the same
    /// shape for new and existing files and can set content and auxiliary
    /// data together.
    pub fn update_file_with<R, F>(
        &mut self,
        path: impl Into<Path>,
        options: WriteOptions,
        update: F,
    ) -> Result<R>
    where
        F: FnOnce(&mut File<C, A>) -> R,
    {
        let path = path.into();
        let Some((last, parents)) = path.split_last() else {
            return Err(Error::IsADirectory {
                operation: Operation::WriteFile,
                path,
            });
        };

        let parent = walker::descend_mut(
            &mut self.root,
            parents,
            Operation::WriteFile,
            Policy::Create {
                recursive: options.recursive,
            },
        )?;

        let result = match parent.get_mut(last) {
            Some(Entry::File(file)) => update(file),
            Some(Entry::Directory(_)) => {
                return Err(Error::IsADirectory {
                    operation: Operation::WriteFile,
                    path,
                })
            }
            None => {
                let mut file = File::new(last);
                let result = update(&mut file);
                parent.insert(file.into());
                result
            }
        };

        debug!("write_file: wrote '{}'", path);
        Ok(result)
    }

    /// Detach the entry at `path` along with its whole subtree.
    ///
    /// The root itself cannot be removed.
    pub fn remove(&mut self, path: impl Into<Path>) -> Result<Entry<C, A>> {
        let path = path.into();
        let Some((last, parents)) = path.split_last() else {
            return Err(Error::NotFound {
                operation: Operation::Remove,
                path,
            });
        };

        let parent = walker::descend_mut(&mut self.root, parents, Operation::Remove, Policy::Read)?;
        let removed = parent.remove(last).ok_or_else(|| Error::NotFound {
            operation: Operation::Remove,
            path: path.clone(),
        })?;

        debug!("remove: detached '{}'", path);
        Ok(removed)
    }
}
