//! The node model: files, directories and the entry sum type.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::walk::Walk;

/// Default auxiliary data attached to every node.
pub type Metadata = BTreeMap<String, String>;

/// Capabilities shared by every node in the tree.
///
/// Each node carries an auxiliary data slot for out-of-band metadata. The
/// store never inspects it.
pub trait Node {
    type Data;

    /// The node's name. Only the root directory is unnamed.
    fn name(&self) -> Option<&str>;

    fn data(&self) -> &Self::Data;

    fn data_mut(&mut self) -> &mut Self::Data;

    fn is_file(&self) -> bool;

    fn is_directory(&self) -> bool {
        !self.is_file()
    }
}

/// A terminal entry holding opaque content.
///
/// `content` is `None` for a file that was created but never written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File<C = Bytes, A = Metadata> {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<C>,
    #[serde(default)]
    data: A,
}

impl<C, A: Default> File<C, A> {
    /// Create a file with no content.
    pub fn new(name: impl Into<String>) -> Self {
        File {
            name: name.into(),
            content: None,
            data: A::default(),
        }
    }

    pub fn with_content(name: impl Into<String>, content: C) -> Self {
        File {
            name: name.into(),
            content: Some(content),
            data: A::default(),
        }
    }
}

impl<C, A> File<C, A> {
    #[must_use]
    pub fn with_data(mut self, data: A) -> Self {
        self.data = data;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Replace the content, returning the previous one.
    pub fn set_content(&mut self, content: C) -> Option<C> {
        self.content.replace(content)
    }

    /// Reset the file to the never-written state.
    pub fn clear_content(&mut self) -> Option<C> {
        self.content.take()
    }

    pub fn into_content(self) -> Option<C> {
        self.content
    }
}

impl<C, A> Node for File<C, A> {
    type Data = A;

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn data(&self) -> &A {
        &self.data
    }

    fn data_mut(&mut self) -> &mut A {
        &mut self.data
    }

    fn is_file(&self) -> bool {
        true
    }
}

/// An interior entry mapping child names to child entries.
///
/// Children are keyed by their own name, so names are unique within a
/// directory and iteration is in lexicographic name order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Directory<C = Bytes, A = Metadata> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default = "BTreeMap::new")]
    children: BTreeMap<String, Entry<C, A>>,
    #[serde(default)]
    data: A,
}

impl<C, A: Default> Directory<C, A> {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: Some(name.into()),
            children: BTreeMap::new(),
            data: A::default(),
        }
    }

    /// Create an unnamed root directory.
    pub fn root() -> Self {
        Directory {
            name: None,
            children: BTreeMap::new(),
            data: A::default(),
        }
    }

    /// Create a named directory holding `children`.
    ///
    /// Later children replace earlier ones with the same name.
    pub fn with_children<I>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = Entry<C, A>>,
    {
        let mut dir = Self::new(name);
        dir.extend(children);
        dir
    }
}

impl<C, A: Default> Default for Directory<C, A> {
    fn default() -> Self {
        Self::root()
    }
}

impl<C, A> Directory<C, A> {
    #[must_use]
    pub fn with_data(mut self, data: A) -> Self {
        self.data = data;
        self
    }

    pub fn dir_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    pub fn children(&self) -> &BTreeMap<String, Entry<C, A>> {
        &self.children
    }

    pub fn get(&self, name: &str) -> Option<&Entry<C, A>> {
        self.children.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Entry<C, A>> {
        self.children.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Names of the immediate children.
    pub fn names(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }

    /// Number of immediate children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attach an entry under its own name, returning any entry it replaced.
    ///
    /// Only the root is unnamed, so an unnamed directory is given the empty
    /// name it is keyed by.
    pub fn insert(&mut self, mut entry: Entry<C, A>) -> Option<Entry<C, A>> {
        if let Entry::Directory(dir) = &mut entry {
            if dir.name.is_none() {
                dir.name = Some(String::new());
            }
        }
        self.children.insert(entry.entry_name().to_string(), entry)
    }

    /// Detach the named child and its whole subtree.
    pub fn remove(&mut self, name: &str) -> Option<Entry<C, A>> {
        self.children.remove(name)
    }

    /// Pre-order traversal of everything below this directory.
    pub fn walk(&self) -> Walk<'_, C, A> {
        Walk::new(self)
    }

    /// Number of entries below this directory, at any depth.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(dir) = pending.pop() {
            count += dir.children.len();
            pending.extend(dir.children.values().filter_map(Entry::as_directory));
        }
        count
    }
}

// Iterative so that arbitrarily deep trees drop without exhausting the stack.
impl<C, A> Drop for Directory<C, A> {
    fn drop(&mut self) {
        let mut pending: Vec<Entry<C, A>> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(entry) = pending.pop() {
            if let Entry::Directory(mut dir) = entry {
                pending.extend(std::mem::take(&mut dir.children).into_values());
            }
        }
    }
}

impl<C, A> Extend<Entry<C, A>> for Directory<C, A> {
    fn extend<I: IntoIterator<Item = Entry<C, A>>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<C, A> Node for Directory<C, A> {
    type Data = A;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn data(&self) -> &A {
        &self.data
    }

    fn data_mut(&mut self) -> &mut A {
        &mut self.data
    }

    fn is_file(&self) -> bool {
        false
    }
}

/// Which kind of entry a node is.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A file or a directory: every node below the root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "snake_case",
    bound(deserialize = "C: Deserialize<'de>, A: Deserialize<'de> + Default")
)]
pub enum Entry<C = Bytes, A = Metadata> {
    File(File<C, A>),
    Directory(Directory<C, A>),
}

impl<C, A> Entry<C, A> {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    /// The name this entry is keyed by in its parent.
    ///
    /// An unnamed directory (a root) yields the empty string.
    pub fn entry_name(&self) -> &str {
        match self {
            Entry::File(file) => file.file_name(),
            Entry::Directory(dir) => dir.dir_name().unwrap_or(""),
        }
    }

    pub fn as_file(&self) -> Option<&File<C, A>> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory<C, A>> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn into_file(self) -> Option<File<C, A>> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Directory(_) => None,
        }
    }

    pub fn into_directory(self) -> Option<Directory<C, A>> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}

impl<C, A> Node for Entry<C, A> {
    type Data = A;

    fn name(&self) -> Option<&str> {
        match self {
            Entry::File(file) => file.name(),
            Entry::Directory(dir) => dir.name(),
        }
    }

    fn data(&self) -> &A {
        match self {
            Entry::File(file) => file.data(),
            Entry::Directory(dir) => dir.data(),
        }
    }

    fn data_mut(&mut self) -> &mut A {
        match self {
            Entry::File(file) => file.data_mut(),
            Entry::Directory(dir) => dir.data_mut(),
        }
    }

    fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }
}

impl<C, A> From<File<C, A>> for Entry<C, A> {
    fn from(file: File<C, A>) -> Self {
        Entry::File(file)
    }
}

impl<C, A> From<Directory<C, A>> for Entry<C, A> {
    fn from(dir: Directory<C, A>) -> Self {
        Entry::Directory(dir)
    }
}
