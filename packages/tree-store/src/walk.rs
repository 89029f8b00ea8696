//! Lazy pre-order traversal over a directory tree.

use std::iter::FusedIterator;

use crate::node::{Directory, Entry};
use crate::path::Path;

/// Iterator over `(Path, &Entry)` pairs below a directory, in pre-order.
///
/// A directory is yielded before its children, and siblings are visited in
/// name order. Paths are relative to the directory the walk started from.
/// The walk borrows the tree, so it always sees one consistent state.
pub struct Walk<'a, C, A> {
    stack: Vec<(Path, &'a Entry<C, A>)>,
}

impl<'a, C, A> Walk<'a, C, A> {
    pub(crate) fn new(dir: &'a Directory<C, A>) -> Self {
        let mut walk = Walk { stack: Vec::new() };
        walk.push_children(&Path::root(), dir);
        walk
    }

    fn push_children(&mut self, parent: &Path, dir: &'a Directory<C, A>) {
        // Reverse order so the smallest name is popped first
        for (name, child) in dir.children().iter().rev() {
            let mut child_path = parent.clone();
            child_path.push(name.clone());
            self.stack.push((child_path, child));
        }
    }
}

impl<'a, C, A> Iterator for Walk<'a, C, A> {
    type Item = (Path, &'a Entry<C, A>);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, entry) = self.stack.pop()?;
        if let Entry::Directory(dir) = entry {
            self.push_children(&path, dir);
        }
        Some((path, entry))
    }
}

impl<C, A> FusedIterator for Walk<'_, C, A> {}
