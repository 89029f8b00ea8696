//! Path resolution over the directory tree.
//!
//! Every store operation reduces to a descent from the root through the
//! directory segments of a path. A file is never a valid parent segment and
//! an existing entry is never coerced to the other kind.

use tracing::trace;

use crate::error::{Error, Operation, Result};
use crate::node::{Directory, Entry, File};
use crate::path::Path;

/// What a descent does with a missing segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Policy {
    /// Fail with `NotFound`, never mutate.
    Read,
    /// Insert an empty directory when `recursive`, otherwise fail like `Read`.
    Create { recursive: bool },
}

/// A borrowed node: the root or any entry below it.
#[derive(Debug)]
pub enum EntryRef<'a, C, A> {
    File(&'a File<C, A>),
    Directory(&'a Directory<C, A>),
}

impl<'a, C, A> EntryRef<'a, C, A> {
    pub fn is_file(&self) -> bool {
        matches!(self, EntryRef::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, EntryRef::Directory(_))
    }

    pub fn as_file(&self) -> Option<&'a File<C, A>> {
        match *self {
            EntryRef::File(file) => Some(file),
            EntryRef::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&'a Directory<C, A>> {
        match *self {
            EntryRef::Directory(dir) => Some(dir),
            EntryRef::File(_) => None,
        }
    }
}

impl<C, A> Clone for EntryRef<'_, C, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, A> Copy for EntryRef<'_, C, A> {}

impl<'a, C, A> From<&'a Entry<C, A>> for EntryRef<'a, C, A> {
    fn from(entry: &'a Entry<C, A>) -> Self {
        match entry {
            Entry::File(file) => EntryRef::File(file),
            Entry::Directory(dir) => EntryRef::Directory(dir),
        }
    }
}

/// The path of the segment at `depth`, for error reporting.
fn offending(segments: &[String], depth: usize) -> Path {
    Path::from(&segments[..=depth])
}

/// Descend through `segments`, each of which must name a directory.
pub(crate) fn descend<'a, C, A>(
    root: &'a Directory<C, A>,
    segments: &[String],
    operation: Operation,
) -> Result<&'a Directory<C, A>> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = match current.get(segment) {
            Some(Entry::Directory(dir)) => dir,
            Some(Entry::File(_)) => {
                return Err(Error::NotADirectory {
                    operation,
                    path: offending(segments, depth),
                })
            }
            None => {
                return Err(Error::NotFound {
                    operation,
                    path: offending(segments, depth),
                })
            }
        };
    }
    Ok(current)
}

/// Mutable descent through `segments` under `policy`.
///
/// Directories created before a failure stay in place.
pub(crate) fn descend_mut<'a, C, A: Default>(
    root: &'a mut Directory<C, A>,
    segments: &[String],
    operation: Operation,
    policy: Policy,
) -> Result<&'a mut Directory<C, A>> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        if !current.contains(segment) {
            if !matches!(policy, Policy::Create { recursive: true }) {
                return Err(Error::NotFound {
                    operation,
                    path: offending(segments, depth),
                });
            }
            trace!("{}: creating directory '{}'", operation, offending(segments, depth));
            current.insert(Directory::new(segment.as_str()).into());
        }

        current = match current.get_mut(segment) {
            Some(Entry::Directory(dir)) => dir,
            Some(Entry::File(_)) => {
                return Err(Error::NotADirectory {
                    operation,
                    path: offending(segments, depth),
                })
            }
            None => {
                return Err(Error::NotFound {
                    operation,
                    path: offending(segments, depth),
                })
            }
        };
    }
    Ok(current)
}

/// Resolve a full path without mutating. The root path yields the root.
pub(crate) fn lookup<'a, C, A>(
    root: &'a Directory<C, A>,
    path: &Path,
    operation: Operation,
) -> Result<EntryRef<'a, C, A>> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(EntryRef::Directory(root));
    };

    let parent = descend(root, parents, operation)?;
    parent
        .get(last)
        .map(EntryRef::from)
        .ok_or_else(|| Error::NotFound {
            operation,
            path: path.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::path;

    type Dir = Directory<u32, ()>;

    fn sample() -> Dir {
        let mut root = Dir::root();
        root.insert(
            Dir::with_children("a", [Dir::new("b").into(), File::with_content("f", 7).into()])
                .into(),
        );
        root
    }

    #[test]
    fn descend_to_root() {
        let root = sample();
        let dir = descend(&root, &[], Operation::Lookup).unwrap();
        assert!(dir.is_root());
    }

    #[test]
    fn descend_nested() {
        let root = sample();
        let dir = descend(&root, &path!("a/b").components, Operation::Lookup).unwrap();
        assert_eq!(dir.dir_name(), Some("b"));
    }

    #[test]
    fn descend_through_file_fails() {
        let root = sample();
        let err = descend(&root, &path!("a/f/x").components, Operation::Lookup).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.path(), &path!("a/f"));
    }

    #[test]
    fn descend_missing_reports_first_missing_segment() {
        let root = sample();
        let err = descend(&root, &path!("a/x/y").components, Operation::Lookup).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), &path!("a/x"));
    }

    #[test]
    fn read_policy_never_mutates() {
        let mut root = sample();
        let before = root.clone();
        let err = descend_mut(
            &mut root,
            &path!("a/x/y").components,
            Operation::Remove,
            Policy::Read,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(root, before);
    }

    #[test]
    fn create_policy_inserts_directories() {
        let mut root = sample();
        let dir = descend_mut(
            &mut root,
            &path!("a/x/y").components,
            Operation::CreateDirectory,
            Policy::Create { recursive: true },
        )
        .unwrap();
        assert_eq!(dir.dir_name(), Some("y"));
        assert!(descend(&root, &path!("a/x/y").components, Operation::Lookup).is_ok());
    }

    #[test]
    fn non_recursive_create_does_not_insert() {
        let mut root = sample();
        let err = descend_mut(
            &mut root,
            &path!("x/y").components,
            Operation::CreateDirectory,
            Policy::Create { recursive: false },
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!root.contains("x"));
    }

    #[test]
    fn dot_segments_are_ordinary_names() {
        let mut root = sample();
        descend_mut(
            &mut root,
            &path!("a/../b").components,
            Operation::CreateDirectory,
            Policy::Create { recursive: true },
        )
        .unwrap();
        assert!(descend(&root, &path!("a/..").components, Operation::Lookup).is_ok());
        assert!(!root.contains("b"));
    }

    #[test]
    fn create_never_coerces_file() {
        let mut root = sample();
        let err = descend_mut(
            &mut root,
            &path!("a/f/x").components,
            Operation::CreateDirectory,
            Policy::Create { recursive: true },
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let a = root.get("a").and_then(Entry::as_directory).unwrap();
        assert!(a.get("f").unwrap().as_file().is_some());
    }

    #[test]
    fn lookup_entries() {
        let root = sample();
        assert!(lookup(&root, &Path::root(), Operation::Lookup)
            .unwrap()
            .is_directory());
        assert!(lookup(&root, &path!("a/f"), Operation::Lookup)
            .unwrap()
            .is_file());
        let err = lookup(&root, &path!("a/nope"), Operation::Lookup).unwrap_err();
        assert_eq!(err.path(), &path!("a/nope"));
    }

    #[test]
    fn entry_ref_accessors() {
        let root = sample();
        let found = lookup(&root, &path!("a/f"), Operation::Lookup).unwrap();
        assert_eq!(found.as_file().and_then(File::content), Some(&7));
        assert!(found.as_directory().is_none());
    }
}
