//! Segmented paths into the tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path into a tree store, as an ordered list of segments.
///
/// The empty path denotes the root directory. Segments are atomic names:
/// no segment is ever interpreted, normalized or validated, so an empty-string
/// segment is an ordinary (if unusual) name.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// The root path (zero segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Split a path string on `/`.
    ///
    /// This is a literal split. Empty segments are kept, so `"a//b"` yields
    /// `["a", "", "b"]`, `"/a"` yields `["", "a"]` and `"a/"` yields
    /// `["a", ""]`. The empty string is the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefs_store::Path;
    ///
    /// assert_eq!(Path::parse("a/b").len(), 2);
    /// assert!(Path::parse("").is_root());
    /// assert_eq!(Path::parse("/a").components, vec!["", "a"]);
    /// ```
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self::root();
        }

        Path {
            components: s.split('/').map(|c| c.to_string()).collect(),
        }
    }

    /// Create a path from pre-split segments, unchanged.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Path {
            components: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// True for the root path.
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// The last segment, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// The path without its last segment, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, init) = self.components.split_last()?;
        Some(Path {
            components: init.to_vec(),
        })
    }

    /// Split into the parent segments and the final segment.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.components
            .split_last()
            .map(|(last, init)| (last.as_str(), init))
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }

    /// Append a single segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.components.push(segment.into());
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Path::parse(s)
    }
}

impl From<&Path> for Path {
    fn from(p: &Path) -> Self {
        p.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(components: Vec<String>) -> Self {
        Path { components }
    }
}

impl From<&[String]> for Path {
    fn from(components: &[String]) -> Self {
        Path {
            components: components.to_vec(),
        }
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Path::from_segments(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Path::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Path::from_segments(segments)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Macro for creating paths.
///
/// A single literal is split like [`Path::parse`]; several literals are taken
/// as pre-split segments. So `path!("a/b")` has two segments while
/// `path!["a/b", "c"]` keeps `"a/b"` as one segment.
///
/// # Example
///
/// ```rust
/// use treefs_store::path;
///
/// assert_eq!(path!("docs/readme.md").len(), 2);
/// assert_eq!(path!["a/b", "c"].components, vec!["a/b", "c"]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($s:expr) => {
        $crate::Path::parse($s)
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::from_segments([$($segment),+])
    };
}
