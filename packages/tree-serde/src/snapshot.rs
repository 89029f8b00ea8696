//! Whole-tree snapshots as JSON.
//!
//! A snapshot is the root directory serialized with its children nested
//! under `children`, each entry tagged with `"type": "file"` or
//! `"type": "directory"`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use treefs_store::{Directory, Entry, Path, TreeStore};

use crate::error::{Error, Result};

/// Serialize a whole store.
pub fn to_json<C: Serialize, A: Serialize>(store: &TreeStore<C, A>) -> Result<serde_json::Value> {
    serde_json::to_value(store.root()).map_err(|e| Error::encode(e.to_string()))
}

pub fn to_string_pretty<C: Serialize, A: Serialize>(store: &TreeStore<C, A>) -> Result<String> {
    serde_json::to_string_pretty(store.root()).map_err(|e| Error::encode(e.to_string()))
}

/// Rebuild a store from a snapshot.
///
/// Every child must be keyed by its own name, and only the root may be
/// unnamed.
pub fn from_json<C, A>(json: serde_json::Value) -> Result<TreeStore<C, A>>
where
    C: DeserializeOwned,
    A: DeserializeOwned + Default,
{
    let root: Directory<C, A> =
        serde_json::from_value(json).map_err(|e| Error::decode(e.to_string()))?;
    check_names(&root, &Path::root())?;
    debug!("snapshot: loaded {} entries", root.descendant_count());
    Ok(TreeStore::with_root(root))
}

pub fn from_str<C, A>(s: &str) -> Result<TreeStore<C, A>>
where
    C: DeserializeOwned,
    A: DeserializeOwned + Default,
{
    let json: serde_json::Value =
        serde_json::from_str(s).map_err(|e| Error::decode(e.to_string()))?;
    from_json(json)
}

fn check_names<C, A>(dir: &Directory<C, A>, at: &Path) -> Result<()> {
    for (key, child) in dir.children() {
        let mut path = at.clone();
        path.push(key.as_str());
        if matches!(child, Entry::Directory(sub) if sub.is_root()) {
            return Err(Error::decode(format!("directory '{}' has no name", path)));
        }
        if child.entry_name() != key {
            return Err(Error::decode(format!(
                "entry '{}' is named '{}'",
                path,
                child.entry_name()
            )));
        }
        if let Entry::Directory(sub) = child {
            check_names(sub, &path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use treefs_store::{Metadata, Node};

    type Store = TreeStore<String>;

    #[test]
    fn snapshot_shape() {
        let mut store = Store::new();
        store.write_file("src/lib.rs", "//! docs".to_string()).unwrap();

        let json = to_json(&store).unwrap();
        assert_eq!(json["children"]["src"]["type"], "directory");
        assert_eq!(json["children"]["src"]["children"]["lib.rs"]["type"], "file");
        assert_eq!(
            json["children"]["src"]["children"]["lib.rs"]["content"],
            "//! docs"
        );
        assert!(json.get("name").is_none());
    }

    #[test]
    fn snapshot_restores_tree() {
        let mut store = Store::new();
        store
            .update_file("a/b.txt", |file| {
                file.set_content("b".to_string());
                file.data_mut().insert("k".into(), "v".into());
            })
            .unwrap();
        store.create_directory("a/empty").unwrap();
        store.update_file("a/unwritten", |_| ()).unwrap();

        let restored: Store = from_str(&to_string_pretty(&store).unwrap()).unwrap();
        assert_eq!(restored, store);
        assert!(restored.read_file("a/unwritten").unwrap_err().is_not_found());
    }

    #[test]
    fn mismatched_key_is_rejected() {
        let json = json!({
            "children": {
                "a": { "type": "file", "name": "b", "content": "x" }
            }
        });
        let err = from_json::<String, Metadata>(json).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn unnamed_nested_directory_is_rejected() {
        let json = json!({
            "children": {
                "": { "type": "directory", "children": {} }
            }
        });
        let err = from_json::<String, Metadata>(json).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("has no name"));

        let named = json!({
            "children": {
                "": { "type": "directory", "name": "", "children": {} }
            }
        });
        let store: Store = from_json(named).unwrap();
        assert!(!store.read_directory_entry(Path::from_segments([""])).unwrap().is_root());
    }

    #[test]
    fn malformed_snapshot_is_decode_error() {
        let err = from_str::<String, Metadata>("{\"children\": 3}").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        let err = from_str::<String, Metadata>("not json").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn empty_object_is_empty_store() {
        let store: Store = from_json(json!({})).unwrap();
        assert!(store.is_empty());
        assert!(store.root().is_root());
    }
}
