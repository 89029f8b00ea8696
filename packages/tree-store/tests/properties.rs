use collection_literals::btree;

use treefs_store::{
    path, EntryKind, ErrorKind, File, MemoryStore, Metadata, Node, Path, StoreOptions,
    TreeStore, WriteOptions,
};

type Store = TreeStore<String>;

fn text(s: &str) -> String {
    s.to_string()
}

#[test]
fn unseen_paths_are_not_found_in_both_modes() {
    let lenient: MemoryStore<String> = MemoryStore::new();
    let strict: MemoryStore<String> =
        MemoryStore::with_options(StoreOptions::default().prefer_errors(true));

    for p in ["x", "x/y", "deep/er/path.txt"] {
        assert_eq!(lenient.read_file(p).unwrap(), None);
        assert_eq!(lenient.read_directory(p).unwrap(), None);
        assert!(strict.read_file(p).unwrap_err().is_not_found());
        assert!(strict.read_directory(p).unwrap_err().is_not_found());
    }
}

#[test]
fn write_read_roundtrip() {
    let mut store = Store::new();
    for (p, content) in [("a.txt", "one"), ("d/b.txt", "two"), ("d/e/c.txt", "")] {
        store.write_file(p, text(content)).unwrap();
        assert_eq!(store.read_file(p).unwrap(), content);
    }
}

#[test]
fn new_directory_lists_empty() {
    let mut store = Store::new();
    store.create_directory("fresh/dir").unwrap();
    assert_eq!(store.read_directory("fresh/dir").unwrap(), Vec::<String>::new());
}

#[test]
fn remove_directory_removes_descendants_only() {
    let mut store = Store::new();
    store.write_file("keep/a.txt", text("a")).unwrap();
    store.write_file("gone/nested/b.txt", text("b")).unwrap();
    store.create_directory("gone/empty").unwrap();

    store.remove("gone").unwrap();

    assert!(store.read_directory("gone").unwrap_err().is_not_found());
    assert!(store.read_file("gone/nested/b.txt").unwrap_err().is_not_found());
    assert_eq!(store.read_file("keep/a.txt").unwrap(), "a");
    assert_eq!(store.read_directory("").unwrap(), vec!["keep"]);
}

#[test]
fn nested_write_lists_parents() {
    let mut store = Store::new();
    store.write_file("a/b.txt", text("x")).unwrap();
    assert_eq!(store.read_directory("").unwrap(), vec!["a"]);
    assert_eq!(store.read_directory("a").unwrap(), vec!["b.txt"]);
}

#[test]
fn file_as_parent_is_type_mismatch() {
    let mut store = Store::new();
    store.write_file("a", text("original")).unwrap();

    let err = store.write_file("a/b.txt", text("new")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(store.read_file("a").unwrap(), "original");
    assert_eq!(store.len(), 1);
}

#[test]
fn non_recursive_create_leaves_no_trace() {
    let mut store = Store::new();
    let err = store
        .create_directory_with("x/y", WriteOptions::non_recursive())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!store.exists("x"));
    assert!(store.is_empty());
}

#[test]
fn enumeration_is_pre_order() {
    let mut store = Store::new();
    store.create_directory("foo/bar").unwrap();
    store.write_file("foo/bar/baz.txt", text("z")).unwrap();

    let seen: Vec<(Path, EntryKind)> = store.walk().map(|(p, e)| (p, e.kind())).collect();
    assert_eq!(
        seen,
        vec![
            (path!["foo"], EntryKind::Directory),
            (path!["foo", "bar"], EntryKind::Directory),
            (path!["foo", "bar", "baz.txt"], EntryKind::File),
        ]
    );
}

#[test]
fn create_directory_twice_is_idempotent() {
    let mut store: MemoryStore<String> = MemoryStore::new();
    assert!(store.create_directory("a/b").unwrap());
    let before = store.tree().clone();
    assert!(store.create_directory("a/b").unwrap());
    assert_eq!(store.tree(), &before);
}

#[test]
fn aux_data_survives_content_rewrite() {
    let meta: Metadata = btree! {
        "content-type".to_string() => "text/plain".to_string(),
        "owner".to_string() => "build".to_string(),
    };

    let mut store = Store::new();
    store
        .update_file("out/log.txt", |file: &mut File<String>| {
            file.set_content(text("line 1"));
            *file.data_mut() = meta.clone();
        })
        .unwrap();
    store.write_file("out/log.txt", text("line 2")).unwrap();

    let file = store.read_file_entry("out/log.txt").unwrap();
    assert_eq!(file.content(), Some(&text("line 2")));
    assert_eq!(file.data(), &meta);
}

#[test]
fn failed_create_leaves_tree_intact() {
    let mut store = Store::new();
    store.write_file("a/file", text("x")).unwrap();
    store.create_directory("b").unwrap();
    let err = store.create_directory("a/file/c").unwrap_err();
    assert_eq!(err.path(), &path!("a/file"));
    assert!(store.is_directory("b"));
    assert!(store.is_file("a/file"));
}

#[test]
fn deep_paths_write_count_remove_and_drop() {
    let depth = 10_000;
    let mut segments: Vec<String> = (0..depth).map(|i| format!("d{i}")).collect();
    segments.push("leaf.txt".to_string());
    let deep = Path::from(segments);

    let mut store = Store::new();
    store.write_file(&deep, text("bottom")).unwrap();
    assert_eq!(store.read_file(&deep).unwrap(), "bottom");
    assert_eq!(store.len(), depth + 1);

    let detached = store.remove("d0").unwrap();
    assert!(detached.is_directory());
    drop(detached);
    assert!(store.is_empty());

    let mut facade: MemoryStore<String> = MemoryStore::new();
    assert!(facade.write_file(&deep, text("again")).unwrap());
    assert!(facade.remove("d0").unwrap());

    store.write_file(&deep, text("dropped with the store")).unwrap();
    drop(store);
}
