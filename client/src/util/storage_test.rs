use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("absent");
    assert!(store.is_empty());
}

#[test]
fn read_only_storage_rejects_writes_but_serves_seeded_reads() {
    let store = MemoryStorage::read_only();
    store.insert("seed", "1");
    assert_eq!(store.set("k", "v"), Err(StorageError::WriteRejected("k".to_owned())));
    assert_eq!(store.get("seed").as_deref(), Some("1"));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_json_encodes_value() {
    let store = MemoryStorage::new();
    store.set_json("obj", &serde_json::json!({"a": 1})).unwrap();
    assert_eq!(store.get("obj").as_deref(), Some("{\"a\":1}"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_unwritable_off_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get("anything"), None);
    assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    store.remove("k");
}
