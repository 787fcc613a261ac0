use super::*;

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("crm-theme"), Ok(None));
    assert!(store.is_empty());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("crm-theme", "dark").unwrap();
    assert_eq!(store.get("crm-theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::with_entry("crm-theme", "dark");
    store.set("crm-theme", "light").unwrap();
    assert_eq!(store.get("crm-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::with_entry("a", "1");
    assert_eq!(store.get("b"), Ok(None));
}
