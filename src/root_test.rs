use super::*;

#[test]
fn memory_root_starts_without_attributes() {
    assert_eq!(MemoryRoot::new().attribute("data-theme"), None);
}

#[test]
fn memory_root_set_attribute_replaces_value() {
    let root = MemoryRoot::with_attribute("data-theme", "light");
    root.set_attribute("data-theme", "dark");
    assert_eq!(root.attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(root.attribute("class"), None);
}
