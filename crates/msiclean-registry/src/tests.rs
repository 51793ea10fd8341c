use super::*;

fn sample_registry() -> MemoryRegistry {
    let registry = MemoryRegistry::new();
    registry.set_value(r"SOFTWARE\Vendor\Tool", "DisplayName", "Tool 1.0");
    registry.set_value(r"SOFTWARE\Vendor\Tool", "Version", 0x0100_0000_u32);
    registry.create_key(r"SOFTWARE\Vendor\Tool\Features\Core");
    registry.create_key(r"SOFTWARE\Vendor\Other");
    registry
}

fn open(registry: &MemoryRegistry, path: &str, access: KeyAccess) -> MemoryKey {
    registry
        .open_root(path, access)
        .expect("memory registry must not fail")
        .expect("key must exist")
}

#[test]
fn open_root_reports_missing_key_as_none() {
    let registry = sample_registry();
    let missing = registry
        .open_root(r"SOFTWARE\Missing", KeyAccess::Read)
        .expect("missing key must not be an error");
    assert!(missing.is_none());
}

#[test]
fn open_is_case_insensitive_and_keeps_stored_names() {
    let registry = sample_registry();
    let key = open(&registry, r"software\VENDOR\tool", KeyAccess::Read);
    assert_eq!(key.path(), r"SOFTWARE\Vendor\Tool");

    let features = key
        .open_subkey("features", KeyAccess::Read)
        .expect("must open")
        .expect("subkey must exist");
    assert_eq!(features.path(), r"SOFTWARE\Vendor\Tool\Features");
}

#[test]
fn subkey_names_are_a_snapshot() {
    let registry = sample_registry();
    let vendor = open(&registry, r"SOFTWARE\Vendor", KeyAccess::ReadWrite);
    let names = vendor.subkey_names().expect("must list subkeys");
    assert_eq!(names, vec!["Other", "Tool"]);

    vendor
        .delete_subkey_tree("Tool")
        .expect("read-write key must delete");
    assert_eq!(names, vec!["Other", "Tool"]);
    assert_eq!(registry.list_subkeys(r"SOFTWARE\Vendor"), vec!["Other"]);
}

#[test]
fn values_read_back_with_kind() {
    let registry = sample_registry();
    let key = open(&registry, r"SOFTWARE\Vendor\Tool", KeyAccess::Read);

    assert_eq!(
        key.value_names().expect("must list values"),
        vec!["DisplayName", "Version"]
    );
    assert_eq!(
        key.value("displayname").expect("must read"),
        Some(RegistryValue::String("Tool 1.0".to_string()))
    );
    assert_eq!(
        key.value("Version").expect("must read"),
        Some(RegistryValue::Dword(0x0100_0000))
    );
    assert_eq!(key.value("Missing").expect("must read"), None);
}

#[test]
fn string_value_ignores_non_string_kinds() {
    let registry = sample_registry();
    registry.set_value(
        r"SOFTWARE\Vendor\Tool",
        "Paths",
        RegistryValue::MultiString(vec!["a".to_string(), "b".to_string()]),
    );
    registry.set_value(
        r"SOFTWARE\Vendor\Tool",
        "InstallDir",
        RegistryValue::ExpandString("%ProgramFiles%\\Tool".to_string()),
    );
    let key = open(&registry, r"SOFTWARE\Vendor\Tool", KeyAccess::Read);

    assert_eq!(key.string_value("Version").expect("must read"), None);
    assert_eq!(key.string_value("Paths").expect("must read"), None);
    assert_eq!(
        key.string_value("InstallDir").expect("must read").as_deref(),
        Some("%ProgramFiles%\\Tool")
    );
}

#[test]
fn set_value_replaces_existing_name_case_insensitively() {
    let registry = sample_registry();
    registry.set_value(r"SOFTWARE\Vendor\Tool", "DISPLAYNAME", "Tool 2.0");
    let tree = registry
        .tree(r"SOFTWARE\Vendor\Tool")
        .expect("key must exist");
    assert_eq!(tree.values.len(), 2);
    assert_eq!(
        tree.values.get("DISPLAYNAME"),
        Some(&RegistryValue::from("Tool 2.0"))
    );
}

#[test]
fn read_only_key_refuses_delete() {
    let registry = sample_registry();
    let vendor = open(&registry, r"SOFTWARE\Vendor", KeyAccess::Read);
    let err = vendor
        .delete_subkey_tree("Tool")
        .expect_err("read-only key must not delete");
    assert!(
        err.to_string().contains("read-only"),
        "unexpected error: {err}"
    );
    assert!(registry.key_exists(r"SOFTWARE\Vendor\Tool\Features\Core"));
}

#[test]
fn delete_removes_whole_subtree() {
    let registry = sample_registry();
    let vendor = open(&registry, r"SOFTWARE\Vendor", KeyAccess::ReadWrite);
    vendor.delete_subkey_tree("tool").expect("must delete");

    assert!(!registry.key_exists(r"SOFTWARE\Vendor\Tool"));
    assert!(!registry.key_exists(r"SOFTWARE\Vendor\Tool\Features\Core"));
    assert!(registry.key_exists(r"SOFTWARE\Vendor\Other"));
}

#[test]
fn delete_of_missing_subkey_is_an_error() {
    let registry = sample_registry();
    let vendor = open(&registry, r"SOFTWARE\Vendor", KeyAccess::ReadWrite);
    let err = vendor
        .delete_subkey_tree("Gone")
        .expect_err("missing key must fail");
    assert!(
        err.to_string().contains(r"SOFTWARE\Vendor\Gone"),
        "unexpected error: {err}"
    );
}

#[test]
fn clones_share_one_tree() {
    let registry = sample_registry();
    let view = registry.clone();
    view.create_key(r"SOFTWARE\Vendor\Added");
    assert!(registry.key_exists(r"SOFTWARE\Vendor\Added"));
}

#[test]
fn join_key_path_skips_empty_parent() {
    assert_eq!(join_key_path("", "SOFTWARE"), "SOFTWARE");
    assert_eq!(join_key_path("SOFTWARE", "Classes"), r"SOFTWARE\Classes");
}

#[test]
fn open_subkey_uses_requested_access() {
    let registry = sample_registry();
    let vendor = open(&registry, r"SOFTWARE\Vendor", KeyAccess::Read);
    let tool = vendor
        .open_subkey("Tool", KeyAccess::ReadWrite)
        .expect("must open")
        .expect("subkey must exist");
    assert_eq!(vendor.access(), KeyAccess::Read);
    assert_eq!(tool.access(), KeyAccess::ReadWrite);
    tool.delete_subkey_tree("Features")
        .expect("writable subkey of a read-only parent must delete");
    assert!(!registry.key_exists(r"SOFTWARE\Vendor\Tool\Features"));
}
