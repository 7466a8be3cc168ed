/// End-to-end: YAML configuration in, roster out
use dur::config::ModuleConfig;
use dur::{UserRecord, UserRegistry};

#[test]
fn test_role_derived_end_to_end() {
    let config = ModuleConfig::from_yaml_str("roles: [\"site administrator\", editor]\npassword: secret\n").unwrap();
    let registry = UserRegistry::from_config(&config).unwrap();
    let roster = registry.users();

    assert_eq!(roster.len(), 2);
    assert_eq!(
        roster.get("test.site.administrator"),
        Some(&UserRecord::new("test.site.administrator", "secret", vec!["site administrator".to_string()], None))
    );
    assert_eq!(
        roster.get("test.editor"),
        Some(&UserRecord::new("test.editor", "secret", vec!["editor".to_string()], None))
    );
}

#[test]
fn test_roster_json_output() {
    let config = ModuleConfig::from_yaml_str("roles: [editor]\npassword: secret\n").unwrap();
    let registry = UserRegistry::from_config(&config).unwrap();

    let json = serde_json::to_value(registry.users()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "test.editor": {
                "name": "test.editor",
                "password": "secret",
                "roles": ["editor"],
                "is_root": false
            }
        })
    );
}

#[test]
fn test_repeated_loads_return_same_roster() {
    let config = ModuleConfig::from_yaml_str("users:\n  - name: a\n    pass: x\n  - name: b\n").unwrap();
    let registry = UserRegistry::from_config(&config).unwrap();

    let first = registry.users().clone();

    assert_eq!(&first, registry.users());
    assert_eq!(registry.get_user("b").unwrap().password, "");
}
