use dur::config::ModuleConfig;
use dur::{ConfigurationError, RoleDerivedUserSource, UserSource};

fn config_with(roles: &[&str], prefix: Option<&str>) -> ModuleConfig {
    ModuleConfig {
        roles: Some(roles.iter().map(|r| r.to_string()).collect()),
        password: Some("secret".to_string()),
        username_prefix: prefix.map(str::to_string),
        ..ModuleConfig::default()
    }
}

#[test]
fn test_username_synthesis() {
    let source = RoleDerivedUserSource::new(&config_with(&["forum moderator", "high-level administrator"], None)).unwrap();
    let names: Vec<&str> = source.load().names().collect();

    assert_eq!(names, vec!["test.forum.moderator", "test.high.level.administrator"]);
}

#[test]
fn test_default_prefix() {
    let source = RoleDerivedUserSource::new(&config_with(&["editor"], None)).unwrap();

    assert_eq!(source.prefix(), "test");
}

#[test]
fn test_custom_prefix() {
    let source = RoleDerivedUserSource::new(&config_with(&["editor"], Some("qa-bot"))).unwrap();

    assert!(source.load().contains("qa-bot.editor"));
}

#[test]
fn test_prefix_too_short_is_rejected() {
    let err = RoleDerivedUserSource::new(&config_with(&["editor"], Some("abc"))).unwrap_err();

    assert_eq!(
        err,
        ConfigurationError::UsernamePrefixTooShort {
            prefix: "abc".to_string(),
            min: 4,
        }
    );
}

#[test]
fn test_prefix_of_minimum_length_is_accepted() {
    let source = RoleDerivedUserSource::new(&config_with(&["editor"], Some("abcd"))).unwrap();

    assert!(source.load().contains("abcd.editor"));
}

#[test]
fn test_empty_prefix_is_rejected() {
    assert!(RoleDerivedUserSource::new(&config_with(&["editor"], Some(""))).is_err());
}

#[test]
fn test_record_fields() {
    let source = RoleDerivedUserSource::new(&config_with(&["site administrator"], None)).unwrap();
    let user = source.load().get("test.site.administrator").unwrap();

    assert_eq!(user.password, "secret");
    assert_eq!(user.roles, vec!["site administrator".to_string()]);
    assert_eq!(user.email, None);
    assert!(!user.is_root);
}

#[test]
fn test_colliding_roles_collapse_to_last() {
    let source = RoleDerivedUserSource::new(&config_with(&["content-editor", "editor", "content editor"], None)).unwrap();
    let roster = source.load();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("test.content.editor").unwrap().roles, vec!["content editor".to_string()]);
}

#[test]
fn test_duplicate_roles_collapse() {
    let source = RoleDerivedUserSource::new(&config_with(&["editor", "editor"], None)).unwrap();

    assert_eq!(source.load().len(), 1);
}

#[test]
fn test_missing_roles_builds_empty_roster() {
    let config = ModuleConfig {
        password: Some("secret".to_string()),
        ..ModuleConfig::default()
    };

    let source = RoleDerivedUserSource::new(&config).unwrap();

    assert!(source.load().is_empty());
}

#[test]
fn test_load_is_idempotent() {
    let source = RoleDerivedUserSource::new(&config_with(&["editor", "author"], None)).unwrap();

    let first = source.load().clone();

    assert_eq!(&first, source.load());
}
