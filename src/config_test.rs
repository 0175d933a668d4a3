use super::*;
use serial_test::serial;

#[test]
fn test_http_config_default_has_no_timeout() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "devcn-ui-cli");
    assert!(config.timeout.is_none());
}

#[test]
fn test_component_url_joins_under_base() {
    let config = RegistryConfig::new("https://devcn-ui.dedevs.com/").unwrap();
    assert_eq!(
        config.component_url("ai-message").unwrap().as_str(),
        "https://devcn-ui.dedevs.com/r/ai-message.json"
    );
    assert_eq!(
        config.index_url().unwrap().as_str(),
        "https://devcn-ui.dedevs.com/registry.json"
    );
}

#[test]
fn test_base_without_trailing_slash_keeps_path() {
    let config = RegistryConfig::new("http://localhost:3000/registry").unwrap();
    assert_eq!(
        config.component_url("button").unwrap().as_str(),
        "http://localhost:3000/registry/r/button.json"
    );
}

#[test]
fn test_invalid_registry_url_is_rejected() {
    assert!(matches!(
        RegistryConfig::new("not a url"),
        Err(DevcnError::InvalidRegistryUrl(_))
    ));
    assert!(matches!(
        RegistryConfig::new("ftp://example.com/"),
        Err(DevcnError::InvalidRegistryUrl(_))
    ));
}

#[test]
#[serial]
fn test_from_env_uses_override() {
    std::env::set_var(REGISTRY_URL_ENV, "http://127.0.0.1:9999");
    let config = RegistryConfig::from_env().unwrap();
    std::env::remove_var(REGISTRY_URL_ENV);

    assert_eq!(config.base_url().as_str(), "http://127.0.0.1:9999/");
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    std::env::remove_var(REGISTRY_URL_ENV);
    let config = RegistryConfig::from_env().unwrap();
    assert_eq!(config.base_url().as_str(), DEFAULT_REGISTRY_URL);
}

#[test]
fn test_project_layout_paths() {
    let layout = ProjectLayout::new("/project");
    assert_eq!(layout.manifest_path(), PathBuf::from("/project/package.json"));
    assert_eq!(layout.components_dir(), PathBuf::from("/project/components"));
    assert_eq!(layout.ui_dir(), PathBuf::from("/project/components/ui"));
    assert_eq!(layout.root_file("yarn.lock"), PathBuf::from("/project/yarn.lock"));
    assert_eq!(layout.ui_alias, "@/components/ui");
}
