use std::io::Write;

use proxy_provider_converter::settings::{update_settings_from_content, Settings};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.listen_address, "127.0.0.1");
    assert_eq!(settings.listen_port, 25500);
    assert_eq!(settings.default_target, "clash");
    assert_eq!(settings.refresh_interval, 3600);
    assert_eq!(settings.health_check_interval, 600);
    assert_eq!(settings.health_check_url, "http://www.gstatic.com/generate_204");
}

#[test]
fn test_load_from_content_partial_overrides() {
    let toml_content = r#"
listen_address = "0.0.0.0"
listen_port = 8080
default_target = "surge"
"#;

    let settings = Settings::load_from_content(toml_content).unwrap();
    assert_eq!(settings.listen_address, "0.0.0.0");
    assert_eq!(settings.listen_port, 8080);
    assert_eq!(settings.default_target, "surge");
    // Unspecified fields keep their defaults
    assert_eq!(settings.refresh_interval, 3600);
    assert_eq!(settings.health_check_interval, 600);
}

#[test]
fn test_load_from_content_empty_listen_address() {
    let settings = Settings::load_from_content("listen_address = \"  \"\n").unwrap();
    assert_eq!(settings.listen_address, "127.0.0.1");
}

#[test]
fn test_load_from_content_rejects_invalid_toml() {
    assert!(Settings::load_from_content("listen_port = \"not a number\"").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "refresh_interval = 7200").unwrap();
    writeln!(file, "health_check_url = \"http://probe.example/204\"").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let settings = Settings::load_from_file(&path).unwrap();
    assert_eq!(settings.pref_path, path);
    assert_eq!(settings.refresh_interval, 7200);
    assert_eq!(settings.health_check_url, "http://probe.example/204");
}

#[test]
fn test_fragment_config_from_settings() {
    let settings = Settings::load_from_content(
        r#"
refresh_interval = 1800
health_check_interval = 120
"#,
    )
    .unwrap();

    let config = settings.fragment_config();
    assert_eq!(config.refresh_interval, 1800);
    assert_eq!(config.health_check_interval, 120);
    assert_eq!(config.health_check_url, "http://www.gstatic.com/generate_204");
}

#[test]
fn test_update_settings_from_content() {
    update_settings_from_content("default_target = \"surge\"\n").unwrap();
    let settings = Settings::current();
    assert_eq!(settings.default_target, "surge");
}
