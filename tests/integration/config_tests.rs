use checksums2dups::config::{Config, ConfigError};
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_load_defaults() {
    // Use figment directly without Env to avoid interference from other tests
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .extract()
        .unwrap();
    assert_eq!(config.json_indent, 4);
    assert!(!config.normalize_unicode);
    assert!(!config.keep_going);
}

#[test]
fn test_config_load_from_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "json_indent = 8\nnormalize_unicode = true\nkeep_going = true\n",
    )
    .unwrap();

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .extract()
        .unwrap();

    assert_eq!(config.json_indent, 8);
    assert!(config.normalize_unicode);
    assert!(config.keep_going);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "normalize_unicode = true\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(config.normalize_unicode);
    assert!(!config.keep_going);
}

#[test]
fn test_invalid_toml_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "json_indent = \"wide\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_env_layer_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "json_indent = 2\n").unwrap();

    figment::Jail::expect_with(|jail| {
        jail.set_env("CHECKSUMS2DUPS_JSON_INDENT", "6");
        let config = Config::load(Some(&path)).expect("config loads");
        assert_eq!(config.json_indent, 6);
        Ok(())
    });
}

#[test]
fn test_config_path_variable_is_not_a_setting() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "keep_going = true\n").unwrap();

    figment::Jail::expect_with(|jail| {
        jail.set_env("CHECKSUMS2DUPS_CONFIG", path.display().to_string());
        let figment = Config::figment(Some(&path)).expect("figment builds");
        assert!(figment.find_value("config").is_err());
        let config: Config = figment.extract()?;
        assert!(config.keep_going);
        Ok(())
    });
}
