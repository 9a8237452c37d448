use std::fs;

use tempfile::TempDir;
use vitrine_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    StorefrontConfigSource,
};

fn loader(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .with_env_file(dir.path().join("missing.env"))
        .with_search_root(dir.path())
}

#[test]
fn explicit_toml_file_is_loaded_and_converted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storefront.toml");
    fs::write(
        &path,
        r#"
[deals]
autoplay_interval_ms = 5500

[responsive]
breakpoint_px = 900

[images]
unavailable_suffix = " [missing]"
"#,
    )
    .unwrap();

    let load = loader(&dir).with_config_path(&path).load().unwrap();
    assert_eq!(load.source, StorefrontConfigSource::File(path));
    assert!(!load.env_file_loaded);
    assert!(load.warnings.is_empty());
    assert_eq!(load.settings.deals.autoplay_interval.as_millis(), 5_500);
    assert_eq!(load.settings.responsive.breakpoint_px, 900);
    assert_eq!(load.settings.images.unavailable_suffix, " [missing]");
    assert_eq!(load.settings.testimonials.autoplay_interval.as_millis(), 6_000);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = loader(&dir)
        .with_config_path(dir.path().join("nope.toml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Storefront(_)));
    let rendered = format!("{err:#}");
    assert!(rendered.contains("failed to load storefront configuration"));
}

#[test]
fn invalid_values_are_rejected_after_guard_rails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, "[testimonials]\ngroup_size = 0\n").unwrap();
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Settings { .. }));
}

#[test]
fn guard_rail_failures_surface() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(&path, r#"{"hero": {"autoplay_interval_ms": 100}}"#).unwrap();
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::AutoplayTooFast { .. })
    ));
}

#[test]
fn disabled_autoplay_loads_with_a_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, "[hero]\nautoplay_interval_ms = 0\n").unwrap();
    let load = loader(&dir).with_config_path(&path).load().unwrap();
    assert_eq!(load.warnings.len(), 1);
    assert!(!load.settings.hero.autoplay_interval.is_enabled());
}

#[test]
fn env_file_is_read_when_present() {
    let dir = TempDir::new().unwrap();
    let env_path = dir.path().join("test.env");
    fs::write(&env_path, "VITRINE_LOADER_TEST_MARKER=1\n").unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, "").unwrap();

    let load = ConfigLoader::new()
        .with_env_file(&env_path)
        .with_config_path(&path)
        .load()
        .unwrap();
    assert!(load.env_file_loaded);
    assert_eq!(
        std::env::var("VITRINE_LOADER_TEST_MARKER").as_deref(),
        Ok("1")
    );
}

#[test]
fn options_locate_default_file_under_search_root() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config").join("vitrine.json");
    fs::write(&path, r#"{"testimonials": {"group_size": 2}}"#).unwrap();

    let load = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: None,
        env_file: Some(dir.path().join("missing.env")),
        search_root: Some(dir.path().to_path_buf()),
    })
    .load()
    .unwrap();
    assert_eq!(load.source, StorefrontConfigSource::File(path));
    assert_eq!(load.warnings.len(), 1);
    assert!(load.warnings.items[0].message.contains("responsive policy"));
}
