// tests/config_test.rs
use bump_android::config::{load_config, Config, LOCAL_CONFIG_FILE};
use bump_android::domain::BumpType;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
bump_type = "minor"

[git]
remote = "upstream"
release_branch = "main"
tag_pattern = "release-{version}"

[gradle]
file_name = "build.gradle.kts"
search_dir = "android"

[export]
enabled = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.resolve_bump_type(None).unwrap(), BumpType::Minor);
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.git.release_branch, "main");
    assert_eq!(config.git.source_branch, "develop");
    assert_eq!(config.git.tag_for("3.1.0"), "release-3.1.0");
    assert_eq!(config.gradle.file_name, "build.gradle.kts");
    assert_eq!(config.gradle.search_dir, PathBuf::from("android"));
    assert!(!config.export.enabled);
    assert_eq!(config.export.program, "envman");
}

#[test]
fn test_unknown_bump_type_in_file_is_rejected_on_resolve() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"bump_type = \"build\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert!(config.resolve_bump_type(None).is_err());
    assert_eq!(
        config.resolve_bump_type(Some("patch")).unwrap(),
        BumpType::Patch
    );
}

#[test]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git]\nmerge_release = \"yes\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_config_file_is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[git]\nmerge_release = false\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_config(None);
    std::env::set_current_dir(original).unwrap();

    let config = loaded.unwrap();
    assert!(!config.git.merge_release);
    assert_eq!(config.git, {
        let mut git = Config::default().git;
        git.merge_release = false;
        git
    });
}
