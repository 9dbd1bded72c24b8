use mdbundle_core::closure::DedupeKey;
use mdbundle_core::config::loader::ConfigLoader;
use mdbundle_core::vault::LinkMode;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_full_config_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[export]
vault_root = "/tmp/vault"
excluded_folders = ["templates", "{{vault_root}}/archive"]
max_depth = 32
dedupe = "file-name"
links_per_line = "last"
use_index = false

[logging]
level = "debug"
file = "{{vault_root}}/mdbundle.log"
file_level = "trace"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/vault");
    assert_eq!(
        rc.excluded_folders,
        vec![PathBuf::from("templates"), PathBuf::from("/tmp/vault/archive")]
    );
    assert_eq!(rc.resolver.max_depth, 32);
    assert_eq!(rc.resolver.dedupe, DedupeKey::FileName);
    assert_eq!(rc.resolver.link_mode, LinkMode::Last);
    assert!(!rc.use_index);
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/vault/mdbundle.log")));
}

#[test]
fn load_minimal_config_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.vault_root, PathBuf::from("."));
    assert!(rc.excluded_folders.is_empty());
    assert_eq!(rc.resolver.max_depth, 256);
    assert_eq!(rc.resolver.dedupe, DedupeKey::Stem);
    assert_eq!(rc.resolver.link_mode, LinkMode::All);
    assert!(rc.use_index);
    assert_eq!(rc.logging.level, "warn");
    assert!(rc.logging.file.is_none());
}

#[test]
fn vault_override_wins_and_feeds_substitution() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[export]
vault_root = "/tmp/configured"
excluded_folders = ["{{vault_root}}/archive"]
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some(Path::new("/srv/notes"))).unwrap();
    assert_eq!(rc.vault_root, PathBuf::from("/srv/notes"));
    assert_eq!(rc.excluded_folders, vec![PathBuf::from("/srv/notes/archive")]);
}
