use crate::error::{Result, SfiError};
use crate::types::config::SfiConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "sfi.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sfi/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sfi/config.toml";

/// Loads the layered configuration for the directory holding the evidence.
///
/// Returns `None` when the directory has no `sfi.toml`; the global and local
/// layers only refine a project configuration, they never stand alone.
pub fn load_config(root: &Path) -> Result<Option<SfiConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SfiConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        tracing::debug!(path = %repo_path.display(), "no project configuration");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: SfiConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| SfiError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging configuration layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SfiError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[review]
reviewer = "Global QA"

[review.overrides]
waterless = true

[logging]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[project]
name = "Spring line"

[review.overrides]
refillable = true
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".sfi")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[review]
reviewer = "Bench chemist"

[review.overrides]
waterless = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.project_name(), Some("Spring line"));
        assert_eq!(cfg.reviewer(), Some("Bench chemist"));
        assert_eq!(cfg.log_level(), Some("info"));
        assert_eq!(
            cfg.overrides(),
            vec![
                ("refillable".to_string(), true),
                ("waterless".to_string(), false)
            ]
        );
    }

    #[test]
    fn load_config_rejects_invalid_merged_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\nfail_under = 250\n",
        )
        .expect("project config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(SfiError::ConfigParse(_))));
    }

    #[test]
    fn load_config_reports_path_on_syntax_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[project\n")
            .expect("project config should write");

        match load_config_with_global(root.path(), None) {
            Err(SfiError::ConfigParse(message)) => assert!(message.contains("sfi.toml")),
            other => panic!("expected config parse error, got {other:?}"),
        }
    }
}
