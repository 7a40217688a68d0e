use crate::error::{ReportError, Result};
use crate::types::config::ReportConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "report.toml";
pub const DEFAULT_LOCAL_FILE: &str = "report.local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/interest-report/config.toml";

/// Loads the layered configuration for a workbook. Every layer is optional.
pub fn load_config(workbook: &Path) -> Result<ReportConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(workbook, global.as_deref())
}

pub(crate) fn load_config_with_global(
    workbook: &Path,
    global_path: Option<&Path>,
) -> Result<ReportConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &workbook.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &workbook.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ReportConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReportError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReportError::ConfigParse(format!("{}: {}", path.display(), e)))
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
