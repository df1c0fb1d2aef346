use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::AppEntry;

/// Per-app UI-mode preferences derived from the catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabletConfig {
    pub tablet_mode: bool,
    pub force_tablet_ui: bool,
    pub stylus_support: bool,
    pub multi_window: bool,
    pub resizable: bool,
}

impl TabletConfig {
    pub fn for_app(app: &AppEntry) -> Self {
        Self {
            tablet_mode: true,
            force_tablet_ui: app.tablet_optimized,
            stylus_support: app.stylus_support,
            multi_window: true,
            resizable: true,
        }
    }
}

pub fn config_path(root: &Path, package: &str) -> Result<PathBuf> {
    if package.is_empty() {
        bail!("package identifier is empty");
    }
    Ok(root
        .join("data")
        .join("data")
        .join(package)
        .join("tablet-config")
        .join("tablet.json"))
}

pub fn write_config(path: &Path, config: &TabletConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(config).context("serialize tablet.json")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
