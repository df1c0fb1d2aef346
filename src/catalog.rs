use anyhow::{Context, Result};
use log::error;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::paths;

/// One application's metadata record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub package: String,
    pub category: String,
    pub tablet_optimized: bool,
    pub stylus_support: bool,
}

/// Category name to app entries. BTreeMap keeps persisted key order stable.
pub type Catalog = BTreeMap<String, Vec<AppEntry>>;

pub fn catalog_path(root: &Path) -> PathBuf {
    paths::config_dir(root).join("apps.json")
}

/// Loads the catalog, falling back to the built-in defaults on a broken
/// file (without rewriting it) and persisting the defaults when the file
/// does not exist yet.
pub fn load(root: &Path) -> Result<Catalog> {
    let path = catalog_path(root);
    if path.exists() {
        return Ok(read_catalog(&path).unwrap_or_else(|err| {
            error!("Failed to load apps config: {err:#}");
            default_catalog()
        }));
    }
    let catalog = default_catalog();
    write_catalog(&path, &catalog)?;
    Ok(catalog)
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(catalog).context("serialize apps.json")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn app(
    name: &str,
    package: &str,
    category: &str,
    tablet_optimized: bool,
    stylus_support: bool,
) -> AppEntry {
    AppEntry {
        name: name.to_string(),
        package: package.to_string(),
        category: category.to_string(),
        tablet_optimized,
        stylus_support,
    }
}

pub fn default_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "productivity".to_string(),
        vec![
            app("Google Docs", "com.google.android.apps.docs.editors.docs", "productivity", true, true),
            app("Google Sheets", "com.google.android.apps.docs.editors.sheets", "productivity", true, true),
            app("Google Slides", "com.google.android.apps.docs.editors.slides", "productivity", true, true),
            app("Microsoft Word", "com.microsoft.office.word", "productivity", true, true),
            app("Microsoft Excel", "com.microsoft.office.excel", "productivity", true, true),
            app("Microsoft PowerPoint", "com.microsoft.office.powerpoint", "productivity", true, true),
        ],
    );
    catalog.insert(
        "creative".to_string(),
        vec![
            app("Adobe Photoshop Express", "com.adobe.psmobile", "creative", true, true),
            app("Autodesk SketchBook", "com.adsk.sketchbook", "creative", true, true),
            app("Canva", "com.canva.editor", "creative", true, false),
            app("Concepts", "com.tophatch.concepts", "creative", true, true),
        ],
    );
    catalog.insert(
        "entertainment".to_string(),
        vec![
            app("Netflix", "com.netflix.mediaclient", "entertainment", true, false),
            app("Spotify", "com.spotify.music", "entertainment", true, false),
            app("YouTube", "com.google.android.youtube", "entertainment", true, false),
            app("VLC Media Player", "org.videolan.vlc", "entertainment", true, false),
        ],
    );
    catalog.insert(
        "utilities".to_string(),
        vec![
            app("Google Keep", "com.google.android.keep", "utilities", true, true),
            app("Google Calendar", "com.google.android.calendar", "utilities", true, false),
            app("Google Photos", "com.google.android.apps.photos", "utilities", true, false),
            app("File Manager", "com.google.android.apps.nbu.files", "utilities", true, false),
        ],
    );
    catalog
}

pub fn render_listing(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("Available Tablet-Optimized Apps:\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');

    for (category, apps) in catalog {
        out.push('\n');
        out.push_str(&category.to_uppercase());
        out.push_str(":\n");
        for app in apps {
            out.push_str("  • ");
            out.push_str(&app.name);
            if app.tablet_optimized {
                out.push_str(" 📱");
            }
            if app.stylus_support {
                out.push_str(" ✏️");
            }
            out.push('\n');
        }
    }

    out.push_str("\nLegend:\n");
    out.push_str("📱 = Tablet optimized\n");
    out.push_str("✏️ = Stylus support\n");
    out
}
