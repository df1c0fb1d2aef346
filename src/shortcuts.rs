use anyhow::{bail, Context, Result};
use log::error;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::catalog::{AppEntry, Catalog};

pub fn shortcuts_dir(root: &Path) -> PathBuf {
    root.join("usr")
        .join("share")
        .join("applications")
        .join("tablet-apps")
}

pub fn shortcut_path(dir: &Path, package: &str) -> Result<PathBuf> {
    if package.is_empty() {
        bail!("package identifier is empty");
    }
    Ok(dir.join(format!("{package}.desktop")))
}

pub fn render_shortcut(app: &AppEntry) -> String {
    let mut contents = format!(
        "[Desktop Entry]\n\
         Name={name}\n\
         Comment=Tablet-optimized {name}\n\
         Exec=am start -n {package}/.MainActivity\n\
         Icon={package}\n\
         Type=Application\n\
         Categories=TabletApps;{category};\n\
         StartupNotify=true\n\
         MimeType=application/x-tablet-app;\n",
        name = app.name,
        package = app.package,
        category = title_case(&app.category),
    );

    if app.tablet_optimized {
        contents.push_str("X-Tablet-Optimized=true\n");
    }
    if app.stylus_support {
        contents.push_str("X-Stylus-Support=true\n");
    }
    contents
}

/// Writes one launcher descriptor per catalog entry. A failed write is
/// logged and skipped; only a missing output directory aborts.
pub fn create_shortcuts(root: &Path, catalog: &Catalog) -> Result<()> {
    let dir = shortcuts_dir(root);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    for apps in catalog.values() {
        for app in apps {
            if let Err(err) = write_shortcut(&dir, app) {
                error!("Failed to create shortcut for {}: {err:#}", app.name);
            }
        }
    }
    Ok(())
}

fn write_shortcut(dir: &Path, app: &AppEntry) -> Result<()> {
    let path = shortcut_path(dir, &app.package)?;
    fs::write(&path, render_shortcut(app))
        .with_context(|| format!("write {}", path.display()))?;
    make_executable(&path)?;
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("chmod {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

// Uppercase at every non-alphabetic boundary, e.g. "board-games" -> "Board-Games".
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut boundary = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(ch);
            boundary = true;
        }
    }
    out
}
