use log::{error, info};
use std::path::Path;
use thiserror::Error;

use crate::catalog::{AppEntry, Catalog};
use crate::tablet::{self, TabletConfig};

/// Why a single app failed to install. Config-write failures are expected
/// per-item outcomes; anything else is surfaced separately so a batch
/// report can tell them apart.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to write tablet config for {package}: {reason:#}")]
    ConfigWrite { package: String, reason: anyhow::Error },
    #[error("unexpected failure installing {package}: {reason:#}")]
    Unexpected { package: String, reason: anyhow::Error },
}

/// In-memory record marking an app installed. Never persisted; there is no
/// real package retrieval behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
    pub package: String,
    pub name: String,
    pub installed: bool,
    pub tablet_configured: bool,
    pub stylus_configured: bool,
}

pub fn install_app(root: &Path, app: &AppEntry) -> Result<InstallRecord, InstallError> {
    info!("Installing {} ({})", app.name, app.package);

    let config_path = tablet::config_path(root, &app.package).map_err(|reason| {
        InstallError::Unexpected {
            package: app.package.clone(),
            reason,
        }
    })?;
    tablet::write_config(&config_path, &TabletConfig::for_app(app)).map_err(|reason| {
        InstallError::ConfigWrite {
            package: app.package.clone(),
            reason,
        }
    })?;
    info!("Configured {} for tablet use", app.name);

    Ok(InstallRecord {
        package: app.package.clone(),
        name: app.name.clone(),
        installed: true,
        tablet_configured: app.tablet_optimized,
        stylus_configured: app.stylus_support,
    })
}

pub fn install_category(root: &Path, catalog: &Catalog, category: &str) -> bool {
    let Some(apps) = catalog.get(category) else {
        error!("Unknown category: {category}");
        return false;
    };

    info!("Installing {} apps in category: {category}", apps.len());
    let succeeded = install_batch(root, apps);
    info!(
        "Successfully installed {succeeded}/{} apps in {category}",
        apps.len()
    );
    succeeded == apps.len()
}

pub fn install_all(root: &Path, catalog: &Catalog) -> bool {
    let mut total = 0;
    let mut succeeded = 0;

    for (category, apps) in catalog {
        info!("Installing {category} apps...");
        total += apps.len();
        succeeded += install_batch(root, apps);
    }

    info!("Installation complete: {succeeded}/{total} apps installed");
    succeeded == total
}

fn install_batch(root: &Path, apps: &[AppEntry]) -> usize {
    apps.iter()
        .filter(|app| match install_app(root, app) {
            Ok(record) => {
                info!("Successfully installed {}", record.name);
                true
            }
            Err(err) => {
                error!("Failed to install {}: {err}", app.name);
                false
            }
        })
        .count()
}
