use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tablet-apps-installer",
    version,
    about = "Installs and configures tablet-optimized applications",
    after_help = "Categories: productivity, creative, entertainment, utilities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available apps
    List,
    /// Install all apps and regenerate shortcuts
    InstallAll,
    /// Install apps in a specific category and regenerate shortcuts
    Install { category: String },
    /// Create app shortcuts
    Shortcuts,
}
