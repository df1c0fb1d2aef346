mod catalog;
mod cli;
mod installer;
mod logging;
mod paths;
mod shortcuts;
mod tablet;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let root = paths::root_dir();
    let catalog = catalog::load(&root)?;

    match cli.command {
        Command::List => {
            print!("{}", catalog::render_listing(&catalog));
        }
        Command::InstallAll => {
            installer::install_all(&root, &catalog);
            shortcuts::create_shortcuts(&root, &catalog)?;
        }
        Command::Install { category } => {
            installer::install_category(&root, &catalog, &category);
            shortcuts::create_shortcuts(&root, &catalog)?;
        }
        Command::Shortcuts => {
            shortcuts::create_shortcuts(&root, &catalog)?;
        }
    }

    Ok(())
}
