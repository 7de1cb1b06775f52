use anyhow::{Context, Result};
use clap::Parser;

use classdesk::cli::{init_tracing, LibraryCli};
use classdesk::manager::{open_inventory, run_library};
use classdesk::utils::error::{report_error, AppError};

fn main() -> Result<()> {
    let cli = LibraryCli::parse();
    init_tracing(cli.debug);

    let config = cli.resolve_config().context("Failed to load configuration")?;
    let mut inventory = open_inventory(&config).with_context(|| {
        format!("Failed to open catalog {}", config.library.catalog_file.display())
    })?;

    match run_library(&mut inventory, &mut std::io::stdin().lock()) {
        Ok(()) => Ok(()),
        Err(AppError::Input) => {
            report_error(&AppError::Input);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
