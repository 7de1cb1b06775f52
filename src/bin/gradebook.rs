use anyhow::{Context, Result};
use clap::Parser;

use classdesk::cli::{init_tracing, GradebookCli};
use classdesk::manager::run_gradebook;
use classdesk::utils::error::{report_error, AppError};

fn main() -> Result<()> {
    let cli = GradebookCli::parse();
    init_tracing(cli.debug);

    let config = cli.resolve_config().context("Failed to load configuration")?;

    match run_gradebook(&config, &mut std::io::stdin().lock()) {
        Ok(()) => Ok(()),
        Err(AppError::Input) => {
            report_error(&AppError::Input);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
