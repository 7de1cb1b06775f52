use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::utils::error::AppResult;

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Analyze student marks: statistics, grades and pass/fail")]
#[command(version)]
pub struct GradebookCli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[arg(short, long, value_name = "FILE", help = "Where exported results are written")]
    pub export: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "library")]
#[command(about = "Manage a library catalog stored as JSON")]
#[command(version)]
pub struct LibraryCli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[arg(long, value_name = "FILE", help = "Catalog file to load and save")]
    pub catalog: Option<PathBuf>,
}

/// An explicit `--config` must load; the per-user default falls back to built-in settings.
fn load_config(path: Option<&PathBuf>) -> AppResult<Config> {
    let config = match path {
        Some(config_path) => Config::load_custom(config_path)?,
        None => Config::load(),
    };
    config.apply_color();
    Ok(config)
}

impl GradebookCli {
    /// Configuration with command-line overrides applied
    pub fn resolve_config(&self) -> AppResult<Config> {
        let mut config = load_config(self.config.as_ref())?;
        if let Some(export) = &self.export {
            config.gradebook.export_file = export.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

impl LibraryCli {
    /// Configuration with command-line overrides applied
    pub fn resolve_config(&self) -> AppResult<Config> {
        let mut config = load_config(self.config.as_ref())?;
        if let Some(catalog) = &self.catalog {
            config.library.catalog_file = catalog.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Log to stderr. `RUST_LOG` wins over the `--debug` flag.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradebook_args() {
        let cli = GradebookCli::try_parse_from(["gradebook", "--debug", "--export", "out.csv"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_library_args_defaults() {
        let cli = LibraryCli::try_parse_from(["library"]).unwrap();
        assert!(!cli.debug);
        assert!(cli.catalog.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_library_catalog_override() {
        let dir = std::env::temp_dir().join(format!("classdesk-cli-{}", uuid::Uuid::new_v4()));
        let config_path = dir.join("config.toml");
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = LibraryCli::try_parse_from(["library", "-c", config_arg.as_str(), "--catalog", "books.json"])
            .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.library.catalog_file, PathBuf::from("books.json"));
        assert_eq!(config.gradebook.export_file, PathBuf::from("grade_output.csv"));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_explicit_bad_config_is_an_error() {
        let dir = std::env::temp_dir().join(format!("classdesk-cli-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config.toml");
        std::fs::write(&config_path, "[general").unwrap();

        assert!(load_config(Some(&config_path)).is_err());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(LibraryCli::try_parse_from(["library", "--bogus"]).is_err());
    }
}
