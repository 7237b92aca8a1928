//! Command-line configuration and logging setup.

use std::{fs::File, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::grid::Dimensions;

/// Play randomly carved mazes in the terminal.
#[derive(Debug, Parser)]
#[command(about, long_about = None, version)]
pub struct Config {
    /// Number of maze columns, clamped to 5..=100
    #[arg(short, long, default_value_t = 15, allow_negative_numbers = true)]
    pub cols: i64,

    /// Number of maze rows, clamped to 5..=100
    #[arg(short, long, default_value_t = 15, allow_negative_numbers = true)]
    pub rows: i64,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start with the solution overlay shown
    #[arg(long, default_value_t = false)]
    pub solution: bool,

    /// Write log records to this file
    #[arg(short, long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug messages in the log file
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        let dimensions = Dimensions::default();

        Self {
            cols: i64::try_from(dimensions.cols()).unwrap_or(15),
            rows: i64::try_from(dimensions.rows()).unwrap_or(15),
            seed: None,
            solution: false,
            log_file: None,
            debug: false,
        }
    }
}

impl Config {
    /// Returns the requested maze size, clamped into the supported range.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::clamped(self.cols, self.rows)
    }

    /// Installs the file logger when a log file was requested.
    ///
    /// The terminal belongs to the user interface, so without a log file records are discarded.
    /// `RUST_LOG` sets the filter; the debug flag forces the debug level.
    ///
    /// # Errors
    ///
    /// This function returns an error if the log file cannot be created or a logger is already
    /// installed.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

        let mut builder = Builder::from_default_env();
        let _ = builder.target(Target::Pipe(Box::new(file)));
        if self.debug {
            let _ = builder.filter_level(LevelFilter::Debug);
        }
        builder.try_init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::try_parse_from(["mazewalk"]).expect("no arguments should parse");

        assert_eq!(config.cols, 15);
        assert_eq!(config.rows, 15);
        assert_eq!(config.seed, None);
        assert!(!config.solution);
        assert!(!config.debug);
        assert!(config.log_file.is_none());
        assert_eq!(config.dimensions(), Dimensions::default());
    }

    #[test]
    fn test_config_all_options() {
        let config = Config::try_parse_from([
            "mazewalk",
            "--cols",
            "40",
            "-r",
            "12",
            "--seed",
            "7",
            "--solution",
            "--log-file",
            "maze.log",
            "-d",
        ])
        .expect("valid arguments should parse");

        assert_eq!(config.dimensions(), Dimensions::clamped(40, 12));
        assert_eq!(config.seed, Some(7));
        assert!(config.solution);
        assert!(config.debug);
        assert_eq!(config.log_file, Some(PathBuf::from("maze.log")));
    }

    #[test]
    fn test_config_out_of_range_dimensions_are_clamped() {
        let config = Config::try_parse_from(["mazewalk", "-c", "1000", "-r", "-4"])
            .expect("out of range integers still parse");

        let dimensions = config.dimensions();
        assert_eq!(dimensions.cols(), 100);
        assert_eq!(dimensions.rows(), 5);
    }

    #[test]
    fn test_config_rejects_non_numeric_dimensions() {
        assert!(Config::try_parse_from(["mazewalk", "--cols", "wide"]).is_err());
    }

    #[test]
    fn test_init_logging_without_file_is_noop() {
        assert!(Config::default().init_logging().is_ok());
    }
}
