//! # CLI Argument Definitions

use clap::Parser;
use std::path::PathBuf;
use vclass_kernel::domain::config::LoggingConfig;

/// Command-line flags. Anything given here overrides the config file and
/// `VCLASS__*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "vclass")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage classrooms, students and assignments from a numbered menu")]
pub struct Cli {
    /// Optional configuration file (TOML, JSON or YAML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum diagnostics level written to stderr (error, warn, info, debug, trace, off)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Also write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write log files as JSON lines (only with a log directory)
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Applies the flags that were given on top of the loaded logging settings.
    pub fn apply(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level.clone_from(level);
        }
        if let Some(dir) = &self.log_dir {
            logging.directory = Some(dir.clone());
        }
        if self.json_logs {
            logging.json = true;
        }
    }
}
