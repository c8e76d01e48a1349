//! Console front end for the classroom registry.
//!
//! The [`Console`] loop is generic over its streams; the `vclass` binary wires
//! it to stdin/stdout after loading configuration and logging.

pub mod args;
pub mod console;
mod error;

pub use console::{Console, Exit, MenuOption};
pub use error::{ConsoleError, ConsoleErrorExt};

use vclass_kernel::domain::config::LoggingConfig;
use vclass_logger::{Logger, LoggerError, LoggerErrorExt, parse_level};

/// Name used for the logger and as the log file prefix.
pub const APP_NAME: &str = "vclass";

/// Initializes the global tracing subscriber from logging settings.
///
/// With the console layer off and no log directory there is nowhere to write,
/// so no subscriber is installed and `None` is returned.
///
/// # Errors
/// Returns [`LoggerError`] for an unknown level, an unusable log directory, or
/// when a subscriber is already installed.
pub fn init_logging(logging: &LoggingConfig) -> Result<Option<Logger>, LoggerError> {
    let level = parse_level(&logging.level).context("logging.level")?;
    if !logging.console && logging.directory.is_none() {
        return Ok(None);
    }

    let builder = Logger::builder().name(APP_NAME).console(logging.console).level(level);
    let logger = match &logging.directory {
        Some(dir) => builder.path(dir).json(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(Some(logger))
}
