use config::{Config, Environment, File};
pub use config::Map;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides, e.g. `VCLASS__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "VCLASS";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait ConfigErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads configuration by layering an optional file with environment overrides.
///
/// 1. **Base File**: when `path` is given, the file must exist; its format is
///    inferred from the extension (`vclass.toml`, `vclass.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `VCLASS__`. Nested keys use
///    double underscores (`VCLASS__LOGGING__JSON=true` maps to `logging.json`).
///
/// Without a file and without overrides every field takes its serde default.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the given file cannot be read, or if the merged
/// sources do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use vclass_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     level: Option<String>,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the process
/// environment when it is given. Keys keep their `VCLASS__` form.
///
/// # Example
/// ```rust
/// use std::path::Path;
/// use vclass_kernel::config::{Map, load_config_with_env};
/// use vclass_kernel::domain::config::AppConfig;
///
/// let env = Map::from([("VCLASS__LOGGING__LEVEL".to_owned(), "debug".to_owned())]);
/// let cfg: AppConfig = load_config_with_env(None::<&Path>, Some(env)).unwrap();
/// assert_eq!(cfg.logging.level, "debug");
/// ```
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
