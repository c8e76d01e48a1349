//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; it re-exports the domain models and provides the
//! layered configuration loader.
//!
//! ## Config loading
//! ```rust
//! use vclass_kernel::config::load_config;
//! use vclass_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.logging.console);
//! ```
pub mod config;

pub use vclass_domain as domain;
