//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the workspace logs
//! through the `log` facade; only this module knows about `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, LoggingHandle};
