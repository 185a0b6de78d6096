//! Infrastructure layer: configuration and logging.

pub mod config;
pub mod logger;

pub use config::{load_config, Config, ConfigError};
pub use logger::init_logging;
