//! Shared vocabulary for the feedloader workspace: the batch operation and
//! sales-channel enums, plus the uploader configuration and its loader.

pub mod app_config;
pub mod catalog;
pub mod config;

pub use app_config::UploaderConfig;
pub use catalog::{Channel, Method};
pub use config::{load_uploader_config, load_uploader_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
