//! Shared domain types and configuration for eventscout.
//!
//! Holds the pieces every other crate depends on: the normalized [`Item`]
//! record, the [`geohash`] encoder used to build location queries, and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod geohash;
pub mod item;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_log_level};
pub use geohash::{GeohashBounds, GeohashError};
pub use item::{Item, ItemFields};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
