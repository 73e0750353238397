pub mod app_config;
pub mod config;
pub mod place;

pub use app_config::{AppConfig, DEFAULT_API_KEY_ENV};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use place::{
    EnrichedPlace, ENRICHMENT_COLUMNS, LOCATION_COLUMN, MAPS_LINK_COLUMN, NAME_COLUMN,
    VISITED_COLUMN,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
