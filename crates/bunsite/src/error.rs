//! CLI error types.

use bunsite_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("check failed with {errors} error(s) and {warnings} warning(s)")]
    Check { errors: usize, warnings: usize },

    #[error("{0}")]
    Validation(String),
}
