use thiserror::Error;

/// Errors raised while reading environment configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}
