use thiserror::Error;

/// Errors raised while loading application configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
