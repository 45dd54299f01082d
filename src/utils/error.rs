use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{name} not found")]
    NotFound { name: String },

    #[error("{name} is not a specific animal")]
    NotAnAnimal { name: String },

    #[error("API error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not find template file {path}")]
    TemplateMissing { path: String },

    #[error("Template {path} has no {placeholder} placeholder")]
    PlaceholderMissing { path: String, placeholder: String },

    #[error("Env file error: {0}")]
    EnvFileError(#[from] dotenvy::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
