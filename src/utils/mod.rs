pub mod env_file;
pub mod error;
pub mod logger;
pub mod validation;
