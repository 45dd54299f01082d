pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage};

pub use config::SiteConfig;
pub use crate::core::{
    api_source::ApiSource, local_source::LocalFileSource, site::SiteGenerator, AnimalRecord,
    FetchOutcome,
};
pub use utils::error::{Result, SiteError};
