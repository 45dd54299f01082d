use crate::domain::model::AnimalRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Api,
    Local,
}

pub trait ConfigProvider: Send + Sync {
    fn source_kind(&self) -> SourceKind;
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn data_file(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait AnimalSource: Send + Sync {
    async fn fetch_animals(&self, name: &str) -> Result<Vec<AnimalRecord>>;
}
