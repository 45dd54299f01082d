use crate::core::{AnimalRecord, AnimalSource, ConfigProvider};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads animals from a JSON array on disk. The file is re-read on every lookup.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.data_file())
    }

    pub async fn load_all(&self) -> Result<Vec<AnimalRecord>> {
        tracing::debug!("Reading animal data from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<AnimalRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }
}

#[async_trait::async_trait]
impl AnimalSource for LocalFileSource {
    async fn fetch_animals(&self, name: &str) -> Result<Vec<AnimalRecord>> {
        let records = self.load_all().await?;
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Ok(records);
        }

        let matches: Vec<AnimalRecord> = records
            .into_iter()
            .filter(|record| record.name.to_lowercase().contains(&query))
            .collect();

        tracing::debug!("{} local record(s) match {:?}", matches.len(), name);
        Ok(matches)
    }
}
