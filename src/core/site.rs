use crate::core::api_source::ApiSource;
use crate::core::local_source::LocalFileSource;
use crate::core::renderer;
use crate::core::{fetch, AnimalSource, ConfigProvider, FetchOutcome, SourceKind, Storage};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::validate_non_empty_string;
use std::io::ErrorKind;

/// Picks the record source named by the configuration.
pub fn source_from_config<C: ConfigProvider>(config: &C) -> Box<dyn AnimalSource> {
    match config.source_kind() {
        SourceKind::Api => Box::new(ApiSource::from_config(config)),
        SourceKind::Local => Box::new(LocalFileSource::from_config(config)),
    }
}

/// The api source needs a name; the local source treats an empty one as "everything".
pub fn validate_query(kind: SourceKind, name: &str) -> Result<()> {
    match kind {
        SourceKind::Api => validate_non_empty_string("name", name),
        SourceKind::Local => Ok(()),
    }
}

pub struct SiteGenerator<S: Storage> {
    source: Box<dyn AnimalSource>,
    storage: S,
    template_path: String,
    output_path: String,
}

impl<S: Storage> SiteGenerator<S> {
    pub fn new(
        source: Box<dyn AnimalSource>,
        storage: S,
        template_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            source,
            storage,
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, storage: S) -> Self {
        Self::new(
            source_from_config(config),
            storage,
            config.template_path(),
            config.output_path(),
        )
    }

    /// Builds the page for `name` and writes it, returning the output path.
    ///
    /// Lookup failures are rendered into the page; template and write
    /// failures are returned.
    pub async fn generate(&self, name: &str) -> Result<String> {
        tracing::info!("🔎 Looking up {:?}", name);

        // 取得資料
        let outcome = fetch(&*self.source, name).await;
        match &outcome {
            FetchOutcome::Records(records) => {
                tracing::info!("Fetched {} record(s)", records.len())
            }
            FetchOutcome::Error(message) => tracing::warn!("Lookup failed: {}", message),
        }

        // 產生 HTML
        let fragment = renderer::render_outcome(&outcome, name);
        let template = self.load_template().await?;
        let page = renderer::substitute(&template, &fragment).ok_or_else(|| {
            SiteError::PlaceholderMissing {
                path: self.template_path.clone(),
                placeholder: renderer::PLACEHOLDER.to_string(),
            }
        })?;

        // 寫入輸出檔
        tracing::debug!("Writing {} bytes to {}", page.len(), self.output_path);
        self.storage
            .write_file(&self.output_path, page.as_bytes())
            .await?;

        Ok(self.output_path.clone())
    }

    async fn load_template(&self) -> Result<String> {
        let bytes = match self.storage.read_file(&self.template_path).await {
            Ok(bytes) => bytes,
            Err(SiteError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(SiteError::TemplateMissing {
                    path: self.template_path.clone(),
                });
            }
            Err(e) => return Err(e),
        };

        String::from_utf8(bytes)
            .map_err(|e| SiteError::IoError(std::io::Error::new(ErrorKind::InvalidData, e)))
    }
}
