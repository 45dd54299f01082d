use crate::config::toml_config::SiteConfig;
use crate::core::{SourceKind, Storage};
use crate::utils::error::Result;
use clap::Parser;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "animal-site")]
#[command(about = "Generate an animal web page from a template")]
pub struct CliConfig {
    /// Animal to look up; prompts on stdin when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// Where animal records come from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    #[arg(long, env = "WIKIPEDIA_API_URL")]
    pub api_url: Option<String>,

    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// JSON array of animals used by the local source
    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(long)]
    pub template: Option<String>,

    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併設定：命令列 > TOML 檔案 > 預設值
    pub fn to_site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(source) = self.source {
            config.source.r#type = source;
        }
        if let Some(url) = &self.api_url {
            config.source.endpoint = url.clone();
        }
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            config.source.api_key = Some(key.clone());
        }
        if let Some(file) = &self.data_file {
            config.source.data_file = file.clone();
        }
        if let Some(template) = &self.template {
            config.output.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
