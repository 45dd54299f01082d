use crate::core::{ConfigProvider, SourceKind};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
pub const DEFAULT_DATA_FILE: &str = "animals_data.json";
pub const DEFAULT_TEMPLATE_FILE: &str = "animals_template.html";
pub const DEFAULT_OUTPUT_FILE: &str = "animals.html";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub r#type: SourceKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output")]
    pub path: String,
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_FILE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn is_unresolved(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            r#type: SourceKind::default(),
            endpoint: default_endpoint(),
            api_key: None,
            data_file: default_data_file(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            path: default_output(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let mut config: SiteConfig =
            toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        // 未設定的環境變數：金鑰視為沒有，endpoint 退回預設值
        if config
            .source
            .api_key
            .as_deref()
            .is_some_and(|key| key.is_empty() || is_unresolved(key))
        {
            config.source.api_key = None;
        }
        if is_unresolved(&config.source.endpoint) {
            config.source.endpoint = default_endpoint();
        }

        Ok(config)
    }

    /// 替換環境變數 (例如 ${API_KEY})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for SiteConfig {
    fn source_kind(&self) -> SourceKind {
        self.source.r#type
    }

    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn data_file(&self) -> &str {
        &self.source.data_file
    }

    fn template_path(&self) -> &str {
        &self.output.template
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        match self.source.r#type {
            SourceKind::Api => validate_url("source.endpoint", &self.source.endpoint)?,
            SourceKind::Local => validate_path("source.data_file", &self.source.data_file)?,
        }

        validate_path("output.template", &self.output.template)?;
        validate_path("output.path", &self.output.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
type = "local"
endpoint = "https://api.example.com/summary/"
data_file = "data/animals.json"

[output]
template = "site/template.html"
path = "site/index.html"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_kind(), SourceKind::Local);
        assert_eq!(config.api_endpoint(), "https://api.example.com/summary/");
        assert_eq!(config.data_file(), "data/animals.json");
        assert_eq!(config.template_path(), "site/template.html");
        assert_eq!(config.output_path(), "site/index.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.source_kind(), SourceKind::Api);
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.template_path(), DEFAULT_TEMPLATE_FILE);
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_FILE);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ANIMAL_SITE_TEST_ENDPOINT", "https://test.api.com/summary/");

        let toml_content = r#"
[source]
endpoint = "${ANIMAL_SITE_TEST_ENDPOINT}"
api_key = "${ANIMAL_SITE_TEST_UNSET_KEY}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://test.api.com/summary/");
        assert_eq!(config.api_key(), None);

        std::env::remove_var("ANIMAL_SITE_TEST_ENDPOINT");

        let config =
            SiteConfig::from_toml_str("[source]\nendpoint = \"${ANIMAL_SITE_TEST_UNSET_URL}\"\n")
                .unwrap();
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_invalid_source_type_is_rejected() {
        let result = SiteConfig::from_toml_str("[source]\ntype = \"ftp\"\n");
        assert!(matches!(result, Err(SiteError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let config = SiteConfig::from_toml_str("[source]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(config.validate().is_err());

        // local 模式不檢查 endpoint
        let config =
            SiteConfig::from_toml_str("[source]\ntype = \"local\"\nendpoint = \"invalid-url\"\n")
                .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"out/animals.html\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "out/animals.html");
    }
}
