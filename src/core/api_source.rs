use crate::core::{AnimalRecord, AnimalSource, ConfigProvider};
use crate::domain::model::{Characteristics, Taxonomy};
use crate::utils::error::{Result, SiteError};
use reqwest::{Client, StatusCode};
use serde_json::Value;

const STANDARD_PAGE_TYPE: &str = "standard";
const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available";
const DEFAULT_LOCATION: &str = "Various";

/// Looks animals up on a page-summary endpoint (`<endpoint><name>`).
pub struct ApiSource {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl ApiSource {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint(), config.api_key().map(str::to_string))
    }

    fn request_url(&self, name: &str) -> String {
        format!("{}{}", self.endpoint, name)
    }
}

#[async_trait::async_trait]
impl AnimalSource for ApiSource {
    async fn fetch_animals(&self, name: &str) -> Result<Vec<AnimalRecord>> {
        let url = self.request_url(name);
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SiteError::NotFound {
                name: name.to_string(),
            });
        }

        let response = response.error_for_status()?;
        let body: Value = response.json().await?;

        let record = normalize_summary(name, &body)?;
        Ok(vec![record])
    }
}

/// Turns a page summary into an animal record.
///
/// `type` other than `"standard"` (or null/absent) marks a disambiguation or
/// non-animal page and is rejected.
pub fn normalize_summary(name: &str, body: &Value) -> Result<AnimalRecord> {
    match body.get("type") {
        None | Some(Value::Null) => {}
        Some(Value::String(kind)) if kind == STANDARD_PAGE_TYPE => {}
        Some(other) => {
            tracing::debug!("Rejecting page type {} for {}", other, name);
            return Err(SiteError::NotAnAnimal {
                name: name.to_string(),
            });
        }
    }

    Ok(AnimalRecord {
        name: text_field(body, "title").unwrap_or_else(|| name.to_string()),
        taxonomy: Taxonomy {
            kingdom: Some("Animalia".to_string()),
            phylum: Some("Chordata".to_string()),
            class: Some("Mammalia".to_string()),
        },
        locations: locations_field(body),
        characteristics: Characteristics {
            diet: Some(text_field(body, "diet").unwrap_or_else(|| UNKNOWN.to_string())),
            kind: Some(text_field(body, "type").unwrap_or_else(|| UNKNOWN.to_string())),
            description: Some(
                text_field(body, "extract").unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            ),
        },
    })
}

fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn locations_field(body: &Value) -> Vec<String> {
    match body.get("locations") {
        None | Some(Value::Null) => vec![DEFAULT_LOCATION.to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        Some(other) => vec![other.to_string()],
    }
}
