use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub kingdom: Option<String>,
    #[serde(default)]
    pub phylum: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One normalized animal, as produced by a single fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
    #[serde(default)]
    pub taxonomy: Taxonomy,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub characteristics: Characteristics,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

// null 與缺少欄位一樣處理
fn name_or_unknown<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_name))
}

impl AnimalRecord {
    pub fn first_location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }
}

/// Result of resolving a name: either records or a printable error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Records(Vec<AnimalRecord>),
    Error(String),
}

impl FetchOutcome {
    pub fn records(&self) -> Option<&[AnimalRecord]> {
        match self {
            FetchOutcome::Records(records) => Some(records.as_slice()),
            FetchOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Records(_) => None,
            FetchOutcome::Error(message) => Some(message.as_str()),
        }
    }
}

impl From<Result<Vec<AnimalRecord>>> for FetchOutcome {
    fn from(result: Result<Vec<AnimalRecord>>) -> Self {
        match result {
            Ok(records) => FetchOutcome::Records(records),
            Err(e) => FetchOutcome::Error(e.to_string()),
        }
    }
}
