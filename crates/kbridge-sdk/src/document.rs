//! YAML / JSON document loading shared by configs and datasets

use crate::error::{Result, SdkError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Document format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

pub(crate) fn parse_str<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    Ok(match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    })
}

pub(crate) fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let message = format!(
            "unsupported {} file extension: {} (expected .yaml, .yml or .json)",
            what,
            path.display()
        );
        if what == "config" {
            SdkError::ConfigError(message)
        } else {
            SdkError::DatasetError(message)
        }
    })?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), what, "loading document");
    parse_str(&content, format)
}
