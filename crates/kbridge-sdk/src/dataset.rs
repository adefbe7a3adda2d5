//! Product datasets
//!
//! A dataset is a list of products, each with its paired Korea/Japan
//! series, category labels and optional SNS snapshot. Datasets are read
//! from YAML or JSON, chosen by file extension.

use crate::document::{self, DocumentFormat};
use crate::error::{Result, SdkError};
use kbridge_core::{CategoryLabel, MarketSeries};
use kbridge_runtime::SnsSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Paired market data for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPair {
    /// Product name
    pub product: String,

    /// Category in the Korean market
    pub category: CategoryLabel,

    /// Category in the Japanese market (defaults to `category`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub japan_category: Option<CategoryLabel>,

    /// Leading market series
    pub korea: MarketSeries,

    /// Following market series
    pub japan: MarketSeries,

    /// Optional SNS statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sns: Option<SnsSnapshot>,
}

impl MarketPair {
    /// Create a pair with the same category in both markets
    pub fn new(
        product: impl Into<String>,
        category: impl Into<CategoryLabel>,
        korea: MarketSeries,
        japan: MarketSeries,
    ) -> Self {
        Self {
            product: product.into(),
            category: category.into(),
            japan_category: None,
            korea,
            japan,
            sns: None,
        }
    }

    /// Set a distinct Japanese category
    pub fn with_japan_category(mut self, category: impl Into<CategoryLabel>) -> Self {
        self.japan_category = Some(category.into());
        self
    }

    /// Attach SNS statistics
    pub fn with_sns(mut self, sns: SnsSnapshot) -> Self {
        self.sns = Some(sns);
        self
    }

    /// Category used for the Japanese side
    pub fn japan_category(&self) -> &str {
        self.japan_category.as_deref().unwrap_or(&self.category)
    }
}

/// Collection of products to analyze
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub products: Vec<MarketPair>,
}

impl Dataset {
    /// Create a dataset from products
    pub fn new(products: Vec<MarketPair>) -> Self {
        Self { products }
    }

    /// Parse a YAML dataset
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let dataset: Self = document::parse_str(content, DocumentFormat::Yaml)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a JSON dataset
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset: Self = document::parse_str(content, DocumentFormat::Json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset file (.yaml, .yml or .json)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let dataset: Self = document::load(path.as_ref(), "dataset")?;
        dataset.validate()?;
        tracing::info!(
            path = %path.as_ref().display(),
            products = dataset.products.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Check product names are non-empty and unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for pair in &self.products {
            if pair.product.trim().is_empty() {
                return Err(SdkError::DatasetError(
                    "product name must not be empty".to_string(),
                ));
            }
            if !seen.insert(pair.product.as_str()) {
                return Err(SdkError::DatasetError(format!(
                    "duplicate product: {}",
                    pair.product
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
