//! Column generation settings.
//!
//! Columns are described the way load-test profiles describe them, with
//! distributions written in the profile grammar:
//!
//! ```yaml
//! - name: id
//!   population: uniform(1..1000000)
//!   unique: true
//! - name: payload
//!   population: uniform(1..100)
//!   size: fixed(64)
//!   shape: text
//! ```

use crate::shape::OutputShape;
use loadtest_distribution::{Distribution, DistributionError, Fixed};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Error type for column configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Invalid distribution string
    #[error("Invalid distribution: {0}")]
    DistributionError(#[from] DistributionError),

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

fn default_size() -> Distribution {
    Distribution::Fixed(Fixed::new(0))
}

/// Generation settings for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, also the namespace for seed uniqueness
    pub name: String,

    /// Distribution of raw seeds
    pub population: Distribution,

    /// Length of textual values
    #[serde(default = "default_size")]
    pub size: Distribution,

    /// Output shape
    #[serde(default)]
    pub shape: OutputShape,

    /// Whether seeds must not repeat within this column
    #[serde(default)]
    pub unique: bool,
}

impl ColumnSpec {
    /// Create an integer column from a population distribution string.
    pub fn new(name: impl Into<String>, population: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.into(),
            population: population.parse()?,
            size: default_size(),
            shape: OutputShape::Integer,
            unique: false,
        })
    }

    /// Switch to text output with the given size distribution string.
    pub fn text(mut self, size: &str) -> Result<Self, ConfigError> {
        self.size = size.parse()?;
        self.shape = OutputShape::Text;
        Ok(self)
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Parse a YAML list of columns.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<ColumnSpec>, ConfigError> {
        let columns: Vec<ColumnSpec> = serde_yaml::from_str(yaml)?;
        let mut names = HashSet::new();
        for column in &columns {
            if !names.insert(column.name.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(columns)
    }
}
