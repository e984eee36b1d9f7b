//! Pipeline configuration loaded from TOML.
//!
//! Column names and the drop-list describe the source spreadsheet; the
//! embedded engine section carries the exclusion lists and chained
//! customer. Every field has a default matching the known export format,
//! so an empty config file is a valid one.

use ordertrack_core::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Source header names for the eight required columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub order_number: String,
    pub customer: String,
    pub unit_price: String,
    pub quantity: String,
    pub unit_of_measure: String,
    pub order_date: String,
    pub invoiced_date: String,
    pub expected_delivery: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            order_number: "Nr.pedido".into(),
            customer: "Fantasia".into(),
            unit_price: "Valor Unit.".into(),
            quantity: "Qtd.".into(),
            unit_of_measure: "UN".into(),
            order_date: "Dt.pedido".into(),
            invoiced_date: "Dt.fat.".into(),
            expected_delivery: "Prev.entrega".into(),
        }
    }
}

impl ColumnMap {
    /// The required headers, in record-field order.
    pub fn required(&self) -> [&str; 8] {
        [
            &self.order_number,
            &self.customer,
            &self.unit_price,
            &self.quantity,
            &self.unit_of_measure,
            &self.order_date,
            &self.invoiced_date,
            &self.expected_delivery,
        ]
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Extra columns dropped on load instead of passed through.
    pub dropped_columns: Vec<String>,
    pub columns: ColumnMap,
    pub engine: EngineConfig,
}

impl PipelineConfig {
    /// The source export's administrative columns, hidden by default.
    pub fn default_dropped_columns() -> Vec<String> {
        [
            "Emp",
            "Código",
            "Razão",
            "UF",
            "Tp.Venda",
            "F.Pagto",
            "Vendedor",
            "% Comissão",
            "Operador",
            "% Comissão.1",
            "% ICMS",
            "% IPI",
            "Vl.Desc.",
        ]
        .map(String::from)
        .to_vec()
    }

    /// Defaults for a fresh run with no config file.
    pub fn standard() -> Self {
        Self {
            columns: ColumnMap::default(),
            dropped_columns: Self::default_dropped_columns(),
            engine: EngineConfig::default(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
