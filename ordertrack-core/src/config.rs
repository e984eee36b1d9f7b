//! Engine configuration — exclusion lists and the chained-customer rule.
//!
//! These are configuration data, not logic: the defaults carry the known
//! values, and a TOML file can override any of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data-cleaning and status-rule configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rows with any of these units of measure are dropped during
    /// normalization.
    pub excluded_units: Vec<String>,
    /// Rows whose customer name is in this list are dropped during
    /// normalization.
    pub excluded_customers: Vec<String>,
    /// Customer whose order numbers encode partial-shipment chains.
    pub chained_customer: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            excluded_units: vec!["KG".to_string()],
            excluded_customers: [
                "PRIME",
                "AMD 5",
                "AMD 10",
                "FREXCO",
                "SESC INTERLAGOS",
                "RODRIGO MELO",
                "FOXMIX",
                "CCINTER ANTÔNIO",
                "L A REFRIGERACAO",
                "NACAO NATURAL",
            ]
            .map(String::from)
            .to_vec(),
            chained_customer: "COLINA".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn is_excluded_unit(&self, unit: &str) -> bool {
        self.excluded_units.iter().any(|u| u == unit)
    }

    pub fn is_excluded_customer(&self, customer: &str) -> bool {
        self.excluded_customers.iter().any(|c| c == customer)
    }
}
