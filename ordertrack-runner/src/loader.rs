//! CSV loading — reads the raw order table into records, keeping
//! pass-through columns.
//!
//! A missing or unreadable source file is an explicit failure, never an
//! empty table masquerading as success. Extra columns pass through
//! untouched except those on the configured drop-list.

use crate::config::PipelineConfig;
use ordertrack_core::domain::RawOrderRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors from the loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
}

/// The raw table: records plus the retained extra headers, in source
/// column order.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub records: Vec<RawOrderRecord>,
    pub extra_headers: Vec<String>,
}

/// Load the order table from a CSV file.
pub fn load_csv(path: &Path, config: &PipelineConfig) -> Result<RawTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_csv_from_reader(file, config)
}

/// Load the order table from any reader. Used directly by tests.
pub fn load_csv_from_reader<R: Read>(
    reader: R,
    config: &PipelineConfig,
) -> Result<RawTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let header_at = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };

    let required = config.columns.required();
    let mut required_idx = [0usize; 8];
    for (slot, name) in required_idx.iter_mut().zip(required) {
        *slot = header_at(name)?;
    }

    // Everything that is neither required nor dropped passes through.
    let extra_idx: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| {
            !required_idx.contains(i) && !config.dropped_columns.iter().any(|d| d == h)
        })
        .map(|(i, _)| i)
        .collect();
    let extra_headers: Vec<String> = extra_idx
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or_default().to_string();
        records.push(RawOrderRecord {
            order_number: field(required_idx[0]),
            customer: field(required_idx[1]),
            unit_price: field(required_idx[2]),
            quantity: field(required_idx[3]),
            unit_of_measure: field(required_idx[4]),
            order_date: field(required_idx[5]),
            invoiced_date: field(required_idx[6]),
            expected_delivery: field(required_idx[7]),
            extra: extra_idx.iter().map(|&i| field(i)).collect(),
        });
    }

    Ok(RawTable {
        records,
        extra_headers,
    })
}
