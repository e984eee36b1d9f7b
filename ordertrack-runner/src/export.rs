//! Snapshot export — CSV dataset and JSON run manifest.
//!
//! Artifacts are full-overwrite snapshots at fixed filenames: no append,
//! no versioning. The manifest carries a `schema_version`; unknown
//! (newer) versions are rejected on load.

use std::path::{Path, PathBuf};

use ordertrack_core::domain::OrderLine;
use thiserror::Error;

use crate::runner::{PipelineRun, RunResult, SCHEMA_VERSION};

/// Fixed snapshot filename inside the output directory.
pub const SNAPSHOT_FILENAME: &str = "orders.csv";
/// Fixed manifest filename inside the output directory.
pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema version {found} (max supported: {max})")]
    UnsupportedSchema { found: u32, max: u32 },
    #[error("CSV output is not valid UTF-8")]
    Utf8,
}

// ─── CSV snapshot ───────────────────────────────────────────────────

/// Serialize the processed dataset as CSV.
///
/// Columns: the eight normalized fields, the derived status, then every
/// retained pass-through column.
pub fn export_snapshot_csv(
    lines: &[OrderLine],
    extra_headers: &[String],
) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec![
        "order_number",
        "customer",
        "unit_price",
        "quantity",
        "total_value",
        "order_date",
        "invoiced_date",
        "expected_delivery",
        "status",
    ]
    .into_iter()
    .map(String::from)
    .collect::<Vec<_>>();
    header.extend(extra_headers.iter().cloned());
    wtr.write_record(&header)?;

    for line in lines {
        let mut row = vec![
            line.order_number.clone(),
            line.customer.clone(),
            format!("{:.2}", line.unit_price),
            format!("{}", line.quantity),
            format!("{:.2}", line.total_value),
            line.order_date.to_string(),
            line.invoiced_date.map(|d| d.to_string()).unwrap_or_default(),
            line.expected_delivery
                .map(|d| d.to_string())
                .unwrap_or_default(),
            line.status.to_string(),
        ];
        row.extend(line.extra.iter().cloned());
        wtr.write_record(&row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(data).map_err(|_| ExportError::Utf8)
}

/// Write the snapshot to `path`, replacing any previous file.
pub fn write_snapshot(
    path: &Path,
    lines: &[OrderLine],
    extra_headers: &[String],
) -> Result<(), ExportError> {
    let csv = export_snapshot_csv(lines, extra_headers)?;
    std::fs::write(path, csv).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ─── JSON manifest ──────────────────────────────────────────────────

/// Serialize a `RunResult` to pretty JSON.
pub fn export_manifest_json(result: &RunResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Deserialize a `RunResult`, rejecting unknown schema versions.
pub fn import_manifest_json(json: &str) -> Result<RunResult, ExportError> {
    let result: RunResult = serde_json::from_str(json)?;
    if result.schema_version > SCHEMA_VERSION {
        return Err(ExportError::UnsupportedSchema {
            found: result.schema_version,
            max: SCHEMA_VERSION,
        });
    }
    Ok(result)
}

/// Load a `RunResult` from an artifact directory's manifest.
pub fn load_manifest(dir: &Path) -> Result<RunResult, ExportError> {
    let path = dir.join(MANIFEST_FILENAME);
    let json = std::fs::read_to_string(&path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    import_manifest_json(&json)
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the artifact set for a run: `orders.csv` and `manifest.json`
/// under `output_dir`, overwriting previous snapshots.
///
/// Returns the output directory path.
pub fn save_artifacts(run: &PipelineRun, output_dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::Io {
        path: output_dir.display().to_string(),
        source,
    })?;

    write_snapshot(
        &output_dir.join(SNAPSHOT_FILENAME),
        &run.lines,
        &run.extra_headers,
    )?;

    let manifest = export_manifest_json(&run.result)?;
    let manifest_path = output_dir.join(MANIFEST_FILENAME);
    std::fs::write(&manifest_path, manifest).map_err(|source| ExportError::Io {
        path: manifest_path.display().to_string(),
        source,
    })?;

    Ok(output_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ordertrack_core::aggregate::AggregateSummary;
    use ordertrack_core::domain::OrderStatus;

    fn sample_line() -> OrderLine {
        OrderLine {
            order_number: "100-02".into(),
            customer: "COLINA".into(),
            unit_price: 12.5,
            quantity: 4.0,
            total_value: 50.0,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            invoiced_date: None,
            expected_delivery: Some(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()),
            status: OrderStatus::Pending,
            extra: vec!["TransLog".into()],
        }
    }

    fn sample_result() -> RunResult {
        RunResult {
            schema_version: SCHEMA_VERSION,
            reference: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            source: "orders.csv".into(),
            summary: AggregateSummary::default(),
            dataset_hash: "abc123".into(),
            data_quality_warnings: vec![],
        }
    }

    #[test]
    fn snapshot_has_status_and_extras() {
        let csv =
            export_snapshot_csv(&[sample_line()], &["Transportadora".to_string()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("status,Transportadora"));
        assert!(lines[1].contains("100-02"));
        assert!(lines[1].contains("Pending"));
        assert!(lines[1].contains("TransLog"));
        assert!(lines[1].contains("50.00"));
    }

    #[test]
    fn snapshot_empty_dates_are_blank() {
        let csv = export_snapshot_csv(&[sample_line()], &[]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        // invoiced_date between order_date and expected_delivery is empty.
        assert!(row.contains("2024-03-01,,2024-03-20"));
    }

    #[test]
    fn manifest_roundtrip() {
        let result = sample_result();
        let json = export_manifest_json(&result).unwrap();
        let back = import_manifest_json(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn manifest_rejects_newer_schema() {
        let mut result = sample_result();
        result.schema_version = 99;
        let json = export_manifest_json(&result).unwrap();
        let err = import_manifest_json(&json).unwrap_err();
        assert!(err
            .to_string()
            .contains("unsupported schema version 99"));
    }
}
