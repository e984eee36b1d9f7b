//! Ordertrack Runner — pipeline orchestration and artifacts.
//!
//! This crate builds on `ordertrack-core` to provide:
//! - TOML pipeline configuration (column map, drop-list, engine rules)
//! - CSV loading with pass-through columns
//! - The end-to-end run entry point with dataset fingerprinting
//! - Full-overwrite snapshot and manifest export
//! - Markdown run reports
//! - Deterministic sample-data generation

pub mod config;
pub mod export;
pub mod loader;
pub mod report;
pub mod runner;
pub mod sample;

pub use config::{ColumnMap, ConfigError, PipelineConfig};
pub use export::{
    export_manifest_json, export_snapshot_csv, import_manifest_json, load_manifest,
    save_artifacts, write_snapshot, ExportError, MANIFEST_FILENAME, SNAPSHOT_FILENAME,
};
pub use loader::{load_csv, load_csv_from_reader, LoadError, RawTable};
pub use report::generate_report;
pub use runner::{dataset_hash, run_pipeline, PipelineRun, RunError, RunResult, SCHEMA_VERSION};
pub use sample::{sample_csv, write_sample_csv};
