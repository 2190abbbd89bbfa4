//! Games catalog data model, YAML loading, and CSV export.
//!
//! Game entries live in YAML files under `games/`, one list of entries per
//! file. This crate flattens every entry into a row of strings and writes
//! the whole catalog as a single CSV table with a stable header.

pub mod error;
pub mod export;
pub mod fields;
pub mod flatten;
pub mod project;
pub mod types;
pub mod yaml;

pub use error::{ExportError, ProjectError, YamlError};
pub use export::{ExportPaths, ExportSummary, run_export, write_table};
pub use fields::{CANONICAL_COLUMNS, resolve_columns};
pub use flatten::{join_mapping, join_sequence};
pub use project::{ProjectedRow, project_record};
pub use types::{FieldValue, GameRecord, RecordOrigin, Scalar};
pub use yaml::{LoadReport, SkippedFile, load_games_dir, load_games_file, parse_games};
