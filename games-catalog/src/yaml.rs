//! YAML loading for the `games/` directory.
//!
//! Each `.yaml` file holds a list of game entries. Files are read in name
//! order, which fixes the row order of the export. A file that cannot be
//! read or parsed is reported and skipped; the rest of the directory still
//! loads.

use std::path::{Path, PathBuf};

use serde_yml::Value;

use crate::error::YamlError;
use crate::types::{GameRecord, RecordOrigin};

/// A file left out of a load, with the reason.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: YamlError,
}

/// Result of loading a directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// All records, in file order then in-file order.
    pub records: Vec<GameRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// List the `.yaml` files in a directory, sorted by file name. Other
/// extensions, `.yml` included, are ignored.
pub fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, YamlError> {
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == "yaml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries.into_iter().map(|e| e.path()).collect())
}

/// Parse the contents of one games file.
///
/// The document must be a list of mappings. An empty document, or one that
/// is just `null`, holds no games.
pub fn parse_games(file_name: &str, contents: &str) -> Result<Vec<GameRecord>, YamlError> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: Value = serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: file_name.to_string(),
        source: e,
    })?;

    let entries = match &doc {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(entries) => entries,
        _ => {
            return Err(YamlError::InvalidShape {
                path: file_name.to_string(),
                message: "top level must be a list of games".to_string(),
            });
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            GameRecord::from_yaml(RecordOrigin::new(file_name, i), entry).map_err(|message| {
                YamlError::InvalidShape {
                    path: file_name.to_string(),
                    message,
                }
            })
        })
        .collect()
}

/// Read and parse one games file.
pub fn load_games_file(path: &Path) -> Result<Vec<GameRecord>, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    parse_games(&file_name, &contents)
}

/// Load every games file in a directory.
///
/// Only a missing or unreadable directory is an error. Per-file failures
/// end up in [`LoadReport::skipped`].
pub fn load_games_dir(dir: &Path) -> Result<LoadReport, YamlError> {
    let mut report = LoadReport::default();

    for path in yaml_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("Processing {name}...");

        match load_games_file(&path) {
            Ok(records) => {
                log::debug!("{name}: {} games", records.len());
                report.records.extend(records);
            }
            Err(e) => {
                log::warn!("Error processing {name}: {e}");
                report.skipped.push(SkippedFile { path, error: e });
            }
        }
    }

    Ok(report)
}
