//! Projection of a [`GameRecord`] into a flat row of strings.
//!
//! The per-record schema is fixed: eleven fields are copied as scalars, six
//! list fields are joined with [`join_sequence`], and the `video` mapping is
//! split into one column per recognized platform. Every other field of the
//! record is ignored.

use std::collections::BTreeMap;

use crate::error::ProjectError;
use crate::flatten::join_sequence;
use crate::types::{FieldValue, GameRecord};

/// Fields copied verbatim into a column of the same name.
pub const SCALAR_FIELDS: [&str; 11] = [
    "name",
    "type",
    "status",
    "development",
    "content",
    "repo",
    "url",
    "feed",
    "info",
    "added",
    "updated",
];

/// List fields joined into a single column of the same name.
pub const SEQUENCE_FIELDS: [&str; 6] = [
    "originals",
    "langs",
    "frameworks",
    "licenses",
    "images",
    "multiplayer",
];

/// The nested mapping split into per-platform columns.
pub const VIDEO_FIELD: &str = "video";

/// Recognized video hosts. Other keys under `video` are dropped.
pub const VIDEO_PLATFORMS: [&str; 4] = ["youtube", "vimeo", "moddb", "indiedb"];

/// Column name for a video platform.
pub fn video_column(platform: &str) -> String {
    format!("{VIDEO_FIELD}_{platform}")
}

/// A flattened record: column name to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRow {
    cells: BTreeMap<String, String>,
}

impl ProjectedRow {
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Cell text for a column; empty when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Cells in the given column order.
    pub fn values_in<'a>(&'a self, columns: &'a [String]) -> impl Iterator<Item = &'a str> {
        columns.iter().map(|c| self.get(c))
    }
}

/// Flatten one record.
///
/// Fails when a recognized field has a shape its column cannot hold, e.g. a
/// single string where a list is expected.
pub fn project_record(record: &GameRecord) -> Result<ProjectedRow, ProjectError> {
    let mut row = ProjectedRow::default();

    for field in SCALAR_FIELDS {
        row.insert(field, scalar_text(record, field, record.get(field))?);
    }

    for field in SEQUENCE_FIELDS {
        row.insert(field, sequence_text(record, field)?);
    }

    let video = record.get(VIDEO_FIELD);
    if !matches!(video, FieldValue::Absent | FieldValue::Mapping(_)) {
        return Err(shape_error(record, VIDEO_FIELD, "a mapping", video));
    }
    for platform in VIDEO_PLATFORMS {
        let value = video.get(platform).unwrap_or(&FieldValue::Absent);
        let column = video_column(platform);
        let text = scalar_text(record, &column, value)?;
        row.insert(column, text);
    }

    Ok(row)
}

fn scalar_text(record: &GameRecord, field: &str, value: &FieldValue) -> Result<String, ProjectError> {
    match value {
        FieldValue::Absent => Ok(String::new()),
        FieldValue::Scalar(s) => Ok(s.to_string()),
        other => Err(shape_error(record, field, "a scalar", other)),
    }
}

fn sequence_text(record: &GameRecord, field: &str) -> Result<String, ProjectError> {
    match record.get(field) {
        FieldValue::Absent => Ok(String::new()),
        FieldValue::Sequence(items) => {
            let texts = items
                .iter()
                .map(|item| scalar_text(record, field, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(join_sequence(texts))
        }
        other => Err(shape_error(record, field, "a sequence", other)),
    }
}

fn shape_error(
    record: &GameRecord,
    field: &str,
    expected: &'static str,
    found: &FieldValue,
) -> ProjectError {
    ProjectError::Shape {
        record: record.origin().to_string(),
        field: field.to_string(),
        expected,
        found: found.shape(),
    }
}
