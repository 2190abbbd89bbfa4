//! Resolution of the exported column list.

use std::collections::BTreeSet;

use crate::error::ProjectError;
use crate::project::project_record;
use crate::types::GameRecord;

/// Leading columns of every export, in this order.
pub const CANONICAL_COLUMNS: [&str; 21] = [
    "name",
    "type",
    "status",
    "development",
    "content",
    "originals",
    "repo",
    "url",
    "feed",
    "info",
    "langs",
    "frameworks",
    "licenses",
    "multiplayer",
    "images",
    "video_youtube",
    "video_vimeo",
    "video_moddb",
    "video_indiedb",
    "added",
    "updated",
];

/// Compute the column list for a set of records.
///
/// Projects every record and collects the union of their columns. The
/// canonical columns come first; anything else any row produced follows in
/// ascending order.
pub fn resolve_columns(records: &[GameRecord]) -> Result<Vec<String>, ProjectError> {
    let mut seen = BTreeSet::new();
    for record in records {
        let row = project_record(record)?;
        seen.extend(row.columns().map(str::to_string));
    }
    Ok(columns_from_keys(seen))
}

/// Canonical columns followed by the sorted remainder of `keys`.
pub fn columns_from_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let extra: BTreeSet<String> = keys
        .into_iter()
        .filter(|k| !CANONICAL_COLUMNS.contains(&k.as_str()))
        .collect();

    CANONICAL_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(extra)
        .collect()
}
