//! CSV export of the games catalog.
//!
//! [`run_export`] drives the whole job: load every games file, resolve the
//! column list, flatten each game, and write one table.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::fields::resolve_columns;
use crate::project::{ProjectedRow, project_record};
use crate::yaml::{SkippedFile, load_games_dir};

/// Input directory name under the project root.
pub const GAMES_DIR: &str = "games";

/// Output file name under the project root.
pub const OUTPUT_FILE: &str = "games_export.csv";

/// Input and output locations of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub games_dir: PathBuf,
    pub output_file: PathBuf,
}

impl ExportPaths {
    /// Standard layout: `<root>/games` in, `<root>/games_export.csv` out.
    pub fn from_root(root: &Path) -> Self {
        Self {
            games_dir: root.join(GAMES_DIR),
            output_file: root.join(OUTPUT_FILE),
        }
    }
}

/// What an export run produced.
#[derive(Debug)]
pub struct ExportSummary {
    pub loaded: usize,
    pub exported: usize,
    pub columns: Vec<String>,
    /// Files that failed to load and were left out.
    pub skipped: Vec<SkippedFile>,
    pub output_file: PathBuf,
}

/// Write a header line and one line per row.
///
/// Cells are taken in `columns` order; a column a row lacks is written
/// empty. Cells containing a comma, quote or line break are quoted. Lines
/// end in `\r\n`.
pub fn write_table<W: Write>(
    writer: W,
    columns: &[String],
    rows: &[ProjectedRow],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(columns)?;
    for row in rows {
        wtr.write_record(row.values_in(columns))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the table to `path`.
///
/// Goes through a sibling `.tmp` file and a rename, so a failed write never
/// leaves a truncated table behind.
pub fn write_table_file(
    path: &Path,
    columns: &[String],
    rows: &[ProjectedRow],
) -> Result<(), ExportError> {
    let tmp = path.with_extension("csv.tmp");
    let file = fs::File::create(&tmp).map_err(|e| ExportError::Io {
        path: tmp.display().to_string(),
        source: e,
    })?;

    if let Err(e) = write_table(file, columns, rows) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    fs::rename(&tmp, path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Run a full export.
///
/// Fails without touching the output file when the games directory is
/// missing, no games could be loaded, or a game has a malformed field.
pub fn run_export(paths: &ExportPaths) -> Result<ExportSummary, ExportError> {
    if !paths.games_dir.is_dir() {
        return Err(ExportError::DirNotFound(
            paths.games_dir.display().to_string(),
        ));
    }

    log::info!("Loading games from YAML files...");
    let report = load_games_dir(&paths.games_dir)?;
    if report.records.is_empty() {
        return Err(ExportError::NoRecords(
            paths.games_dir.display().to_string(),
        ));
    }
    let loaded = report.records.len();
    log::info!("Loaded {loaded} games from YAML files.");

    log::info!("Exporting to CSV...");
    let columns = resolve_columns(&report.records)?;
    let rows = report
        .records
        .iter()
        .map(project_record)
        .collect::<Result<Vec<_>, _>>()?;

    write_table_file(&paths.output_file, &columns, &rows)?;

    log::info!(
        "Exported {} games to {}",
        rows.len(),
        paths.output_file.display()
    );
    log::info!("Fields: {}", columns.join(", "));

    Ok(ExportSummary {
        loaded,
        exported: rows.len(),
        columns,
        skipped: report.skipped,
        output_file: paths.output_file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CANONICAL_COLUMNS;

    fn table(columns: &[String], rows: &[ProjectedRow]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, columns, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_then_rows_in_column_order() {
        let mut row = ProjectedRow::default();
        row.insert("b", "2");
        row.insert("a", "1");
        let out = table(&cols(&["a", "b"]), &[row]);
        assert_eq!(out, "a,b\r\n1,2\r\n");
    }

    #[test]
    fn missing_cells_are_empty() {
        let mut row = ProjectedRow::default();
        row.insert("a", "x");
        let out = table(&cols(&["a", "b", "c"]), &[row]);
        assert_eq!(out, "a,b,c\r\nx,,\r\n");
    }

    #[test]
    fn special_characters_are_quoted() {
        let mut row = ProjectedRow::default();
        row.insert("a", "one, two");
        row.insert("b", "say \"hi\"");
        row.insert("c", "line\nbreak");
        row.insert("d", "plain; text");
        let out = table(&cols(&["a", "b", "c", "d"]), &[row]);
        assert_eq!(
            out,
            "a,b,c,d\r\n\"one, two\",\"say \"\"hi\"\"\",\"line\nbreak\",plain; text\r\n"
        );
    }

    #[test]
    fn from_root_uses_fixed_names() {
        let paths = ExportPaths::from_root(Path::new("/srv/catalog"));
        assert_eq!(paths.games_dir, PathBuf::from("/srv/catalog/games"));
        assert_eq!(paths.output_file, PathBuf::from("/srv/catalog/games_export.csv"));
    }

    #[test]
    fn canonical_header_line() {
        let columns: Vec<String> = CANONICAL_COLUMNS.iter().map(|s| s.to_string()).collect();
        let out = table(&columns, &[]);
        assert_eq!(out.trim_end(), CANONICAL_COLUMNS.join(","));
    }
}
