use thiserror::Error;

/// Errors raised while loading catalog YAML files.
#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Unexpected structure in {path}: {message}")]
    InvalidShape { path: String, message: String },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// A field whose shape does not match what its column expects.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{record}: field `{field}` should be {expected}, found {found}")]
    Shape {
        record: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Fatal errors of an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Games directory not found: {0}")]
    DirNotFound(String),

    #[error("No games found in YAML files under {0}")]
    NoRecords(String),

    #[error(transparent)]
    Load(#[from] YamlError),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
