use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("transformation failed: {} error(s), {rows_processed} row(s) transformed", errors.len())]
    Transformation {
        errors: Vec<String>,
        rows_processed: usize,
    },

    #[error("no data to transform")]
    EmptyOutput,

    #[error("failed to serialize canonical CSV: {0}")]
    Serialize(#[from] csv::Error),

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TransformError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
