use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StaticDataError {
    #[error("Static feature file '{0}' does not exist")]
    FileMissing(PathBuf),

    #[error("Failed to read static feature CSV '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' not found in '{path}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Column '{column}' in '{path}' is not numeric")]
    NonNumericColumn {
        path: PathBuf,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Missing value in column '{column}' for city '{city}' in '{path}'")]
    MissingValue {
        path: PathBuf,
        city: String,
        column: String,
    },

    #[error("Static feature file '{0}' has no attribute columns besides the city name")]
    NoAttributes(PathBuf),

    // Covers errors joining tokio blocking tasks
    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
