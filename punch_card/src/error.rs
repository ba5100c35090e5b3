use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("card needs at least {min} rows to hold an encoded byte, got {rows}")]
    TooFewRows { rows: usize, min: usize },

    #[error("card needs at least one column")]
    NoColumns,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
