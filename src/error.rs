use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("no column for {field}: none of {candidates:?} present in {columns:?}")]
    Schema {
        field: String,
        candidates: Vec<String>,
        columns: Vec<String>,
    },

    #[error("cannot parse match descriptor: {token:?}")]
    Parse { token: String },

    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
