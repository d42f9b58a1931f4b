//! ODS error types

use thiserror::Error;

/// Result type for ODS operations
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur while building or writing a document
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error while formatting an XML part
    #[error("XML formatting error")]
    Fmt(#[from] std::fmt::Error),

    /// No table with this name
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Address without a table where one is required
    #[error("Missing table name in address: {0}")]
    MissingTable(String),

    /// Row index past the last row of a table
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index past the last column of a table
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// File extension other than `.ods`
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] odsgen_core::Error),
}

impl From<odsgen_core::ParseError> for OdsError {
    fn from(err: odsgen_core::ParseError) -> Self {
        OdsError::Core(err.into())
    }
}
