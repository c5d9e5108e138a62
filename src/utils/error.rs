use thiserror::Error;

/// Main error type for quake-query
#[derive(Debug, Error)]
pub enum QuakeError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Data shape error: {0}")]
    DataShape(#[from] DataShapeError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Network and HTTP-status failures while talking to the search API
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Server returned HTTP status {0}")]
    HttpStatus(u16),
}

/// Malformed response body
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Expected response structure missing, beyond the tolerated per-item case
#[derive(Debug, Error)]
pub enum DataShapeError {
    #[error("Response has no 'meta.pagination' block")]
    MissingPagination,

    #[error("Response has no 'data' array")]
    MissingData,
}

/// Filesystem and write failures during spreadsheet export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export file '{path}': {reason}")]
    FileCreate { path: String, reason: String },

    #[error("Failed to write export file: {0}")]
    WriteFailed(String),
}

/// Result type alias for quake-query operations
pub type QuakeResult<T> = Result<T, QuakeError>;
