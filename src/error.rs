use std::fmt;

/// Unified error type for fetch and export operations
#[derive(Debug)]
pub enum ExportError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse a JSON response body
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    Io(std::io::Error),
    /// CSV serialization failed
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Network(e) => write!(f, "Network error: {}", e),
            ExportError::Parse(e) => write!(f, "Parse error: {}", e),
            ExportError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Network(e) => Some(e),
            ExportError::Parse(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Csv(e) => Some(e),
            ExportError::HttpStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Network(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Parse(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
