// src/error.rs
use thiserror::Error;

/// Every failure a scrape run can end with. None of them is recovered from:
/// the first error aborts the whole run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Parameters file missing, unreadable, or lacking a required key.
    #[error("config error: {0}")]
    Config(String),

    /// Transport failure or non-success HTTP status.
    #[error("network error fetching {url}: {reason}")]
    Network { url: String, reason: String },

    /// Expected page structure is absent.
    #[error("parse error: {0}")]
    Parse(String),

    /// Expected field is absent or malformed inside a match row.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Export attempted on a table without rows or columns.
    #[error("empty data: {0}")]
    EmptyData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
