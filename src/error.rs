//! Error types shared by the loader, fetcher, selector and writer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] ureq::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid tag path: {0:?}")]
    InvalidPath(String),

    #[error("Missing column in directive table: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No directive produced any names; nothing to write")]
    EmptyResultSet,
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ScrapeError::HttpStatus {
            status: 503,
            url: "https://example.com/roster".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 for https://example.com/roster");
    }
}
