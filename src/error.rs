use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a response body into a [`crate::model::Feed`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("Entity declarations are forbidden in feed documents")]
    EntitiesForbidden,

    #[error("Reference to unknown entity '&{0};'")]
    UnknownEntity(String),

    #[error("Document has no channel element")]
    MissingChannel,

    #[error("Document ended before '{0}' was closed")]
    Truncated(String),
}

/// Errors that can occur when fetching a single feed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse feed from {url}: {source}")]
    Parse { url: String, source: ParseError },
}

/// Errors that can occur when writing the generated page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Output path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}
