// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input is empty or has no tags at all; nothing to traverse.
    #[error("input is not HTML markup")]
    NotMarkup,

    #[error("invalid selector `{0}`")]
    Selector(String),

    /// Destination could not be created or written. Records held by the caller are intact.
    #[error("cannot write export to {}: {source}", path.display())]
    ExportTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv writer: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("browser fetch failed: {0}")]
    Browser(String),

    #[error("browser support not compiled in (enable the `browser` feature)")]
    BrowserUnavailable,

    #[error("no source given (file path or URL)")]
    NoSource,
}
