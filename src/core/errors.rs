use crate::parser::ParseError;
use crate::storage::StorageError;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Fetch failed for {url}: status {status}")]
    FetchError { url: Url, status: u16 },

    #[error("Parsing error: {0}")]
    ParsingError(#[from] ParseError),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

pub type ScraperResult<T> = Result<T, ScraperError>;
