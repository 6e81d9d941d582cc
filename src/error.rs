use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZipgetError>;

#[derive(Error, Debug)]
pub enum ZipgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed: {url} returned HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("Cannot derive a filename from URL: {url}")]
    InvalidUrl { url: String },

    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("Invalid zip archive: {path}")]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Extraction failed: {path}")]
    ExtractionError {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Cleanup failed: {path}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
