//! Zipget Library
//!
//! This library provides the core functionality for the `zipget` CLI: a
//! sequential download-then-extract pipeline for zip archives fetched over
//! HTTP, with optional progress reporting and cleanup of the downloaded
//! artifact.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::download::Downloader;
pub use crate::core::extract::extract_zip;
pub use crate::core::pipeline::{download_and_extract, extract_from};
pub use crate::core::progress::{ConsoleBar, Progress};
pub use crate::error::{Result, ZipgetError};
