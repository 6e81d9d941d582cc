use crate::core::download::Downloader;
use crate::core::extract::extract_zip;
use crate::core::progress::Progress;
use crate::error::Result;
use crate::utils;
use std::path::{Path, PathBuf};

/// Extract a pre-existing archive, optionally deleting it afterwards.
///
/// Cleanup only runs after a successful extraction; a deletion failure
/// propagates even though the extracted files remain in place.
pub fn extract_from(archive_path: &Path, destination: &Path, cleanup: bool) -> Result<PathBuf> {
    let extract_dir = extract_zip(archive_path, destination)?;

    if cleanup {
        utils::fs::remove_file(archive_path)?;
        println!("Cleaned up: {}", archive_path.display());
    }

    Ok(extract_dir)
}

/// Download an archive and extract it in one step.
///
/// Stages run strictly in order: download, extract, optional cleanup of the
/// downloaded file. The first failure aborts the remaining stages; completed
/// stages are not rolled back.
pub fn download_and_extract(
    url: &str,
    filename: Option<&str>,
    destination: &Path,
    cleanup: bool,
    progress: Option<&mut dyn Progress>,
) -> Result<(PathBuf, PathBuf)> {
    let downloaded = Downloader::new().download(url, filename, progress)?;
    let extract_dir = extract_zip(&downloaded, destination)?;

    if cleanup {
        utils::fs::remove_file(&downloaded)?;
        println!("Cleaned up: {}", downloaded.display());
    }

    Ok((downloaded, extract_dir))
}
