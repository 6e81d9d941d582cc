use crate::core::progress::Progress;
use crate::error::{Result, ZipgetError};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

const CHUNK_SIZE: usize = 8192;

pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }

    /// Download `url` to a local file, streaming the body to disk.
    ///
    /// When `filename` is `None` the name is taken from the final path
    /// segment of the URL. The status is checked before the destination
    /// file is created, so a failed request leaves nothing on disk; a
    /// failure mid-transfer leaves the partial file behind.
    pub fn download(
        &self,
        url: &str,
        filename: Option<&str>,
        progress: Option<&mut dyn Progress>,
    ) -> Result<PathBuf> {
        let destination = match filename {
            Some(name) => PathBuf::from(name),
            None => PathBuf::from(filename_from_url(url)?),
        };

        println!("Downloading {} from {url}...", destination.display());

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                crate::utils::fs::ensure_dir_exists(parent)?;
            }
        }

        let mut response = reqwest::blocking::get(url)?;
        if !response.status().is_success() {
            return Err(ZipgetError::DownloadFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let total = response.content_length().unwrap_or(0);
        let mut file = File::create(&destination)?;

        match progress {
            // Unknown length leaves nothing to report, so copy straight through
            Some(progress) if total > 0 => {
                let mut downloaded = 0u64;
                let mut chunk = [0u8; CHUNK_SIZE];
                loop {
                    let read = response.read(&mut chunk)?;
                    if read == 0 {
                        break;
                    }
                    file.write_all(&chunk[..read])?;
                    downloaded += read as u64;
                    progress.update(downloaded, total);
                }
                progress.finish();
            }
            _ => {
                std::io::copy(&mut response, &mut file)?;
            }
        }

        println!("Download complete: {}", destination.display());
        Ok(destination)
    }
}

/// The substring after the last `/` of the URL.
pub fn filename_from_url(url: &str) -> Result<&str> {
    let name = url.rsplit('/').next().unwrap_or(url);
    if name.is_empty() {
        return Err(ZipgetError::InvalidUrl {
            url: url.to_string(),
        });
    }
    Ok(name)
}
