use crate::core::download::Downloader;
use crate::core::progress::ConsoleBar;
use crate::error::Result;
use std::path::PathBuf;

pub fn download_archive(url: &str, output: Option<&str>, quiet: bool) -> Result<PathBuf> {
    let downloader = Downloader::new();

    let result = if quiet {
        downloader.download(url, output, None)
    } else {
        let mut bar = ConsoleBar::new();
        downloader.download(url, output, Some(&mut bar))
    };

    match result {
        Ok(path) => Ok(path),
        Err(e) => {
            println!("Error downloading file: {e}");
            Err(e)
        }
    }
}
