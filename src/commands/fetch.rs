use crate::core::pipeline;
use crate::core::progress::ConsoleBar;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn fetch_archive(
    url: &str,
    output: Option<&str>,
    destination: &Path,
    cleanup: bool,
    quiet: bool,
) -> Result<(PathBuf, PathBuf)> {
    let result = if quiet {
        pipeline::download_and_extract(url, output, destination, cleanup, None)
    } else {
        let mut bar = ConsoleBar::new();
        pipeline::download_and_extract(url, output, destination, cleanup, Some(&mut bar))
    };

    match result {
        Ok(paths) => Ok(paths),
        Err(e) => {
            println!("Error in download and extract: {e}");
            Err(e)
        }
    }
}
