use crate::core::pipeline;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn extract_archive(archive: &Path, destination: &Path, cleanup: bool) -> Result<PathBuf> {
    match pipeline::extract_from(archive, destination, cleanup) {
        Ok(dir) => Ok(dir),
        Err(e) => {
            println!("Error extracting archive: {e}");
            Err(e)
        }
    }
}
