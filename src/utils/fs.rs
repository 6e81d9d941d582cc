use crate::error::{Result, ZipgetError};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ZipgetError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ZipgetError::from(e),
        })?;
    }
    Ok(())
}

pub fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ZipgetError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ZipgetError::CleanupFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_exists_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_dir_exists(&nested).unwrap();
    }

    #[test]
    fn test_remove_file_missing_is_cleanup_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = remove_file(&dir.path().join("gone.zip")).unwrap_err();
        assert!(matches!(err, ZipgetError::CleanupFailed { .. }));
    }
}
