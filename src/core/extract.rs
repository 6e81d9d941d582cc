use crate::error::{Result, ZipgetError};
use std::fs::File;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extract every entry of a zip archive into `destination`, preserving the
/// relative paths encoded in the archive.
///
/// Existing files are overwritten without confirmation. Entries whose names
/// would escape the destination directory are skipped. There is no rollback:
/// entries written before an error is detected stay on disk.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<PathBuf> {
    if !archive_path.exists() {
        return Err(ZipgetError::ArchiveNotFound {
            path: archive_path.to_path_buf(),
        });
    }

    println!("Extracting {}...", archive_path.display());

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ZipgetError::InvalidArchive {
        path: archive_path.to_path_buf(),
        source: e,
    })?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| ZipgetError::ExtractionError {
                path: archive_path.to_path_buf(),
                source: e,
            })?;
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => continue,
        };

        if entry.name().ends_with('/') {
            std::fs::create_dir_all(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                if !p.exists() {
                    std::fs::create_dir_all(p)?;
                }
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }

    println!("Extraction complete to: {}", destination.display());
    Ok(destination.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_test_archive(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, contents) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("data.zip");
        write_test_archive(
            &archive,
            &[("a.txt", b"alpha"), ("sub/b.txt", b"beta")],
        );

        let out = dir.path().join("out");
        let returned = extract_zip(&archive, &out).unwrap();

        assert_eq!(returned, out);
        assert_eq!(std::fs::read(out.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(std::fs::read(out.join("sub/b.txt")).unwrap(), b"beta");
    }

    #[test]
    fn test_extract_twice_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("data.zip");
        write_test_archive(&archive, &[("a.txt", b"from archive")]);

        let out = dir.path().join("out");
        extract_zip(&archive, &out).unwrap();
        std::fs::write(out.join("a.txt"), b"edited locally").unwrap();

        // Second extraction silently replaces the edited file
        extract_zip(&archive, &out).unwrap();
        assert_eq!(std::fs::read(out.join("a.txt")).unwrap(), b"from archive");
    }

    #[test]
    fn test_missing_archive() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_zip(&dir.path().join("absent.zip"), dir.path()).unwrap_err();
        assert!(matches!(err, ZipgetError::ArchiveNotFound { .. }));
    }

    #[test]
    fn test_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.zip");
        std::fs::write(&bogus, b"this is plain text, not a zip container").unwrap();

        let err = extract_zip(&bogus, dir.path()).unwrap_err();
        assert!(matches!(err, ZipgetError::InvalidArchive { .. }));
    }

    #[test]
    fn test_entry_escaping_destination_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("evil.zip");
        write_test_archive(
            &archive,
            &[("../escape.txt", b"outside"), ("ok.txt", b"inside")],
        );

        let out = dir.path().join("out");
        extract_zip(&archive, &out).unwrap();

        assert!(!dir.path().join("escape.txt").exists());
        assert_eq!(std::fs::read(out.join("ok.txt")).unwrap(), b"inside");
    }
}
