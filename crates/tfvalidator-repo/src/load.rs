use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use tfvalidator_types::{Error, Result};
use walkdir::WalkDir;

use crate::model::{LoadedDirectory, LoadedFile};

/// Read a single file fully into memory.
pub fn load_file(path: &Utf8Path) -> Result<LoadedFile> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let name = path.file_name().unwrap_or(path.as_str());
    Ok(LoadedFile::new(name, path, content))
}

/// Load the regular files directly under `path`.
///
/// Behavior:
/// - Subdirectories are skipped, never descended into.
/// - Symlinks are followed; a link to a regular file is loaded like one.
/// - Entries are sorted by file name.
/// - Entries whose name is not UTF-8 are skipped with a warning.
/// - Any unreadable entry fails the whole load.
pub fn load_directory(path: &Utf8Path) -> Result<LoadedDirectory> {
    let meta = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if !meta.is_dir() {
        return Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let at = e
                .path()
                .and_then(|p| Utf8Path::from_path(p))
                .map(Utf8Path::to_path_buf)
                .unwrap_or_else(|| path.to_path_buf());
            Error::io(at, io::Error::from(e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(p) => p,
            Err(p) => {
                tracing::warn!(path = %p.display(), "skipping entry with non-UTF-8 name");
                continue;
            }
        };
        entries.push(load_file(&file_path)?);
    }

    tracing::debug!(path = %path, entries = entries.len(), "loaded directory");
    Ok(LoadedDirectory::new(path, entries))
}
