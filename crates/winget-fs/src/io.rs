//! Atomic file I/O

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::{Error, Result};

/// Write content atomically to a file.
///
/// Creates missing parent directories, writes to a temporary file in the
/// same directory (same filesystem), syncs it, then renames it over the
/// target. Readers see either the old file or the complete new one. On
/// failure the temporary file is removed and the target is left untouched.
///
/// An existing target keeps its permissions. A new file gets the same mode
/// a plain create would, after the process umask.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    // Dropping the handle on an early return deletes the temp file
    let mut temp = builder.tempfile_in(parent).map_err(|e| Error::io(parent, e))?;

    if let Some(existing) = fs::metadata(path).ok().filter(|m| m.is_file()) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    temp.write_all(content).map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write committed");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
