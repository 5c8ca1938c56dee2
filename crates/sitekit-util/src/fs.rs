use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use walkdir::WalkDir;

/// Write bytes to `path` without ever exposing a half-written file.
///
/// The bytes land in a hidden sibling staging file first and are moved into
/// place with a rename, so a reader observes either the previous content or
/// the new content in full.
///
/// # Errors
/// Returns an error if the write or the rename fails.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let stem = path.file_name().and_then(|n| n.to_str()).unwrap_or("out");
    // Staged in the target's own directory, so the rename never crosses filesystems
    let staging = dir.join(format!(".{stem}.{}.part", std::process::id()));

    let mut file = File::create(&staging)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&staging, path) {
        // Windows refuses to rename over an existing file; fall back to copy
        if cfg!(windows) {
            fs::copy(&staging, path)?;
            let _ = fs::remove_file(&staging);
            return Ok(());
        }
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    Ok(())
}

/// Recursively copy a directory tree into `dest`, creating directories as needed.
///
/// # Errors
/// Returns an error if any file cannot be read or written.
pub fn copy_dir_all(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
