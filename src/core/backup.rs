//! Database backup: plain file copy, optionally zipped.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Copy the database to `dest`. With `compress` the copy is replaced by a
/// `.zip` next to it. Returns the path of the file actually written.
pub fn create_backup(db_path: &str, dest: &Path, compress: bool) -> AppResult<PathBuf> {
    let src = Path::new(db_path);

    if !src.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Database not found: {}", src.display()),
        )
        .into());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(src, dest)?;

    if !compress {
        return Ok(dest.to_path_buf());
    }

    let zipped = compress_backup(dest)?;
    fs::remove_file(dest)?;
    Ok(zipped)
}

fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Export(format!("invalid backup path: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
