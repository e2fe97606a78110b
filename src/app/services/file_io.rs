use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::app::domain::TextSurface;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::html;

/// Extension appended to Save As names that carry none.
pub const DEFAULT_EXTENSION: &str = "pflow";

/// On-disk representation chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    PlainText,
    Html,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("htm") | Some("html") => Self::Html,
            _ => Self::PlainText,
        }
    }
}

/// Append `.pflow` when the file name has no dot at all.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    let has_dot = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains('.'));
    if has_dot {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(".");
    raw.push(DEFAULT_EXTENSION);
    PathBuf::from(raw)
}

/// Replace the surface content with the file at `path`.
///
/// The surface is only touched once the whole file has been read and
/// decoded, so a failed open leaves the current document as it was.
pub fn load_into(surface: &mut impl TextSurface, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path).map_err(|source| AppError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    match FileFormat::from_path(path) {
        FileFormat::Html => surface.set_html(&data),
        FileFormat::PlainText => surface.set_plain_text(&data),
    }
    surface.set_modified(false);
    tracing::info!("Opened {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Serialize the surface to `path` and clear its modified flag.
pub fn save_from(surface: &mut impl TextSurface, path: &Path) -> Result<()> {
    let data = match FileFormat::from_path(path) {
        FileFormat::Html => surface.html(),
        FileFormat::PlainText => surface.plain_text(),
    };
    write_atomic(path, data.as_bytes()).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    surface.set_modified(false);
    tracing::info!("Saved {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Write through a temporary sibling file renamed over `path`, so an
/// interrupted write never truncates the previous version.
pub fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
