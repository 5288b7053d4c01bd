// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{consts::CSV_MIME, options::ExportOptions},
    course::CourseRecord,
    csv::to_export_string,
    error::ExportError,
};

/// Write the CSV export to `export.out_path()`.
/// Returns `Ok(None)` without touching the disk when there is nothing to export.
pub fn write_export(
    export: &ExportOptions,
    courses: &[CourseRecord],
) -> Result<Option<PathBuf>, ExportError> {
    if courses.is_empty() {
        return Ok(None);
    }

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(courses);
    fs::write(&path, contents).map_err(|source| ExportError::Io { path: path.clone(), source })?;

    logd!("Export: {} bytes as {} → {}", path.metadata().map(|m| m.len()).unwrap_or(0), CSV_MIME, path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
