// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Defaults, with the endpoint taken from `COURSES_API_URL` when set.
    pub fn from_env() -> Self {
        Self {
            fetch: FetchOptions::from_env(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Scheme + host (+ port) of the backend; the API path is appended.
    pub base_url: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_BASE_URL) }
    }
}

impl FetchOptions {
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(v) if !v.trim().is_empty() => Self { base_url: s!(v.trim()) },
            _ => Self::default(),
        }
    }

    pub fn endpoint(&self) -> String {
        join!(self.base_url.trim_end_matches('/'), API_PATH)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: OutputPath::default() }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.file_name)
    }

    /// Parse GUI/CLI text into dir + file name.
    /// Empty text restores the default; a trailing separator or an existing
    /// directory keeps the default file name inside that directory.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(s) || p.is_dir() {
            self.out_path.dir = p;
            self.out_path.file_name = s!(CSV_FILE_NAME);
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(name) = p.file_name() {
            self.out_path.file_name = name.to_string_lossy().into_owned();
        }
    }

    pub fn is_default(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_name: String,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: s!(CSV_FILE_NAME),
        }
    }
}
