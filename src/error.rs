// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

use crate::config::consts::{FETCH_FAILED_MSG, NO_COURSES_MSG};

/// Why a fetch produced no courses. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, undecodable body, or a non-success status with no
    /// usable message. `detail` is for the log only.
    #[error("{}", FETCH_FAILED_MSG)]
    FetchFailed { detail: String },

    /// Non-success status whose body carried an `error` message.
    #[error("{0}")]
    Server(String),

    #[error("{}", NO_COURSES_MSG)]
    NoCoursesFound,
}

impl FetchError {
    pub fn failed(detail: impl Into<String>) -> Self {
        FetchError::FetchFailed { detail: detail.into() }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
