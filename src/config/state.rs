// src/config/state.rs
use std::path::PathBuf;
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Where the last successful export landed (shown under the buttons)
    pub last_export: Option<PathBuf>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            last_export: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            options: AppOptions::from_env(),
            gui: GuiState::default(),
        }
    }
}
