// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod controller;
pub mod course;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod progress;
pub mod render;
pub mod stats;
