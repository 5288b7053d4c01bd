// src/gui/actions/mod.rs
//
// Folder module facade: button handlers.

mod clear;      // src/gui/actions/clear.rs
mod export;     // src/gui/actions/export.rs
pub mod scrape; // src/gui/actions/scrape.rs (complete() is polled by App)

pub use clear::clear;
pub use export::export;
pub use scrape::scrape;
