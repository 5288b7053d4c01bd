// src/gui/components/mod.rs
pub mod action_buttons;
pub mod data_table;
pub mod stats_panel;
pub mod status_panel;
