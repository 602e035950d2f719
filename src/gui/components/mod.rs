// src/gui/components/mod.rs
pub mod export_bar;
pub mod paper_table;
pub mod people_panel;
pub mod run_bar;
pub mod tabs;
