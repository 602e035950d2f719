// src/lib.rs

#[macro_use]
pub mod macros;

pub mod error;
pub mod config;
pub mod core;
pub mod specs;

// Ranking core
pub mod model;
pub mod roster;
pub mod rank;
pub mod aggregate;

pub mod group;
pub mod subject;
pub mod scrape;
pub mod report;
pub mod runner;

pub mod file;
pub mod log;
pub mod progress;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
