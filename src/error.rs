// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A primary subject is missing from the roster. Fatal for the whole run:
    /// the roster file is most likely out of date.
    #[error("{name:?} not found in the roster (is {roster} out of date?)")]
    UnknownMember { name: String, roster: String },

    #[error("roster line {line}: {reason}")]
    RosterLine { line: usize, reason: String },

    #[error("group file {path}: {reason}")]
    GroupFile { path: PathBuf, reason: String },

    #[error("records file has no entry for {0:?}")]
    MissingRecords(String),

    #[error("page {url}: {reason}")]
    Page { url: String, reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn page(url: &str, reason: impl Into<String>) -> Self {
        Error::Page { url: s!(url), reason: reason.into() }
    }
}
