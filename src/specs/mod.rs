// src/specs/mod.rs
//! # Page specs
//!
//! One module per Scholar page. Each spec knows *where the data lives in the
//! HTML* and how to read it tolerantly; it never fetches, caches or sleeps.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect → ScholarSource::fetch → Fetcher::page (cache / network)
//!                                              ↘  specs::<page>::parse(&html)
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag matching through `core::html`; class names match by token.
//! - Rows that cannot be read (no year, garbled count) are skipped with a debug log.
//! - Specs are tested offline against trimmed fixtures of real markup.
//!
//! ## Current specs
//! - `profile` – the profile table (titles, counts, years) and the year-sort link.
//! - `paper`   – a paper's detail page (byline and venue).
pub mod paper;
pub mod profile;
