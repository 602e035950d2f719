//! # Group rankers
//!
//! Two ways of folding several people's individually ranked lists into one
//! group list. Both borrow from the input `Person`s and never mutate them;
//! both return each title (case-insensitively) at most once and never more
//! than the requested number of papers.
//!
//! - [`citations`]: a descending merge on citation count.
//! - [`recency`]: a year-by-year allocation that spreads the list across
//!   people before letting anyone contribute a second paper for the same year.
//!
//! Candidates are scanned person by person in group order, then down each
//! person's list. The citation merge gives equal counts to the last candidate
//! scanned; the year allocator visits equally busy people in group order.

pub mod citations;
pub mod recency;

pub use citations::merge_by_citations;
pub use recency::{YearAllocator, allocate_by_year};
