// src/gui/table_model.rs
//! What the paper table shows: the combined ranking for the active tab, or
//! one person's own list when a person is selected in the left panel.
//! Rows are display strings; Copy/Export go through `report` instead.

use crate::config::state::Tab;
use crate::model::Paper;
use crate::runner::RunOutcome;

pub const HEADERS: [&str; 5] = ["Citations", "Year", "Title", "Venue", "Authors"];

/// Column indices that hold numbers (centered in the table).
pub const NUMERIC_COLUMNS: [usize; 2] = [0, 1];

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub rows: Vec<[String; 5]>,
    /// Paper URLs, parallel to `rows`.
    pub urls: Vec<String>,
}

impl TableData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn from_papers(papers: &[Paper]) -> Self {
        let rows = papers
            .iter()
            .map(|p| {
                [
                    p.citations.to_string(),
                    p.year.to_string(),
                    p.title.clone(),
                    p.venue.clone().unwrap_or_default(),
                    p.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", "),
                ]
            })
            .collect();
        Self { rows, urls: papers.iter().map(|p| p.url.clone()).collect() }
    }
}

/// Papers behind the current view.
pub fn papers_for<'a>(outcome: &'a RunOutcome, tab: Tab, person: Option<usize>) -> &'a [Paper] {
    match person.and_then(|i| outcome.subject.people().get(i)) {
        Some(p) => match tab {
            Tab::MostCited => &p.cited,
            Tab::MostRecent => &p.recent,
        },
        None => match tab {
            Tab::MostCited => &outcome.rankings.cited,
            Tab::MostRecent => &outcome.rankings.recent,
        },
    }
}

pub fn build(outcome: Option<&RunOutcome>, tab: Tab, person: Option<usize>) -> TableData {
    match outcome {
        Some(o) => TableData::from_papers(papers_for(o, tab, person)),
        None => TableData::empty(),
    }
}
