// src/specs/profile.rs
//
// Scholar profile page (`/citations?user=...`). The article table is read as three
// parallel lists, one entry per row:
//   - `a.gsc_a_at`  title link
//   - `a.gsc_a_ac`  citation count (a bare non-breaking space means 0)
//   - `span.gsc_a_h` year; the first hit is the column header, not a row
// The second `a.gsc_a_a` anchor on the page is the "sort by year" link.

use tracing::{debug, warn};

use crate::core::html::{attr, elements_with_class, open_tag, text_of};
use crate::core::sanitize::normalize_entities;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub title: String,
    /// Site-relative link to the paper's detail page, entities decoded.
    pub href: String,
    pub citations: u32,
    pub year: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePage {
    pub rows: Vec<ProfileRow>,
    pub by_year_href: Option<String>,
}

pub fn parse(doc: &str) -> ProfilePage {
    let titles = elements_with_class(doc, "a", "gsc_a_at");
    let counts = elements_with_class(doc, "a", "gsc_a_ac");
    let years: Vec<&str> = elements_with_class(doc, "span", "gsc_a_h")
        .into_iter()
        .skip(1)
        .collect();

    if titles.len() != counts.len() || titles.len() != years.len() {
        warn!(
            titles = titles.len(),
            counts = counts.len(),
            years = years.len(),
            "profile columns disagree; reading the common prefix"
        );
    }

    let mut rows = Vec::with_capacity(titles.len());
    for ((t, c), y) in titles.iter().zip(&counts).zip(&years) {
        let title = text_of(t);
        let Some(year) = parse_year(&text_of(y)) else {
            debug!(title, "row without a usable year skipped");
            continue;
        };
        let Some(citations) = parse_count(&text_of(c)) else {
            debug!(title, "row without a usable count skipped");
            continue;
        };
        let href = attr(open_tag(t), "href").map(normalize_entities).unwrap_or_default();
        rows.push(ProfileRow { title, href, citations, year });
    }

    let by_year_href = elements_with_class(doc, "a", "gsc_a_a")
        .get(1)
        .and_then(|a| attr(open_tag(a), "href"))
        .map(normalize_entities);

    ProfilePage { rows, by_year_href }
}

/// Empty (after `&nbsp;` decoding) means zero.
fn parse_count(text: &str) -> Option<u32> {
    let t = text.trim();
    if t.is_empty() { Some(0) } else { t.replace(',', "").parse().ok() }
}

fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Year-sorted profile URL when the page has no sort link.
pub fn by_year_fallback(profile_url: &str) -> String {
    join!(profile_url, "&sortby=pubdate")
}
