// src/specs/paper.rs
//
// Scholar paper detail page (`view_op=view_citation`). Each fact is a
// `div.gs_scl` row holding a `div.gsc_field` label followed by its value div.
//
// Authors come from the "Authors" row when it is the first row. Otherwise the
// "Scholar articles" row is searched: each `div.gsc_merged_snippet` has a second
// child div reading "JA Smith, B Jones - Journal of X, 2015"; the first snippet
// mentioning the person's family name gives the byline.
// The venue is the value of the last "Book", "Conference" or "Journal" row.

use crate::core::html::{child_elements, elements_with_class, text_of};

const VENUE_FIELDS: &[&str] = &["Book", "Conference", "Journal"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BylineSource {
    /// The page's "Authors" row: full names as the author entered them.
    AuthorsField,
    /// A "Scholar articles" snippet: abbreviated names ("JA Smith").
    ScholarArticles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperDetails {
    pub byline: String,
    /// Byline split on commas, trimmed, empties dropped.
    pub authors: Vec<String>,
    pub byline_source: Option<BylineSource>,
    pub venue: Option<String>,
}

struct Row {
    field: String,
    value_block: Option<String>,
}

fn rows(doc: &str) -> Vec<Row> {
    elements_with_class(doc, "div", "gs_scl")
        .into_iter()
        .map(|scl| {
            let kids = child_elements(scl, "div");
            let field = kids.first().map(|f| text_of(f)).unwrap_or_default();
            Row { field, value_block: kids.get(1).map(|v| s!(*v)) }
        })
        .collect()
}

/// `family` is the page owner's family name, used to pick the right snippet.
pub fn parse(doc: &str, family: &str) -> PaperDetails {
    let rows = rows(doc);

    let (byline, byline_source) = match rows.first() {
        Some(first) if first.field == "Authors" => (
            first.value_block.as_deref().map(text_of).unwrap_or_default(),
            Some(BylineSource::AuthorsField),
        ),
        _ => match snippet_byline(&rows, family) {
            Some(b) => (b, Some(BylineSource::ScholarArticles)),
            None => (s!(), None),
        },
    };

    let venue = rows
        .iter()
        .filter(|r| VENUE_FIELDS.contains(&r.field.as_str()))
        .filter_map(|r| r.value_block.as_deref().map(text_of))
        .filter(|v| !v.is_empty())
        .last();

    PaperDetails { authors: split_authors(&byline), byline, byline_source, venue }
}

fn snippet_byline(rows: &[Row], family: &str) -> Option<String> {
    let value = rows
        .iter()
        .find(|r| r.field == "Scholar articles")?
        .value_block
        .as_deref()?;

    elements_with_class(value, "div", "gsc_merged_snippet")
        .into_iter()
        .filter_map(|snippet| child_elements(snippet, "div").get(1).map(|d| text_of(d)))
        .find(|info| !family.is_empty() && info.contains(family))
        .map(|info| match info.split_once(" - ") {
            Some((authors, _venue)) => s!(authors.trim()),
            None => info,
        })
}

pub fn split_authors(byline: &str) -> Vec<String> {
    byline
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty() && *a != "...")
        .map(|a| s!(a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_AUTHORS: &str = r#"
      <div id="gsc_oci_table">
        <div class="gs_scl"><div class="gsc_oci_field gsc_field">Authors</div><div class="gsc_oci_value gsc_value">Herbert Van de Sompel, Michael L Nelson, Robert Sanderson</div></div>
        <div class="gs_scl"><div class="gsc_field">Publication date</div><div class="gsc_value">2009/11/6</div></div>
        <div class="gs_scl"><div class="gsc_field">Journal</div><div class="gsc_value">arXiv preprint arXiv:0911.1112</div></div>
      </div>"#;

    const WITH_SNIPPETS: &str = r#"
      <div class="gs_scl"><div class="gsc_field">Publication date</div><div class="gsc_value">2015</div></div>
      <div class="gs_scl"><div class="gsc_field">Conference</div><div class="gsc_value">JCDL &#39;15</div></div>
      <div class="gs_scl"><div class="gsc_field">Scholar articles</div><div class="gsc_value">
        <div class="gsc_merged_snippet"><div><a href="/x">Other paper</a></div><div>A Other, B Person - Elsewhere, 2010</div></div>
        <div class="gsc_merged_snippet"><div><a href="/y">Archival paper</a></div><div>SM Alam, ML Nelson, MC Weigle - Proceedings of JCDL, 2015</div><div>Cited by 12</div></div>
      </div></div>"#;

    #[test]
    fn authors_row_wins() {
        let d = parse(WITH_AUTHORS, "Nelson");
        assert_eq!(d.byline_source, Some(BylineSource::AuthorsField));
        assert_eq!(d.authors, ["Herbert Van de Sompel", "Michael L Nelson", "Robert Sanderson"]);
        assert_eq!(d.venue.as_deref(), Some("arXiv preprint arXiv:0911.1112"));
    }

    #[test]
    fn falls_back_to_matching_snippet() {
        let d = parse(WITH_SNIPPETS, "Nelson");
        assert_eq!(d.byline_source, Some(BylineSource::ScholarArticles));
        assert_eq!(d.byline, "SM Alam, ML Nelson, MC Weigle");
        assert_eq!(d.authors, ["SM Alam", "ML Nelson", "MC Weigle"]);
        assert_eq!(d.venue.as_deref(), Some("JCDL '15"));
    }

    #[test]
    fn no_snippet_mentions_the_owner() {
        let d = parse(WITH_SNIPPETS, "Zed");
        assert_eq!(d.byline_source, None);
        assert!(d.authors.is_empty());
        assert_eq!(d.venue.as_deref(), Some("JCDL '15"));
    }
}
