// src/scrape/scholar.rs
//
// Google Scholar as a record source.
//   1. Profile page (papers by citation count)  -> cited list
//   2. Year-sorted profile page                  -> recent list
//   3. Each kept paper's detail page             -> byline, venue, coauthor links
// Detail pages are visited in random order and fetched once per run.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::{Fetcher, RecordSource};
use crate::config::options::ScrapeOptions;
use crate::error::Result;
use crate::model::{Author, Paper, Person, PersonRecords};
use crate::roster::Roster;
use crate::specs::paper::{self, BylineSource, PaperDetails};
use crate::specs::profile::{self, ProfileRow};

pub struct ScholarSource {
    opts: ScrapeOptions,
    fetcher: Fetcher,
    /// Detail pages by URL.
    detail_pages: HashMap<String, String>,
}

impl ScholarSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        Ok(Self {
            opts: opts.clone(),
            fetcher: Fetcher::new(opts)?,
            detail_pages: HashMap::new(),
        })
    }

    pub fn network_requests(&self) -> usize {
        self.fetcher.network_requests()
    }

    fn papers(&self, person: &Person, rows: &[ProfileRow], size: usize) -> Vec<Paper> {
        rows.iter()
            .filter(|r| person.accepts(&r.title, r.year))
            .take(size)
            .map(|r| Paper::new(&r.title, &self.opts.absolute(&r.href), r.year, r.citations))
            .collect()
    }

    fn details(&mut self, paper: &Paper, family: &str) -> Option<PaperDetails> {
        if !self.detail_pages.contains_key(&paper.url) {
            match self.fetcher.page(&paper.url, &paper.title) {
                Ok(doc) => {
                    self.detail_pages.insert(paper.url.clone(), doc);
                }
                Err(e) => {
                    warn!(title = %paper.title, error = %e, "paper page unavailable; keeping it without byline");
                    return None;
                }
            }
        }
        self.detail_pages.get(&paper.url).map(|doc| paper::parse(doc, family))
    }
}

impl RecordSource for ScholarSource {
    fn fetch(&mut self, person: &Person, roster: &Roster) -> Result<PersonRecords> {
        let name = person.name();
        let profile_url = person.identity.source_url.as_str();

        let doc = self.fetcher.page(profile_url, &format!("{name}_citations"))?;
        let page = profile::parse(&doc);
        let cited = self.papers(person, &page.rows, person.cited_size);

        let by_year_url = match &page.by_year_href {
            Some(href) => self.opts.absolute(href),
            None => {
                debug!(person = name, "no year-sort link; using the pubdate query");
                profile::by_year_fallback(profile_url)
            }
        };

        let recent = if person.recent_size > 0 {
            let doc = self.fetcher.page(&by_year_url, &format!("{name}_year"))?;
            self.papers(person, &profile::parse(&doc).rows, person.recent_size)
        } else {
            Vec::new()
        };

        let mut records = PersonRecords { cited, recent, by_year_url: Some(by_year_url) };

        let family = person.identity.family();
        let mut slots: Vec<&mut Paper> =
            records.cited.iter_mut().chain(records.recent.iter_mut()).collect();
        slots.shuffle(&mut rand::thread_rng());
        for paper in slots {
            if let Some(details) = self.details(paper, family) {
                apply_details(paper, &details, roster);
            }
        }

        Ok(records)
    }
}

/// Copy byline and venue onto `paper`, linking every author the roster knows.
/// Snippet names are abbreviated, so linked ones show the roster's full name.
pub fn apply_details(paper: &mut Paper, details: &PaperDetails, roster: &Roster) {
    paper.byline = details.byline.clone();
    paper.venue = details.venue.clone();
    paper.authors = details
        .authors
        .iter()
        .map(|raw| match roster.resolve_coauthor(raw) {
            Some(id) => {
                let shown = match details.byline_source {
                    Some(BylineSource::ScholarArticles) => id.name.as_str(),
                    _ => raw.as_str(),
                };
                Author::linked(shown, id.clone())
            }
            None => Author::unlinked(raw),
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Identity;

    fn roster() -> Roster {
        Roster::from_entries(vec![
            Identity::new("Michael L. Nelson", "http://cs/mln", "http://gs/mln"),
            Identity::new("Michele C. Weigle", "http://cs/mcw", "http://gs/mcw"),
        ])
    }

    #[test]
    fn snippet_authors_show_full_names_when_linked() {
        let mut p = Paper::new("T", "u", 2015, 3);
        let details = PaperDetails {
            byline: s!("SM Alam, ML Nelson, MC Weigle"),
            authors: vec![s!("SM Alam"), s!("ML Nelson"), s!("MC Weigle")],
            byline_source: Some(BylineSource::ScholarArticles),
            venue: Some(s!("JCDL")),
        };
        apply_details(&mut p, &details, &roster());

        let shown: Vec<&str> = p.authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(shown, ["SM Alam", "Michael L. Nelson", "Michele C. Weigle"]);
        assert!(p.authors[0].identity.is_none());
        assert_eq!(p.authors[1].identity.as_ref().unwrap().profile_url, "http://cs/mln");
        assert_eq!(p.venue.as_deref(), Some("JCDL"));
        assert_eq!(p.byline, "SM Alam, ML Nelson, MC Weigle");
    }

    #[test]
    fn authors_field_names_are_kept_as_written() {
        let mut p = Paper::new("T", "u", 2015, 3);
        let details = PaperDetails {
            byline: s!("Michael Nelson, Somebody Else"),
            authors: vec![s!("Michael Nelson"), s!("Somebody Else")],
            byline_source: Some(BylineSource::AuthorsField),
            venue: None,
        };
        apply_details(&mut p, &details, &roster());
        assert_eq!(p.authors[0].name, "Michael Nelson");
        assert!(p.authors[0].identity.is_some());
        assert!(p.authors[1].identity.is_none());
    }
}
