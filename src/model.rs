// src/model.rs
//
// Value types shared by the roster, the rankers and the collaborators around them.
// Papers are produced once by a record source and never mutated afterwards; rankers
// only borrow them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_FIRST_YEAR, DEFAULT_MAX_HITS};

/// A roster-registered person: full name plus the two pages we link to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    /// Department homepage.
    pub profile_url: String,
    /// Scholar profile page.
    pub source_url: String,
}

impl Identity {
    pub fn new(name: &str, profile_url: &str, source_url: &str) -> Self {
        Self {
            name: normalize_name(name),
            profile_url: s!(profile_url.trim()),
            source_url: s!(source_url.trim()),
        }
    }

    pub fn given(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    pub fn family(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }

    /// First letter of the second token, present only for names with 3+ tokens.
    pub fn middle_initial(&self) -> Option<char> {
        let mut tokens = self.name.split_whitespace();
        let _given = tokens.next()?;
        let middle = tokens.next()?;
        tokens.next()?;
        middle.chars().next()
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One name in a paper's byline. `identity` is set when the name resolved
/// against the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

impl Author {
    pub fn unlinked(name: &str) -> Self {
        Self { name: s!(name), identity: None }
    }

    pub fn linked(name: &str, identity: Identity) -> Self {
        Self { name: s!(name), identity: Some(identity) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub url: String,
    pub year: i32,
    pub citations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
    /// Byline text exactly as the source printed it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub byline: String,
}

impl Paper {
    pub fn new(title: &str, url: &str, year: i32, citations: u32) -> Self {
        Self {
            title: s!(title),
            url: s!(url),
            year,
            citations,
            venue: None,
            authors: Vec::new(),
            byline: s!(),
        }
    }

    pub fn with_byline(mut self, byline: &str) -> Self {
        self.byline = s!(byline);
        self
    }

    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(s!(venue));
        self
    }

    /// Dedup key: the title, case-folded. URL and year play no part.
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }

    pub fn is_duplicate_of(&self, other: &Paper) -> bool {
        self.title_key() == other.title_key()
    }

    /// Loose author credit: both name tokens appear somewhere in the byline text.
    pub fn credits(&self, given: &str, family: &str) -> bool {
        self.byline.contains(family) && self.byline.contains(given)
    }
}

pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Titles already admitted into a result list.
#[derive(Debug, Default)]
pub struct SeenTitles(HashSet<String>);

impl SeenTitles {
    pub fn contains(&self, paper: &Paper) -> bool {
        self.0.contains(&paper.title_key())
    }

    /// Returns `false` if an equal title was already present.
    pub fn insert(&mut self, paper: &Paper) -> bool {
        self.0.insert(paper.title_key())
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// The two pre-sorted lists a record source delivers for one person.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecords {
    /// Descending by citation count.
    #[serde(default)]
    pub cited: Vec<Paper>,
    /// Descending by year.
    #[serde(default)]
    pub recent: Vec<Paper>,
    /// Source page listing the person's papers newest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_year_url: Option<String>,
}

/// A participant in a ranking run: the subject itself or one group member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub identity: Identity,
    pub cited_size: usize,
    pub recent_size: usize,
    pub first_year: i32,
    pub exclusions: Vec<String>,
    pub cited: Vec<Paper>,
    pub recent: Vec<Paper>,
    pub by_year_url: Option<String>,
}

impl Person {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            cited_size: DEFAULT_MAX_HITS,
            recent_size: DEFAULT_MAX_HITS,
            first_year: DEFAULT_FIRST_YEAR,
            exclusions: Vec::new(),
            cited: Vec::new(),
            recent: Vec::new(),
            by_year_url: None,
        }
    }

    pub fn with_sizes(mut self, cited: usize, recent: usize) -> Self {
        self.cited_size = cited;
        self.recent_size = recent;
        self
    }

    pub fn with_first_year(mut self, year: i32) -> Self {
        self.first_year = year;
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_records(mut self, records: PersonRecords) -> Self {
        self.set_records(records);
        self
    }

    pub fn set_records(&mut self, records: PersonRecords) {
        self.cited = records.cited;
        self.recent = records.recent;
        self.by_year_url = records.by_year_url;
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// True if the title mentions any exclusion keyword (case-insensitive).
    pub fn excludes(&self, title: &str) -> bool {
        let lc = title.to_lowercase();
        self.exclusions
            .iter()
            .any(|k| !k.is_empty() && lc.contains(&k.to_lowercase()))
    }

    /// Whether a paper passes this person's year cutoff and keyword exclusions.
    pub fn accepts(&self, title: &str, year: i32) -> bool {
        year >= self.first_year && !self.excludes(title)
    }
}
