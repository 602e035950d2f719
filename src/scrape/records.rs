// src/scrape/records.rs
//
// Records file: already-retrieved lists for a set of people, as JSON.
//   { "people": [ { "name", "by_year_url"?, "cited": [Paper], "recent": [Paper] } ] }
// Lets a run be repeated (or opened in the GUI) without touching the network.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RecordSource;
use crate::error::{Error, Result};
use crate::file::write_file;
use crate::model::{Paper, Person, PersonRecords};
use crate::roster::Roster;
use crate::subject::Subject;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsFile {
    #[serde(default)]
    pub people: Vec<RecordsEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_year_url: Option<String>,
    #[serde(default)]
    pub cited: Vec<Paper>,
    #[serde(default)]
    pub recent: Vec<Paper>,
}

impl RecordsFile {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = Self::parse(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), people = file.people.len(), "records file loaded");
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, &serde_json::to_string_pretty(self)?)
    }

    /// Snapshot of the records currently held by `subject`'s people.
    pub fn from_subject(subject: &Subject) -> Self {
        let people = subject
            .people()
            .iter()
            .map(|p| RecordsEntry {
                name: s!(p.name()),
                by_year_url: p.by_year_url.clone(),
                cited: p.cited.clone(),
                recent: p.recent.clone(),
            })
            .collect();
        Self { people }
    }

    pub fn get(&self, name: &str) -> Option<&RecordsEntry> {
        self.people.iter().find(|e| e.name == name)
    }
}

pub struct RecordsFileSource {
    file: RecordsFile,
}

impl RecordsFileSource {
    pub fn new(file: RecordsFile) -> Self {
        Self { file }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(RecordsFile::load(path)?))
    }
}

impl RecordSource for RecordsFileSource {
    fn fetch(&mut self, person: &Person, _roster: &Roster) -> Result<PersonRecords> {
        let entry = self
            .file
            .get(person.name())
            .ok_or_else(|| Error::MissingRecords(s!(person.name())))?;

        let pick = |papers: &[Paper], size: usize| -> Vec<Paper> {
            papers
                .iter()
                .filter(|p| person.accepts(&p.title, p.year))
                .take(size)
                .cloned()
                .collect()
        };

        Ok(PersonRecords {
            cited: pick(&entry.cited, person.cited_size),
            recent: pick(&entry.recent, person.recent_size),
            by_year_url: entry.by_year_url.clone(),
        })
    }
}
