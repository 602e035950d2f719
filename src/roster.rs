// src/roster.rs
//
// Identity registry: the trusted list of people we can link to, and the
// name resolution used for both subjects and coauthors.
//
// Raw names come in two shapes:
// - abbreviated bylines from the "Scholar articles" snippets ("JA Smith", "J. Smith"),
//   recognised by a given-name token with no lower-case letters;
// - anything else, treated as a full name ("John Smith", "john a smith").
// Only the first (given) and last (family) tokens take part in matching.

use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::Identity;

/// Who is being looked up. A missing subject is fatal; a missing coauthor is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    Primary,
    Coauthor,
}

/// A raw name, classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameQuery {
    Abbreviated {
        given_initial: char,
        middle_initial: Option<char>,
        family: String,
    },
    Full {
        given: String,
        family: String,
    },
}

impl NameQuery {
    /// `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let given = tokens.next()?;
        let family = tokens.last().unwrap_or(given);

        if given.chars().all(|c| !c.is_lowercase()) {
            let mut letters = given.chars().filter(|c| c.is_alphabetic());
            let given_initial = letters.next().or_else(|| given.chars().next())?;
            Some(NameQuery::Abbreviated {
                given_initial,
                middle_initial: letters.next(),
                family: s!(family),
            })
        } else {
            Some(NameQuery::Full { given: s!(given), family: s!(family) })
        }
    }

    fn matches(&self, id: &Identity) -> bool {
        match self {
            NameQuery::Abbreviated { given_initial, middle_initial, family } => {
                matches_abbreviated(id, *given_initial, *middle_initial, family)
            }
            NameQuery::Full { given, family } => matches_full(id, given, family),
        }
    }
}

fn matches_abbreviated(
    id: &Identity,
    given_initial: char,
    middle_initial: Option<char>,
    family: &str,
) -> bool {
    let id_family = id.family();
    // Case-sensitive, except that an all-caps byline token may match a normally-cased name.
    let family_ok = id_family.contains(family)
        || (is_all_caps(family) && id_family.to_uppercase().contains(family));
    if !family_ok || id.name.chars().next() != Some(given_initial) {
        return false;
    }
    match (middle_initial, id.middle_initial()) {
        (Some(raw), Some(known)) => raw == known,
        _ => true,
    }
}

fn matches_full(id: &Identity, given: &str, family: &str) -> bool {
    let name = id.name.to_lowercase();
    name.contains(&family.to_lowercase()) && name.contains(&given.to_lowercase())
}

fn is_all_caps(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: Vec<Identity>,
    /// Where the entries came from; used in error messages.
    source: String,
}

impl Roster {
    pub fn from_entries(entries: Vec<Identity>) -> Self {
        Self { entries, source: s!("roster") }
    }

    /// One entry per line: `Full Name, profile_url, source_url`.
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str, source: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 3 {
                return Err(Error::RosterLine {
                    line: i + 1,
                    reason: format!("expected 3 fields, found {}", fields.len()),
                });
            }
            if fields[0].is_empty() {
                return Err(Error::RosterLine { line: i + 1, reason: s!("empty name") });
            }
            entries.push(Identity::new(fields[0], fields[1], fields[2]));
        }
        debug!(entries = entries.len(), source, "roster parsed");
        Ok(Self { entries, source: s!(source) })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Identity> { self.entries.iter() }

    /// Exact lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&Identity> {
        self.entries.iter().find(|id| id.name == name)
    }

    /// First entry (in roster order) matching `raw`.
    pub fn find(&self, raw: &str) -> Option<&Identity> {
        let query = NameQuery::parse(raw)?;
        self.entries.iter().find(|id| query.matches(id))
    }

    /// `Ok(None)` only for coauthor lookups; a primary miss is an error.
    pub fn resolve(&self, raw: &str, lookup: Lookup) -> Result<Option<&Identity>> {
        match (self.find(raw), lookup) {
            (Some(id), _) => Ok(Some(id)),
            (None, Lookup::Coauthor) => Ok(None),
            (None, Lookup::Primary) => {
                warn!(name = raw.trim(), roster = %self.source, "subject not in roster");
                Err(self.unknown(raw))
            }
        }
    }

    pub fn resolve_primary(&self, raw: &str) -> Result<&Identity> {
        self.resolve(raw, Lookup::Primary)?.ok_or_else(|| self.unknown(raw))
    }

    pub fn resolve_coauthor(&self, raw: &str) -> Option<&Identity> {
        self.resolve(raw, Lookup::Coauthor).ok().flatten()
    }

    fn unknown(&self, raw: &str) -> Error {
        Error::UnknownMember { name: s!(raw.trim()), roster: self.source.clone() }
    }
}
