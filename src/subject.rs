// src/subject.rs
//
// What a run is about: one roster member, or a group read from a group file.
// Building a subject resolves every name as a primary lookup, so an unknown
// name fails here, before anything is fetched.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::options::RankOptions;
use crate::error::Result;
use crate::group::GroupFile;
use crate::model::Person;
use crate::roster::Roster;

/// How the subject was named on the command line (or in the GUI).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubjectArg {
    GroupFile(PathBuf),
    Name(String),
}

impl SubjectArg {
    /// A word naming an existing file selects a group file; otherwise all words
    /// together are one person's name.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Option<Self> {
        if let Some(file) = words.iter().map(|w| w.as_ref()).find(|w| Path::new(w).is_file()) {
            return Some(SubjectArg::GroupFile(PathBuf::from(file)));
        }
        let name = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        let name = name.trim();
        if name.is_empty() { None } else { Some(SubjectArg::Name(s!(name))) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub url: String,
    pub people: Vec<Person>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    Single(Person),
    Group(Group),
}

impl Subject {
    pub fn resolve(arg: &SubjectArg, roster: &Roster, rank: &RankOptions, homepage: &str) -> Result<Self> {
        match arg {
            SubjectArg::Name(name) => Self::single(roster, name, rank),
            SubjectArg::GroupFile(path) => {
                let file = GroupFile::load(path)?;
                Self::group(roster, &file, rank, homepage)
            }
        }
    }

    pub fn single(roster: &Roster, raw: &str, rank: &RankOptions) -> Result<Self> {
        let identity = roster.resolve_primary(raw)?.clone();
        info!(subject = %identity.name, "single subject");
        let person = Person::new(identity)
            .with_sizes(rank.cited_size(), rank.recent_size())
            .with_first_year(rank.first_year);
        Ok(Subject::Single(person))
    }

    /// Members fetch `member_list_size` papers per enabled ranking so the group
    /// rankers have more to choose from than the final list length.
    pub fn group(roster: &Roster, file: &GroupFile, rank: &RankOptions, homepage: &str) -> Result<Self> {
        let size = |enabled: bool| if enabled { rank.member_list_size } else { 0 };
        let people = file
            .members
            .iter()
            .map(|raw| -> Result<Person> {
                let identity = roster.resolve_primary(raw)?.clone();
                Ok(Person::new(identity)
                    .with_sizes(size(rank.by_citations), size(rank.by_year))
                    .with_first_year(rank.first_year)
                    .with_exclusions(file.exclusions.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(group = %file.name, members = people.len(), "group subject");
        Ok(Subject::Group(Group {
            name: file.name.clone(),
            url: file.url.clone().unwrap_or_else(|| s!(homepage)),
            people,
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Subject::Single(p) => p.name(),
            Subject::Group(g) => &g.name,
        }
    }

    /// Heading link: the person's homepage, or the group URL.
    pub fn url(&self) -> &str {
        match self {
            Subject::Single(p) => &p.identity.profile_url,
            Subject::Group(g) => &g.url,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Subject::Group(_))
    }

    pub fn people(&self) -> &[Person] {
        match self {
            Subject::Single(p) => std::slice::from_ref(p),
            Subject::Group(g) => &g.people,
        }
    }

    pub fn people_mut(&mut self) -> &mut [Person] {
        match self {
            Subject::Single(p) => std::slice::from_mut(p),
            Subject::Group(g) => &mut g.people,
        }
    }

    /// Report file stem: the name with spaces as underscores.
    pub fn file_stem(&self) -> String {
        self.name().trim().replace(' ', "_")
    }
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
    fn single_subject_takes_run_sizes() {
        let rank = RankOptions { max: 7, by_year: false, ..RankOptions::default() };
        let s = Subject::single(&roster(), "michael nelson", &rank).unwrap();
        assert!(!s.is_group());
        assert_eq!(s.name(), "Michael L. Nelson");
        assert_eq!(s.url(), "http://cs/mln");
        assert_eq!(s.file_stem(), "Michael_L._Nelson");
        let p = &s.people()[0];
        assert_eq!((p.cited_size, p.recent_size), (7, 0));
    }

    #[test]
    fn group_members_get_member_sizes_and_exclusions() {
        let file = GroupFile {
            name: s!("Web Science"),
            url: None,
            exclusions: vec![s!("Erratum")],
            members: vec![s!("ML Nelson"), s!("Michele Weigle")],
        };
        let s = Subject::group(&roster(), &file, &RankOptions::default(), "http://home").unwrap();
        assert!(s.is_group());
        assert_eq!(s.url(), "http://home");
        assert_eq!(s.people().len(), 2);
        for p in s.people() {
            assert_eq!(p.cited_size, 20);
            assert_eq!(p.recent_size, 20);
            assert_eq!(p.exclusions, ["Erratum"]);
        }
    }

    #[test]
    fn unknown_member_aborts_group() {
        let file = GroupFile {
            name: s!("G"),
            members: vec![s!("Michael Nelson"), s!("Nobody Here")],
            ..GroupFile::default()
        };
        let err = Subject::group(&roster(), &file, &RankOptions::default(), "").unwrap_err();
        assert!(matches!(err, crate::Error::UnknownMember { .. }));
    }

    #[test]
    fn words_select_name_or_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("group.txt");
        std::fs::write(&path, "G\n").unwrap();
        let p = path.to_string_lossy().into_owned();

        assert_eq!(SubjectArg::from_words(&[p.as_str()]), Some(SubjectArg::GroupFile(path.clone())));
        assert_eq!(
            SubjectArg::from_words(&["Michael", "Nelson"]),
            Some(SubjectArg::Name(s!("Michael Nelson")))
        );
        assert_eq!(SubjectArg::from_words::<&str>(&[]), None);
    }
}
