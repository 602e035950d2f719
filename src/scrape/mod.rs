// src/scrape/mod.rs
//! Record retrieval. A `RecordSource` turns one person into their two ranked
//! lists; `collect` drives a source over every person of a subject.

mod fetch;
mod records;
mod scholar;

pub use fetch::{Fetcher, PageCache};
pub use records::{RecordsEntry, RecordsFile, RecordsFileSource};
pub use scholar::ScholarSource;

use rand::seq::SliceRandom;
use tracing::info;

use crate::error::Result;
use crate::model::{Person, PersonRecords};
use crate::progress::Progress;
use crate::roster::Roster;
use crate::subject::Subject;

pub trait RecordSource {
    /// Both lists for `person`, honoring their list sizes, year cutoff and
    /// exclusion keywords. `roster` links coauthors.
    fn fetch(&mut self, person: &Person, roster: &Roster) -> Result<PersonRecords>;
}

/// Fill every person of `subject` with records from `source`, visiting people
/// in random order. The first failure aborts the collection.
pub fn collect(
    subject: &mut Subject,
    source: &mut dyn RecordSource,
    roster: &Roster,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<()> {
    let people = subject.people_mut();

    let mut order: Vec<usize> = (0..people.len()).collect();
    order.shuffle(&mut rand::thread_rng());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(order.len());
    }

    for i in order {
        let person = &mut people[i];
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}", person.name()));
        }
        let records = match source.fetch(person, roster) {
            Ok(r) => r,
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Failed: {} ({e})", person.name()));
                    p.finish();
                }
                return Err(e);
            }
        };
        info!(
            person = person.name(),
            cited = records.cited.len(),
            recent = records.recent.len(),
            "records in"
        );
        person.set_records(records);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(person.name());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Identity, Paper};
    use crate::subject::Group;

    struct Canned;

    impl RecordSource for Canned {
        fn fetch(&mut self, person: &Person, _roster: &Roster) -> Result<PersonRecords> {
            if person.name() == "Nobody Here" {
                return Err(Error::MissingRecords(s!(person.name())));
            }
            let p = Paper::new(&format!("{} paper", person.name()), "u", 2020, 1);
            Ok(PersonRecords { cited: vec![p.clone()], recent: vec![p], by_year_url: None })
        }
    }

    #[derive(Default)]
    struct Counting {
        begun: usize,
        done: Vec<String>,
        finished: bool,
    }

    impl Progress for Counting {
        fn begin(&mut self, total: usize) { self.begun = total; }
        fn item_done(&mut self, name: &str) { self.done.push(s!(name)); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn group(names: &[&str]) -> Subject {
        Subject::Group(Group {
            name: s!("Lab"),
            url: s!("http://lab"),
            people: names.iter().map(|n| Person::new(Identity::new(n, "", ""))).collect(),
        })
    }

    #[test]
    fn fills_every_person() {
        let mut subject = group(&["Ann Lee", "Bob Ray", "Cy Young"]);
        let mut progress = Counting::default();
        collect(&mut subject, &mut Canned, &Roster::default(), Some(&mut progress)).unwrap();

        for person in subject.people() {
            assert_eq!(person.cited[0].title, format!("{} paper", person.name()));
        }
        assert_eq!(progress.begun, 3);
        assert_eq!(progress.done.len(), 3);
        assert!(progress.finished);
    }

    #[test]
    fn first_failure_aborts() {
        let mut subject = group(&["Nobody Here"]);
        let err = collect(&mut subject, &mut Canned, &Roster::default(), None).unwrap_err();
        assert!(matches!(err, Error::MissingRecords(_)));
    }
}
