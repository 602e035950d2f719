// src/aggregate.rs
//
// Orchestration: given a subject whose people already carry their records,
// produce the two output lists. A single person's lists are already ranked by
// the source, so they only get deduplicated and cut to length; a group goes
// through the rankers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::options::RankOptions;
use crate::model::{Paper, SeenTitles};
use crate::rank::{YearAllocator, merge_by_citations};
use crate::subject::Subject;

/// Target sizes and allocator settings for one run. A size of 0 disables that ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankPlan {
    pub cited_size: usize,
    pub recent_size: usize,
    pub start_year: i32,
    pub allocator: YearAllocator,
}

impl RankPlan {
    pub fn from_options(rank: &RankOptions) -> Self {
        Self {
            cited_size: rank.cited_size(),
            recent_size: rank.recent_size(),
            start_year: rank.start_year(),
            allocator: YearAllocator::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rankings {
    /// Most cited, descending by count.
    pub cited: Vec<Paper>,
    /// Most recent, descending by year.
    pub recent: Vec<Paper>,
}

impl Rankings {
    pub fn is_empty(&self) -> bool {
        self.cited.is_empty() && self.recent.is_empty()
    }
}

pub fn aggregate(subject: &Subject, plan: &RankPlan) -> Rankings {
    let rankings = match subject {
        Subject::Single(person) => Rankings {
            cited: dedup_truncate(&person.cited, plan.cited_size),
            recent: dedup_truncate(&person.recent, plan.recent_size),
        },
        Subject::Group(group) => {
            let cited = if plan.cited_size > 0 {
                owned(merge_by_citations(&group.people, plan.cited_size))
            } else {
                Vec::new()
            };
            let recent = if plan.recent_size > 0 {
                owned(plan.allocator.allocate(&group.people, plan.recent_size, plan.start_year))
            } else {
                Vec::new()
            };
            Rankings { cited, recent }
        }
    };

    info!(
        subject = subject.name(),
        cited = rankings.cited.len(),
        recent = rankings.recent.len(),
        "rankings built"
    );
    rankings
}

fn owned(papers: Vec<&Paper>) -> Vec<Paper> {
    papers.into_iter().cloned().collect()
}

/// First occurrence of each title, in list order, at most `size` of them.
fn dedup_truncate(papers: &[Paper], size: usize) -> Vec<Paper> {
    let mut seen = SeenTitles::default();
    papers
        .iter()
        .filter(|p| seen.insert(p))
        .take(size)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identity, Person};
    use crate::subject::Group;

    fn plan(cited: usize, recent: usize) -> RankPlan {
        RankPlan { cited_size: cited, recent_size: recent, start_year: 2020, allocator: YearAllocator::default() }
    }

    fn person(name: &str, cited: &[(&str, u32)], recent: &[(&str, i32)]) -> Person {
        let mut p = Person::new(Identity::new(name, "", ""));
        p.cited = cited.iter().map(|(t, c)| Paper::new(t, "u", 2015, *c)).collect();
        p.recent = recent.iter().map(|(t, y)| Paper::new(t, "u", *y, 0)).collect();
        p
    }

    fn titles(papers: &[Paper]) -> Vec<&str> {
        papers.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn single_person_lists_pass_through() {
        let p = person(
            "Ann Lee",
            &[("A", 9), ("a", 9), ("B", 4), ("C", 1)],
            &[("N", 2020), ("M", 2019)],
        );
        let r = aggregate(&Subject::Single(p), &plan(2, 5));
        assert_eq!(titles(&r.cited), ["A", "B"]);
        assert_eq!(titles(&r.recent), ["N", "M"]);
    }

    #[test]
    fn group_runs_both_rankers() {
        let group = Subject::Group(Group {
            name: s!("G"),
            url: s!("http://g"),
            people: vec![
                person("Ann Lee", &[("X", 50), ("Y", 10)], &[("A1", 2020)]),
                person("Bob Ray", &[("Z", 30)], &[("B1", 2020)]),
            ],
        });
        let r = aggregate(&group, &plan(2, 2));
        assert_eq!(titles(&r.cited), ["X", "Z"]);
        assert_eq!(titles(&r.recent), ["A1", "B1"]);
    }

    #[test]
    fn disabled_ranking_stays_empty() {
        let group = Subject::Group(Group {
            name: s!("G"),
            url: s!(),
            people: vec![person("Ann Lee", &[("X", 5)], &[("A1", 2020)])],
        });
        let r = aggregate(&group, &plan(0, 3));
        assert!(r.cited.is_empty());
        assert_eq!(titles(&r.recent), ["A1"]);

        let r = aggregate(&group, &plan(0, 0));
        assert!(r.is_empty());
    }

    #[test]
    fn plan_follows_options() {
        let rank = RankOptions { max: 4, by_citations: false, start_year: Some(2011), ..RankOptions::default() };
        let plan = RankPlan::from_options(&rank);
        assert_eq!(plan.cited_size, 0);
        assert_eq!(plan.recent_size, 4);
        assert_eq!(plan.start_year, 2011);
    }
}
