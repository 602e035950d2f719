// src/rank/citations.rs
//
// Most-cited merge. Runs at most `target_size` rounds. While the result is empty a
// round takes the top pick: the highest count over every person's cited list. After
// that a round takes the next pick: the highest count inside the band
// [best seen so far this round, count accepted last round], skipping titles already
// in the result. A round that finds nothing means every list is exhausted.

use tracing::debug;

use crate::model::{Paper, Person, SeenTitles};

pub fn merge_by_citations(people: &[Person], target_size: usize) -> Vec<&Paper> {
    let mut ranked: Vec<&Paper> = Vec::with_capacity(target_size);
    let mut seen = SeenTitles::default();

    for round in 0..target_size {
        let pick = match ranked.last() {
            None => top_pick(people),
            Some(prev) => next_pick(people, prev.citations, &seen),
        };

        let Some(paper) = pick else {
            debug!(round, ranked = ranked.len(), "citation lists exhausted");
            break;
        };

        seen.insert(paper);
        ranked.push(paper);
    }

    ranked
}

/// Person order first, then list order. On equal counts the last one wins.
fn candidates(people: &[Person]) -> impl Iterator<Item = &Paper> {
    people.iter().flat_map(|p| p.cited.iter())
}

fn top_pick(people: &[Person]) -> Option<&Paper> {
    let mut top: Option<&Paper> = None;
    for paper in candidates(people) {
        match top {
            Some(t) if paper.citations < t.citations => {}
            _ => top = Some(paper),
        }
    }
    top
}

fn next_pick<'a>(people: &'a [Person], ceiling: u32, seen: &SeenTitles) -> Option<&'a Paper> {
    let mut floor = 0u32;
    let mut next: Option<&Paper> = None;
    for paper in candidates(people) {
        if paper.citations < floor || paper.citations > ceiling || seen.contains(paper) {
            continue;
        }
        // Equal counts go to the later candidate.
        floor = paper.citations;
        next = Some(paper);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Identity;

    fn person(name: &str, papers: &[(&str, u32)]) -> Person {
        let mut p = Person::new(Identity::new(name, "", ""));
        p.cited = papers
            .iter()
            .map(|(t, c)| Paper::new(t, &format!("u/{t}"), 2010, *c))
            .collect();
        p
    }

    fn titles(ranked: &[&Paper]) -> Vec<String> {
        ranked.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn merges_two_people_by_count() {
        let people = vec![
            person("John A. Smith", &[("X", 50), ("Y", 10)]),
            person("Jane B. Doe", &[("Z", 30)]),
        ];
        let ranked = merge_by_citations(&people, 2);
        assert_eq!(titles(&ranked), ["X", "Z"]);
        assert_eq!(ranked[0].citations, 50);
        assert_eq!(ranked[1].citations, 30);
    }

    #[test]
    fn short_input_gives_short_result() {
        let people = vec![
            person("A", &[("X", 5)]),
            person("B", &[]),
        ];
        let ranked = merge_by_citations(&people, 10);
        assert_eq!(titles(&ranked), ["X"]);
        assert!(merge_by_citations(&[], 3).is_empty());
        assert!(merge_by_citations(&people, 0).is_empty());
    }

    #[test]
    fn coauthored_paper_appears_once() {
        let people = vec![
            person("A", &[("Shared Work", 40), ("Solo A", 12)]),
            person("B", &[("shared work", 40), ("Solo B", 20)]),
        ];
        let ranked = merge_by_citations(&people, 5);
        assert_eq!(titles(&ranked), ["shared work", "Solo B", "Solo A"]);
    }

    #[test]
    fn duplicate_with_higher_count_wins_the_slot() {
        let people = vec![
            person("A", &[("Paper", 15)]),
            person("B", &[("PAPER", 25), ("Other", 20)]),
        ];
        let ranked = merge_by_citations(&people, 3);
        assert_eq!(titles(&ranked), ["PAPER", "Other"]);
    }

    #[test]
    fn ties_go_to_the_later_candidate() {
        let people = vec![
            person("A", &[("A1", 9), ("A2", 3)]),
            person("B", &[("B1", 9), ("B2", 3)]),
        ];
        let ranked = merge_by_citations(&people, 4);
        assert_eq!(titles(&ranked), ["B1", "A1", "B2", "A2"]);
    }

    #[test]
    fn target_cutting_through_a_tie_keeps_the_later_paper() {
        let people = vec![
            person("A", &[("A1", 9), ("A2", 3)]),
            person("B", &[("B1", 9), ("B2", 3)]),
        ];
        assert_eq!(titles(&merge_by_citations(&people, 1)), ["B1"]);
        assert_eq!(titles(&merge_by_citations(&people, 3)), ["B1", "A1", "B2"]);
    }

    #[test]
    fn zero_citation_papers_still_fill_the_list() {
        let people = vec![person("A", &[("A1", 2), ("A2", 0), ("A3", 0)])];
        let ranked = merge_by_citations(&people, 3);
        assert_eq!(titles(&ranked), ["A1", "A3", "A2"]);
    }
}
