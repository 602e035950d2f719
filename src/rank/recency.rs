// src/rank/recency.rs
//
// Most-recent allocation. Sources only date papers by year, so "most recent" is
// built year by year, newest first, in passes over the group:
//
//  - people are visited busiest-first for the year being filled;
//  - each visit looks at the person's first not-yet-included paper of that year
//    and admits it unless the result already credits them with `cap` papers of
//    that year;
//  - `cap` grows after every pass;
//  - once `people.len()` passes have added nothing, move to the previous year
//    and reset `cap`;
//  - give up once the year leaves the lookback window.
//
// Crediting is a loose byline check (both name tokens appear in the byline text),
// so coauthored papers count against everyone named on them.

use tracing::{debug, trace};

use crate::config::consts::{INITIAL_PER_PERSON_CAP, LOOKBACK_YEARS, PER_PERSON_CAP_STEP};
use crate::model::{Paper, Person, SeenTitles};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearAllocator {
    /// Oldest year considered is `start_year - lookback_years`.
    pub lookback_years: i32,
    pub initial_cap: usize,
    pub cap_step: usize,
}

impl Default for YearAllocator {
    fn default() -> Self {
        Self {
            lookback_years: LOOKBACK_YEARS,
            initial_cap: INITIAL_PER_PERSON_CAP,
            cap_step: PER_PERSON_CAP_STEP,
        }
    }
}

pub fn allocate_by_year(people: &[Person], target_size: usize, start_year: i32) -> Vec<&Paper> {
    YearAllocator::default().allocate(people, target_size, start_year)
}

impl YearAllocator {
    pub fn allocate<'a>(
        &self,
        people: &'a [Person],
        target_size: usize,
        start_year: i32,
    ) -> Vec<&'a Paper> {
        let mut result: Vec<&Paper> = Vec::with_capacity(target_size);
        if target_size == 0 || people.is_empty() {
            return result;
        }

        let oldest_year = start_year - self.lookback_years;
        let mut seen = SeenTitles::default();
        let mut current_year = start_year;
        let mut per_person_cap = self.initial_cap;
        let mut stall_count = 0usize;

        loop {
            let order = visiting_order(people, current_year, &seen);
            let mut added = false;

            for &ix in &order {
                if result.len() >= target_size {
                    break;
                }
                let person = &people[ix];
                let Some(paper) = first_available(person, current_year, &seen) else {
                    continue;
                };
                let credited = credited_in_year(&result, person, current_year);
                if credited < per_person_cap {
                    trace!(person = person.name(), year = current_year, title = %paper.title, "admit");
                    seen.insert(paper);
                    result.push(paper);
                    added = true;
                }
            }

            per_person_cap += self.cap_step;
            if result.len() >= target_size {
                break;
            }

            if !added {
                stall_count += 1;
                if stall_count == people.len() {
                    current_year -= 1;
                    per_person_cap = self.initial_cap;
                    stall_count = 0;
                    debug!(year = current_year, ranked = result.len(), "moving to previous year");
                }
            }

            if current_year < oldest_year {
                debug!(ranked = result.len(), target_size, "lookback window exhausted");
                break;
            }
        }

        result
    }
}

/// Indices of `people`, most still-available papers in `year` first.
/// Stable: equal counts keep group order.
fn visiting_order(people: &[Person], year: i32, seen: &SeenTitles) -> Vec<usize> {
    let counts: Vec<usize> = people
        .iter()
        .map(|p| {
            p.recent
                .iter()
                .filter(|paper| paper.year == year && !seen.contains(paper))
                .count()
        })
        .collect();

    let mut order: Vec<usize> = (0..people.len()).collect();
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
    order
}

fn first_available<'a>(person: &'a Person, year: i32, seen: &SeenTitles) -> Option<&'a Paper> {
    person
        .recent
        .iter()
        .find(|paper| paper.year == year && !seen.contains(paper))
}

fn credited_in_year(result: &[&Paper], person: &Person, year: i32) -> usize {
    let given = person.identity.given();
    let family = person.identity.family();
    result
        .iter()
        .filter(|p| p.year == year && p.credits(given, family))
        .count()
}
