// src/report/json.rs
use serde::Serialize;

use crate::aggregate::Rankings;
use crate::error::Result;
use crate::model::Paper;
use crate::subject::Subject;

#[derive(Serialize)]
struct JsonReport<'a> {
    subject: &'a str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_cited: Option<&'a [Paper]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_recent: Option<&'a [Paper]>,
}

pub fn render(subject: &Subject, rankings: &Rankings, sections: super::Sections) -> Result<String> {
    let report = JsonReport {
        subject: subject.name(),
        url: subject.url(),
        most_cited: sections.cited.then_some(rankings.cited.as_slice()),
        most_recent: sections.recent.then_some(rankings.recent.as_slice()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identity, Person};
    use crate::report::Sections;

    #[test]
    fn disabled_sections_are_left_out() {
        let subject = Subject::Single(Person::new(Identity::new("Jane Doe", "http://cs/j", "http://gs/j")));
        let rankings = Rankings { cited: vec![Paper::new("T", "u", 2020, 3)], recent: vec![] };
        let text = render(&subject, &rankings, Sections { cited: true, recent: false }).unwrap();

        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["subject"], "Jane Doe");
        assert_eq!(v["url"], "http://cs/j");
        assert_eq!(v["most_cited"][0]["citations"], 3);
        assert!(v.get("most_recent").is_none());
    }
}
