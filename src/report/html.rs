// src/report/html.rs
//
// Report page:
//   <h1> banner lines
//   <h2> subject name, linked to the subject's page
//   <h3> "Most Cited Papers"  + <h4> "Citations Year Title", one <p> per paper
//   <h3> "Most Recent Papers" + <h4> "Year Citations Title", one <p> per paper
// For a single person the <h3> headings link to the Scholar listing they came from.

use std::fmt::Write;

use super::Sections;
use crate::aggregate::Rankings;
use crate::core::sanitize::escape_html;
use crate::model::Paper;
use crate::subject::Subject;

#[derive(Clone, Copy)]
enum Order {
    CitationsFirst,
    YearFirst,
}

pub fn render(subject: &Subject, rankings: &Rankings, sections: Sections, banner: &[String]) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html>\n<body>\n");
    for line in banner {
        let _ = write!(out, "\n<h1>{}</h1>", escape_html(line));
    }
    out.push('\n');

    let _ = write!(
        out,
        "\n<h2><a href=\"{}\">{}</a></h2>",
        escape_html(subject.url()),
        escape_html(subject.name())
    );

    let single = match subject {
        Subject::Single(p) => Some(p),
        Subject::Group(_) => None,
    };

    if sections.cited {
        let link = single.map(|p| p.identity.source_url.as_str());
        heading(&mut out, "Most Cited Papers", link);
        out.push_str("\n<h4>Citations Year Title</h4>");
        for paper in &rankings.cited {
            paper_line(&mut out, paper, Order::CitationsFirst);
        }
    }

    if sections.recent {
        let link = single.and_then(|p| p.by_year_url.as_deref());
        heading(&mut out, "Most Recent Papers", link);
        out.push_str("\n<h4>Year Citations Title</h4>");
        for paper in &rankings.recent {
            paper_line(&mut out, paper, Order::YearFirst);
        }
    }

    out.push_str("\n</body>\n</html>\n");
    out
}

fn heading(out: &mut String, text: &str, link: Option<&str>) {
    let _ = match link {
        Some(url) => write!(out, "\n<h3><a href=\"{}\">{text}</a></h3>", escape_html(url)),
        None => write!(out, "\n<h3>{text}</h3>"),
    };
}

fn paper_line(out: &mut String, paper: &Paper, order: Order) {
    let counts = match order {
        Order::CitationsFirst => format!("{} {}", paper.citations, paper.year),
        Order::YearFirst => format!("{} {}", paper.year, paper.citations),
    };
    let _ = write!(
        out,
        "\n<p>{counts} <a href=\"{}\">{}</a>",
        escape_html(&paper.url),
        escape_html(&paper.title)
    );
    if let Some(venue) = paper.venue.as_deref().filter(|v| !v.is_empty()) {
        let _ = write!(out, "<br>{}", escape_html(venue));
    }
    out.push_str("<br>");
    out.push_str(&author_links(paper));
    out.push_str("</p>");
}

/// Roster members link to their homepage; everyone else is plain text.
fn author_links(paper: &Paper) -> String {
    paper
        .authors
        .iter()
        .map(|a| match &a.identity {
            Some(id) => format!("<a href=\"{}\">{}</a>", escape_html(&id.profile_url), escape_html(&a.name)),
            None => escape_html(&a.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
