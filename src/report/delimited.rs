// src/report/delimited.rs
use std::io::{self, Write};

use crate::model::Paper;

pub const HEADERS: &[&str] = &["List", "Citations", "Year", "Title", "Venue", "Authors", "URL"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One row per paper; `list` names the ranking it belongs to.
pub fn paper_rows(list: &str, papers: &[Paper]) -> Vec<Vec<String>> {
    papers
        .iter()
        .map(|p| {
            let authors = p.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ");
            vec![
                s!(list),
                p.citations.to_string(),
                p.year.to_string(),
                p.title.clone(),
                p.venue.clone().unwrap_or_default(),
                authors,
                p.url.clone(),
            ]
        })
        .collect()
}

pub fn to_export_string(rows: &[Vec<String>], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let h: Vec<String> = HEADERS.iter().map(|s| s!(*s)).collect();
        let _ = write_row(&mut buf, &h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("plain"), s!("a,b"), s!("say \"hi\"")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn csv_with_headers() {
        let mut p = Paper::new("Graphs, Again", "http://gs/1", 2019, 7).with_venue("KDD");
        p.authors = vec![Author::unlinked("A One"), Author::unlinked("B Two")];
        let out = to_export_string(&paper_rows("cited", &[p]), true, ',');
        assert_eq!(
            out,
            "List,Citations,Year,Title,Venue,Authors,URL\n\
             cited,7,2019,\"Graphs, Again\",KDD,\"A One, B Two\",http://gs/1\n"
        );
    }

    #[test]
    fn tsv_without_headers() {
        let p = Paper::new("Graphs, Again", "http://gs/1", 2019, 7);
        let out = to_export_string(&paper_rows("recent", &[p]), false, '\t');
        assert_eq!(out, "recent\t7\t2019\tGraphs, Again\t\t\thttp://gs/1\n");
    }
}
