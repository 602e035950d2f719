// src/group.rs
//
// Group files. First line is the header:
//
//   Web Science Group, URL:http://ws-dl.cs.odu.edu, Keyword Exclusions:Erratum, Preface
//
// Both the URL and the exclusion list are optional. Every following non-blank line
// is one member's raw name, resolved later against the roster.

use std::{fs, path::Path};

use tracing::debug;

use crate::error::{Error, Result};

const URL_TAG: &str = ", URL:";
const EXCLUSIONS_TAG: &str = ", Keyword Exclusions:";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupFile {
    pub name: String,
    pub url: Option<String>,
    pub exclusions: Vec<String>,
    /// Raw member names, file order.
    pub members: Vec<String>,
}

impl GroupFile {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines
            .by_ref()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .ok_or_else(|| Error::GroupFile { path: path.to_path_buf(), reason: s!("empty file") })?;

        let (head, exclusions) = match header.split_once(EXCLUSIONS_TAG) {
            Some((head, list)) => (head, parse_keywords(list)),
            None => (header, Vec::new()),
        };
        let (name, url) = match head.split_once(URL_TAG) {
            Some((name, url)) => (name.trim(), Some(s!(url.trim())).filter(|u| !u.is_empty())),
            None => (head.trim(), None),
        };
        if name.is_empty() {
            return Err(Error::GroupFile { path: path.to_path_buf(), reason: s!("missing group name") });
        }

        let members: Vec<String> = lines
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| s!(l))
            .collect();

        debug!(group = name, members = members.len(), exclusions = exclusions.len(), "group file parsed");
        Ok(Self { name: s!(name), url, exclusions, members })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }
}

fn parse_keywords(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| s!(k))
        .collect()
}
