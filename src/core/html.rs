// src/core/html.rs
//
// Tolerant, allocation-light HTML scanning. Tag and attribute names match
// case-insensitively; class matching is by whole token ("gsc_a_a" does not
// match "gsc_a_at").

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<tag ...>...</tag>` element from `from`, honouring nesting of the same tag.
/// An unclosed element runs to the end of input.
pub fn next_element_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    Scanner::new(s, tag).next_from(from)
}

/// Element scanner over one document; lower-cases the input once.
struct Scanner<'a> {
    s: &'a str,
    lc: String,
    open: String,
    close: String,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str, tag: &str) -> Self {
        let tag = to_lower(tag);
        Self { s, lc: to_lower(s), open: join!("<", &tag), close: join!("</", &tag) }
    }

    fn next_from(&self, from: usize) -> Option<(usize, usize)> {
        let (s, lc) = (self.s, self.lc.as_str());
        let start = find_open_tag(lc, &self.open, from)?;
        let mut pos = s[start..].find('>')? + start + 1;
        let mut depth = 1usize;

        while depth > 0 {
            let next_open = find_open_tag(lc, &self.open, pos);
            let Some(next_close) = lc.get(pos..).and_then(|r| r.find(&self.close)).map(|i| i + pos) else {
                return Some((start, s.len()));
            };
            match next_open {
                Some(o) if o < next_close => {
                    depth += 1;
                    pos = o + self.open.len();
                }
                _ => {
                    depth -= 1;
                    pos = s[next_close..].find('>').map_or(s.len(), |i| next_close + i + 1);
                }
            }
        }
        Some((start, pos))
    }
}

/// An open tag must be followed by whitespace, `>` or `/` (so `<a` skips `<abbr`).
fn find_open_tag(lc: &str, open: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let i = lc.get(at..)?.find(open)? + at;
        let after = lc[i + open.len()..].chars().next();
        if matches!(after, Some(c) if c.is_whitespace() || c == '>' || c == '/') {
            return Some(i);
        }
        at = i + open.len();
    }
}

/// The opening tag of a block, `<` through `>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Raw value of attribute `name` on an opening tag. Handles double, single and no quotes.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(tag);
    let needle = to_lower(name);
    let mut at = 0;
    while let Some(rel) = lc[at..].find(&needle) {
        let i = at + rel;
        at = i + needle.len();
        let before_ok = lc[..i].chars().last().is_some_and(char::is_whitespace);
        let rest = lc[at..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let value_start = tag.len() - rest.len() + 1;
        let value = tag[value_start..].trim_start();
        let offset = tag.len() - value.len();
        return Some(match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let end = value[1..].find(q).map_or(value.len(), |e| e + 1);
                &tag[offset + 1..offset + end]
            }
            _ => {
                let end = value
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(value.len());
                &tag[offset..offset + end]
            }
        });
    }
    None
}

pub fn has_class(tag: &str, class: &str) -> bool {
    attr(tag, "class").is_some_and(|v| v.split_whitespace().any(|c| c == class))
}

/// Every `<tag class="... class ...">` element in document order, nesting-aware.
pub fn elements_with_class<'a>(s: &'a str, tag: &str, class: &str) -> Vec<&'a str> {
    let scanner = Scanner::new(s, tag);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = scanner.next_from(pos) {
        let block = &s[start..end];
        if has_class(open_tag(block), class) {
            out.push(block);
            pos = end;
        } else {
            // Step inside: the wanted element may be nested in this one.
            pos = start + open_tag(block).len();
        }
    }
    out
}

/// Direct `tag` children of an element block, in order.
pub fn child_elements<'a>(block: &'a str, tag: &str) -> Vec<&'a str> {
    let scanner = Scanner::new(block, tag);
    let mut out = Vec::new();
    let mut pos = open_tag(block).len();
    while let Some((start, end)) = scanner.next_from(pos) {
        out.push(&block[start..end]);
        pos = end;
    }
    out
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Visible text of a block: tags dropped, entities decoded, whitespace collapsed.
pub fn text_of(block: &str) -> String {
    strip_tags(super::sanitize::normalize_entities(&inner_after_open_tag(block)))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_and_classes() {
        let tag = r#"<a href="/citations?a=1&amp;b=2" class="gsc_a_at">"#;
        assert_eq!(attr(tag, "href"), Some("/citations?a=1&amp;b=2"));
        assert!(has_class(tag, "gsc_a_at"));
        assert!(!has_class(tag, "gsc_a_a"));

        let bare = "<A HREF=/x CLASS='gsc_a_a gs_ibl'>";
        assert_eq!(attr(bare, "href"), Some("/x"));
        assert!(has_class(bare, "gsc_a_a"));
        assert_eq!(attr("<a data-href=\"no\">", "href"), None);
    }

    #[test]
    fn nested_divs_close_at_the_right_tag() {
        let doc = r#"<div class="outer"><div>one</div><div>two<div>deep</div></div></div><div class="next">x</div>"#;
        let (s, e) = next_element_ci(doc, "div", 0).unwrap();
        assert!(doc[s..e].ends_with("</div></div></div>"));
        let kids = child_elements(&doc[s..e], "div");
        assert_eq!(kids.len(), 2);
        assert_eq!(text_of(kids[1]), "twodeep");
    }

    #[test]
    fn finds_classed_elements_inside_others() {
        let doc = r#"<div id="w"><div class="gs_scl"><div class="gsc_field">Authors</div></div>
                     <div class="gs_scl"><div class="gsc_field">Journal</div></div></div>"#;
        let rows = elements_with_class(doc, "div", "gs_scl");
        assert_eq!(rows.len(), 2);
        let fields: Vec<String> = rows
            .iter()
            .map(|r| text_of(elements_with_class(r, "div", "gsc_field")[0]))
            .collect();
        assert_eq!(fields, ["Authors", "Journal"]);
    }

    #[test]
    fn divider_tag_is_not_a_div() {
        let doc = "<divider>no</divider><div class=\"a\">yes</div>";
        let (s, e) = next_element_ci(doc, "div", 0).unwrap();
        assert_eq!(text_of(&doc[s..e]), "yes");
    }
}
