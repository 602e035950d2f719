// src/core/sanitize.rs

/// Decode the entities Scholar pages actually use: the named basics plus
/// decimal and hex character references. Unknown entities are left as-is.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find('&') {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        let decoded = rest
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Page-cache file stem: spaces to `_`, `/` spelled out, other path-hostile
/// characters dropped, capped at 200 chars.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in normalize_ws(name).chars() {
        match ch {
            ' ' => out.push('_'),
            '/' => out.push_str("_slash_"),
            '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {}
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    let out: String = out.chars().take(200).collect();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Text for HTML output: markup characters escaped and everything outside
/// ASCII written as a numeric character reference.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if c.is_ascii() => out.push(c),
            c => out.push_str(&format!("&#{};", c as u32)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_common_entities() {
        assert_eq!(normalize_entities("a&nbsp;b &amp; c"), "a b & c");
        assert_eq!(normalize_entities("&#233;t&#xE9;"), "été");
        assert_eq!(normalize_entities("AT&T &bogus; &"), "AT&T &bogus; &");
    }

    #[test]
    fn filename_stems() {
        assert_eq!(sanitize_filename("A/B Testing: Why?", "page"), "A_slash_B_Testing_Why");
        assert_eq!(sanitize_filename("  ", "page"), "page");
        assert_eq!(sanitize_filename(&"x".repeat(300), "page").len(), 200);
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("Caf\u{e9} <b> & \"q\""), "Caf&#233; &lt;b&gt; &amp; &quot;q&quot;");
    }
}
