// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
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

/// Lowercase, non-alphanumerics collapsed to single dashes.
/// "Patrick Mahomes" → "patrick-mahomes"; used for URL path segments and
/// for matching schedule-link slugs back to team names.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_dash = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Strip a leading '@' (away-game marker in matchup cells).
pub fn strip_at(s: &str) -> &str {
    s.strip_prefix('@').unwrap_or(s).trim_start()
}

/// Filesystem-safe page name for the scratch directory.
pub fn sanitize_page_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '/' || ch == '\\' {
            if !last_us { out.push('_'); last_us = true; }
        }
        else if ch == '-' || ch == '_' { out.push(ch); last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("page") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_variants() {
        assert_eq!(slugify("Patrick Mahomes"), "patrick-mahomes");
        assert_eq!(slugify("New England Patriots"), "new-england-patriots");
        assert_eq!(slugify("  Odell Beckham Jr. "), "odell-beckham-jr");
    }

    #[test]
    fn strip_at_only_leading() {
        assert_eq!(strip_at("@Patriots"), "Patriots");
        assert_eq!(strip_at("Patriots"), "Patriots");
    }
}
