// src/core/html.rs

// Hand-rolled, case-insensitive scanning over raw HTML text. The pages we
// read are table-shaped and attribute order drifts, so everything here works
// on tag *blocks* (opener..matching close) rather than a parsed DOM.

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

/// Inner text between the first `open_pat…>` and the following `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `o…c` block at or after `from`; returns (start, end) byte offsets
/// covering the whole block including both tags.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Content of a block with its opening and closing tags removed.
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

/// Opening tag of a block, lowercased (attribute sniffing).
pub fn opener_lc(block: &str) -> String {
    let end = block.find('>').unwrap_or(block.len());
    to_lower(&block[..end])
}

/// True if the block's opening tag carries `needle` in its class attribute.
/// Tolerates single quotes, double quotes, unquoted and multi-class values.
pub fn has_class(block: &str, needle: &str) -> bool {
    let lc = opener_lc(block);
    let needle = to_lower(needle);
    lc.contains(&format!(r#"class="{}""#, needle))
        || lc.contains(&format!(r#"class='{}'"#, needle))
        || (lc.contains("class=") && lc.contains(&needle))
}

/// Value of `attr=` in a tag opener. Quote style is whatever the site felt
/// like that day: double, single, or none.
pub fn attr_value(block: &str, attr: &str) -> Option<String> {
    let opener_end = block.find('>').unwrap_or(block.len());
    let opener = &block[..opener_end];
    let lc = to_lower(opener);
    let key = join!(to_lower(attr), "=");
    let at = lc.find(&key)?;
    let val = &opener[at + key.len()..];

    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e).unwrap_or(val.len())
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>').unwrap_or(val.len())
    };
    let out = val[start_off..end].trim();
    if out.is_empty() { None } else { Some(out.to_string()) }
}

/// Collect the stripped inner text of every `tag…/tag` block inside `s`.
pub fn inner_texts(s: &str, tag: &str) -> Vec<String> {
    let open = join!("<", tag);
    let close = join!("</", tag, ">");
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_tag_block_ci(s, &open, &close, pos) {
        let block = &s[b_s..b_e];
        let inner = inner_after_open_tag(block);
        out.push(strip_tags(super::sanitize::normalize_entities(&inner)));
        pos = b_e;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_quote_styles() {
        assert_eq!(attr_value(r#"<a href="x/y">t</a>"#, "href").as_deref(), Some("x/y"));
        assert_eq!(attr_value(r#"<a href='x/y'>t</a>"#, "href").as_deref(), Some("x/y"));
        assert_eq!(attr_value(r#"<a href=x/y class=q>t</a>"#, "href").as_deref(), Some("x/y"));
        assert_eq!(attr_value(r#"<a class=q>t</a>"#, "href"), None);
    }

    #[test]
    fn inner_texts_strips_markup() {
        let doc = "<td><b>One</b></td><td> Two&nbsp;B </td>";
        assert_eq!(inner_texts(doc, "td"), vec!["One", "Two B"]);
    }

    #[test]
    fn block_walk_is_case_insensitive() {
        let doc = "<TR><TD>a</TD></TR><tr><td>b</td></tr>";
        let (s1, e1) = next_tag_block_ci(doc, "<tr", "</tr>", 0).unwrap();
        assert!(doc[s1..e1].contains('a'));
        let (s2, e2) = next_tag_block_ci(doc, "<tr", "</tr>", e1).unwrap();
        assert!(doc[s2..e2].contains('b'));
    }
}
