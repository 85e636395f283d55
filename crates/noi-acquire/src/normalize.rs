use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_RE should compile"));
// Whitespace includes the ASCII information separators U+001C..U+001F.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("WHITESPACE_RE should compile"));

/// Named entities decoded after tag stripping, applied in this order.
///
/// `&amp;` comes before `&lt;`/`&gt;`, so `&amp;lt;` ends up as `<`.
const ENTITIES: [(&str, &str); 5] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Remove markup and decode common entities, leaving single-spaced text.
///
/// Each tag becomes a space so adjacent blocks don't run together.
pub fn strip_tags(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    let text = decode_entities(&text);
    collapse_whitespace(&text)
}

pub fn decode_entities(input: &str) -> String {
    ENTITIES
        .iter()
        .fold(input.to_string(), |text, (entity, replacement)| {
            text.replace(entity, replacement)
        })
}

/// Collapse whitespace runs into one space and trim both ends.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RE
        .replace_all(input, " ")
        .trim_matches(is_separator)
        .to_string()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// The first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
