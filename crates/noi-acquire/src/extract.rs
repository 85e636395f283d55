use crate::normalize;
use crate::types::{Extracted, MAX_TRANSLATION_CHARS};
use regex::Regex;
use std::sync::LazyLock;

/// Structural blocks dropped from the content region before stripping tags.
const BLOCKED_TAGS: [&str; 5] = ["nav", "footer", "script", "style", "header"];

static ARTICLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<article[^>]*>(.*?)</article>").expect("ARTICLE_RE should compile")
});
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("BODY_RE should compile")
});
static BLOCKED_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BLOCKED_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}[^>]*>.*?</{tag}>"))
                .expect("blocked tag pattern should compile")
        })
        .collect()
});
static TRANSLATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)TRANSLATION\s*(.*?)(?:PURPORT|$)").expect("TRANSLATION_RE should compile")
});

/// Pull the readable text and translation excerpt out of a page.
///
/// Heuristic, regex-based:
/// 1. Take the first `<article>` region, else the `<body>`, else the whole input.
/// 2. Drop `nav`, `footer`, `script`, `style`, and `header` blocks.
/// 3. Strip remaining tags, decode entities, collapse whitespace.
/// 4. Take the text after "TRANSLATION" up to "PURPORT" (or the end),
///    capped at 300 characters.
///
/// `_page_id` is accepted for parity with the target record but no extraction
/// rule depends on it.
pub fn extract_content(html: &str, _page_id: &str) -> Extracted {
    let content_html = content_region(html);

    let mut content = content_html.to_string();
    for re in BLOCKED_RES.iter() {
        content = re.replace_all(&content, "").into_owned();
    }

    let full_text = normalize::strip_tags(&content);
    let translation = find_translation(&full_text);

    tracing::debug!(
        chars = full_text.chars().count(),
        translation_chars = translation.chars().count(),
        "Extracted page text"
    );

    Extracted {
        full_text,
        translation,
    }
}

/// The inner HTML of the first `<article>`, falling back to `<body>`, then to all of `html`.
fn content_region(html: &str) -> &str {
    ARTICLE_RE
        .captures(html)
        .or_else(|| {
            tracing::debug!("No <article> element, falling back to <body>");
            BODY_RE.captures(html)
        })
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str())
}

fn find_translation(text: &str) -> String {
    TRANSLATION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| normalize::truncate_chars(m.as_str().trim(), MAX_TRANSLATION_CHARS).to_string())
        .unwrap_or_default()
}
