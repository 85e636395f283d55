use crate::page::PageResult;

/// Pretty-printed JSON snapshot file name.
pub const DATA_JSON: &str = "data.json";

/// Script-embeddable snapshot file name, loadable from a page opened as a local file.
pub const DATA_JS: &str = "data.js";

/// Variable binding that opens `data.js`.
pub const JS_PREFIX: &str = "const BOOK_DATA = ";

/// Statement terminator that closes `data.js`.
pub const JS_SUFFIX: &str = ";";

/// Render results as the pretty JSON stored in `data.json`.
pub fn render_json(results: &[PageResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Render results as the `const BOOK_DATA = [...];` script stored in `data.js`.
pub fn render_js(results: &[PageResult]) -> serde_json::Result<String> {
    let json = serde_json::to_string(results)?;
    Ok(format!("{JS_PREFIX}{json}{JS_SUFFIX}"))
}

/// The JSON array embedded in a `data.js` body, if the wrapping tokens are present.
///
/// Trailing whitespace after the terminator is tolerated.
pub fn embedded_json(script: &str) -> Option<&str> {
    script
        .strip_prefix(JS_PREFIX)?
        .trim_end()
        .strip_suffix(JS_SUFFIX)
}
