// src/core/html.rs
// Text helpers for markup fragments found inside grid cells and script payloads.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove every `<...>` span, then trim surrounding whitespace.
/// Inner whitespace is left alone: the asset-name cell is sliced by length later.
pub fn strip_tags(s: &str) -> String {
    s!(TAG.replace_all(s, "").trim())
}

/// Decode HTML character references in one pass: every HTML5 named
/// reference plus decimal/hex numeric ones. Unknown names are kept verbatim.
pub fn unescape_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}
