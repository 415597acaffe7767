//! Extraction and rewriting of `src:` declarations in fonts-API CSS.
//!
//! The upstream CSS format is matched with a single regular expression, kept
//! behind this module so the matching strategy can change without touching
//! the download loop.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

/// Matches a whole `src: url(...)` declaration up to its line terminator,
/// capturing the URL.
fn src_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"src: url\((.*?)\).*?\n").expect("valid regex"))
}

/// Returns the URL of the single `src: url(...)` declaration in `css`.
///
/// Returns `None` unless exactly one declaration is present: zero means the
/// endpoint did not recognize the family/weight/subset combination, two or
/// more is a multi-face response this tool does not disambiguate.
pub fn extract_font_url(css: &str) -> Option<&str> {
    let mut matches = src_url_re().captures_iter(css);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    first.get(1).map(|url| url.as_str())
}

/// Renders a `src:` declaration listing `(filename, format)` sources in the
/// order given, one per line.
pub fn src_declaration<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let entries: Vec<String> = sources
        .into_iter()
        .map(|(filename, format)| format!("url('{filename}') format('{format}')"))
        .collect();
    format!("src: {};\n", entries.join(",\n       "))
}

/// Substitutes `declaration` for the matched `src: url(...)` span in `css`.
///
/// Everything outside the matched span is returned byte-for-byte unchanged.
pub fn replace_src_declaration(css: &str, declaration: &str) -> String {
    src_url_re().replace_all(css, NoExpand(declaration)).into_owned()
}
