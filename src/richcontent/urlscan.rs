//! URL candidate detection.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

static URL_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s<>"']+"#).expect("url candidate regex must compile")
});

/// Byte ranges of all URL-shaped substrings in `input`, left to right.
///
/// Single linear pass; candidate classification happens elsewhere.
pub(crate) fn find_url_spans(input: &[u8]) -> Vec<Range<usize>> {
    URL_CANDIDATE.find_iter(input).map(|m| m.range()).collect()
}
