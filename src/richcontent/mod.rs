//! Rich-content detection over rendered article text.
//!
//! Scans text for URL-shaped substrings and classifies each one against a
//! priority-ordered pattern table. A matched URL is replaced by zero or
//! more pre-rendered embed components; URLs nothing claims keep their
//! literal text. Classification never dereferences a URL.

mod patterns;
mod urlscan;

pub use patterns::{HandlerError, HandlerResult, UrlPattern, default_patterns};

use tracing::warn;

use crate::render::RenderContext;

/// An opaque pre-rendered embeddable unit, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component(String);

impl Component {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

/// A detected URL occurrence and its embeddable replacement, if any.
///
/// Offsets index the source bytes; spans come out left-to-right and
/// non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichContentSpan {
    pub start: usize,
    pub end: usize,
    /// The matched URL text, preserved verbatim for link labels.
    pub text: String,
    pub components: Vec<Component>,
}

/// Scan `input` with the default pattern table.
pub fn scan(ctx: &RenderContext, input: &[u8]) -> Vec<RichContentSpan> {
    scan_with_patterns(ctx, input, default_patterns())
}

/// Scan `input`, classifying each URL candidate against `patterns` in
/// order. First match wins; a failing handler degrades only its own span.
///
/// Runs in O(candidates × patterns): every pattern is anchored or
/// suffix-bound and evaluated per candidate, never over the whole text.
pub fn scan_with_patterns(
    ctx: &RenderContext,
    input: &[u8],
    patterns: &[UrlPattern],
) -> Vec<RichContentSpan> {
    let mut spans = Vec::with_capacity(4);
    for range in urlscan::find_url_spans(input) {
        let url = &input[range.clone()];
        let mut components = Vec::new();
        for pattern in patterns {
            if let Some(caps) = pattern.captures(url) {
                match pattern.handle(ctx, url, &caps) {
                    Ok(found) => components = found,
                    Err(error) => {
                        warn!(
                            url = %String::from_utf8_lossy(url),
                            %error,
                            "Rich content handler failed; keeping literal URL"
                        );
                    }
                }
                break;
            }
        }
        spans.push(RichContentSpan {
            start: range.start,
            end: range.end,
            text: String::from_utf8_lossy(url).into_owned(),
            components,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext {
            namespace: "article".to_string(),
            board: "lounge".to_string(),
            filename: "M.100.A.1".to_string(),
        }
    }

    #[test]
    fn youtube_share_url_yields_one_player() {
        let spans = scan(&ctx(), b"see https://youtu.be/abc123 now");
        assert_eq!(spans.len(), 1);

        let span = &spans[0];
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 27);
        assert_eq!(span.text, "https://youtu.be/abc123");
        assert_eq!(span.components.len(), 1);
        assert!(
            span.components[0]
                .as_html()
                .contains("//www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn youtube_watch_url_extracts_video_id() {
        let spans = scan(
            &ctx(),
            b"https://www.youtube.com/watch?list=x&v=dQw4w9WgXcQ",
        );
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].components.len(), 1);
        assert!(
            spans[0].components[0]
                .as_html()
                .contains("embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn imgur_multi_id_yields_images_in_order() {
        let spans = scan(&ctx(), b"http://imgur.com/a1,b2");
        assert_eq!(spans.len(), 1);

        let components = &spans[0].components;
        assert_eq!(components.len(), 2);
        assert!(components[0].as_html().contains("//i.imgur.com/a1.jpg"));
        assert!(components[1].as_html().contains("//i.imgur.com/b2.jpg"));
    }

    #[test]
    fn same_scheme_imgur_image_embeds_without_scheme() {
        let spans = scan(&ctx(), b"http://i.imgur.com/x9Yz.png");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].components.len(), 1);
        assert!(
            spans[0].components[0]
                .as_html()
                .contains(r#"src="//i.imgur.com/x9Yz.png""#)
        );
    }

    #[test]
    fn picmoe_id_maps_to_templated_path() {
        let spans = scan(&ctx(), b"http://picmoe.net/d.php?id=4217");
        assert_eq!(spans.len(), 1);
        assert!(
            spans[0].components[0]
                .as_html()
                .contains("http://picmoe.net/src/4217s.jpg")
        );
    }

    #[test]
    fn image_extension_fallback_is_case_insensitive() {
        let spans = scan(&ctx(), b"http://example.com/photo.JPG");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].components.len(), 1);
        assert!(
            spans[0].components[0]
                .as_html()
                .contains("http://example.com/photo.JPG")
        );
    }

    #[test]
    fn unclaimed_url_keeps_literal_text() {
        let spans = scan(&ctx(), b"read http://example.com/page first");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "http://example.com/page");
        assert!(spans[0].components.is_empty());
    }

    #[test]
    fn spans_are_ordered_and_non_overlapping() {
        let input = b"a http://imgur.com/q1 b https://youtu.be/v0 c";
        let spans = scan(&ctx(), input);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].end <= spans[1].start);
        assert_eq!(&input[spans[0].start..spans[0].end], b"http://imgur.com/q1");
        assert_eq!(
            &input[spans[1].start..spans[1].end],
            b"https://youtu.be/v0"
        );
    }

    #[test]
    fn failing_handler_degrades_only_its_span() {
        fn failing(
            _ctx: &RenderContext,
            _url: &[u8],
            _caps: &regex::bytes::Captures<'_>,
        ) -> HandlerResult {
            Err(HandlerError::new("backend id lookup failed"))
        }

        fn tagging(
            _ctx: &RenderContext,
            _url: &[u8],
            caps: &regex::bytes::Captures<'_>,
        ) -> HandlerResult {
            let id = caps
                .get(1)
                .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
                .ok_or_else(|| HandlerError::new("missing id"))?;
            Ok(vec![Component::new(format!("ok:{id}"))])
        }

        let patterns = vec![
            UrlPattern::new(r"^https?://bad\.example/", failing),
            UrlPattern::new(r"^https?://imgur\.com/([,\w]+)$", tagging),
        ];

        let spans = scan_with_patterns(
            &ctx(),
            b"http://bad.example/x then http://imgur.com/fine",
            &patterns,
        );
        assert_eq!(spans.len(), 2);
        // Failed span keeps its text and gets no components
        assert_eq!(spans[0].text, "http://bad.example/x");
        assert!(spans[0].components.is_empty());
        // The failure does not leak into the next span
        assert_eq!(spans[1].components.len(), 1);
        assert_eq!(spans[1].components[0].as_html(), "ok:fine");
    }

    #[test]
    fn first_match_wins_over_later_patterns() {
        // i.imgur.com URLs end in an image extension too; the dedicated
        // pattern must claim them before the generic fallback.
        let spans = scan(&ctx(), b"https://i.imgur.com/q.jpg");
        assert_eq!(spans[0].components.len(), 1);
        // Same-scheme handler strips the scheme; the fallback would not.
        assert!(
            spans[0].components[0]
                .as_html()
                .contains(r#"src="//i.imgur.com/q.jpg""#)
        );
    }
}
