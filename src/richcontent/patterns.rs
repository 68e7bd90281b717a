//! Priority-ordered URL pattern table and embed handlers.
//!
//! A strategy list: `(matcher, handler)` records evaluated in fixed
//! order, first match wins. Handlers are pure functions from matched
//! bytes and capture groups to zero or more components, and may fail.

use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use thiserror::Error;

use crate::render::RenderContext;

use super::Component;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HandlerResult = Result<Vec<Component>, HandlerError>;

type Handler = fn(&RenderContext, &[u8], &Captures<'_>) -> HandlerResult;

/// One priority slot: a matcher and the handler it dispatches to.
pub struct UrlPattern {
    pattern: Regex,
    handler: Handler,
}

impl UrlPattern {
    /// Build a pattern slot. Panics on an invalid regex, which only
    /// happens for programmer-supplied pattern literals.
    pub fn new(pattern: &str, handler: Handler) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("url pattern must compile"),
            handler,
        }
    }

    pub(crate) fn captures<'t>(&self, url: &'t [u8]) -> Option<Captures<'t>> {
        self.pattern.captures(url)
    }

    pub(crate) fn handle(
        &self,
        ctx: &RenderContext,
        url: &[u8],
        caps: &Captures<'_>,
    ) -> HandlerResult {
        (self.handler)(ctx, url, caps)
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<UrlPattern>> = Lazy::new(|| {
    vec![
        UrlPattern::new(
            r"^https?://(?:www\.youtube\.com/watch\?(?:.+&)*v=|youtu\.be/)([\w\-]+)",
            handle_youtube,
        ),
        // Some users post http:// links to the https-only image host;
        // keeping the URL scheme-relative serves both.
        UrlPattern::new(r"^https?:(//i\.imgur\.com/[.\w]+)$", handle_same_scheme_image),
        UrlPattern::new(r"^https?://imgur\.com/([,\w]+)(?:#(\d+))?[^/]*$", handle_imgur),
        UrlPattern::new(r"^http://picmoe\.net/d\.php\?id=(\d+)", handle_picmoe),
        UrlPattern::new(r"\.(?i:png|jpg|gif)$", handle_generic_image),
    ]
});

/// The built-in pattern table, in priority order.
pub fn default_patterns() -> &'static [UrlPattern] {
    &DEFAULT_PATTERNS
}

fn capture_text(caps: &Captures<'_>, group: usize) -> Result<String, HandlerError> {
    caps.get(group)
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .ok_or_else(|| HandlerError::new(format!("missing capture group {group}")))
}

/// Escape text for use inside a double-quoted HTML attribute.
fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn image_component(url: &str) -> Component {
    Component::new(format!(r#"<img src="{}" alt="" />"#, escape_attribute(url)))
}

// Handlers

fn handle_youtube(_ctx: &RenderContext, _url: &[u8], caps: &Captures<'_>) -> HandlerResult {
    let video_id = capture_text(caps, 1)?;
    Ok(vec![Component::new(format!(
        r#"<div class="resize-container"><div class="resize-content"><iframe class="youtube-player" type="text/html" src="//www.youtube.com/embed/{video_id}" frameborder="0"></iframe></div></div>"#
    ))])
}

fn handle_same_scheme_image(
    _ctx: &RenderContext,
    _url: &[u8],
    caps: &Captures<'_>,
) -> HandlerResult {
    Ok(vec![image_component(&capture_text(caps, 1)?)])
}

fn handle_imgur(_ctx: &RenderContext, _url: &[u8], caps: &Captures<'_>) -> HandlerResult {
    let ids = capture_text(caps, 1)?;
    Ok(ids
        .split(',')
        .map(|id| image_component(&format!("//i.imgur.com/{id}.jpg")))
        .collect())
}

fn handle_picmoe(_ctx: &RenderContext, _url: &[u8], caps: &Captures<'_>) -> HandlerResult {
    let id = capture_text(caps, 1)?;
    Ok(vec![image_component(&format!(
        "http://picmoe.net/src/{id}s.jpg"
    ))])
}

fn handle_generic_image(_ctx: &RenderContext, url: &[u8], _caps: &Captures<'_>) -> HandlerResult {
    Ok(vec![image_component(&String::from_utf8_lossy(url))])
}
