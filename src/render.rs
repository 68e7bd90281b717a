//! Rendering contract consumed by the article generator.
//!
//! The renderer converts raw article bytes into serving-ready output and
//! is expected to run the rich-content scanner over the text it renders.
//! Implementations must be pure and deterministic: given the same input,
//! they return identical outputs or errors.

use bytes::Bytes;
use thiserror::Error;

/// Identity of the request a render pass originates from.
///
/// Threaded through rendering and rich-content handling by explicit
/// parameter passing; handlers that key embeds off the requesting
/// article can read it, the built-in ones do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub namespace: String,
    pub board: String,
    pub filename: String,
}

/// Per-pass rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Skip title extraction; used for tail windows, which start
    /// mid-article and carry no header.
    pub suppress_title: bool,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub html: Bytes,
    /// Extracted article title; empty when suppressed or absent.
    pub title: String,
    /// Plain-text preview for listings and link unfurls.
    pub preview: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("content rendering failed: {message}")]
    Content { message: String },
}

impl RenderError {
    pub fn content(message: impl Into<String>) -> Self {
        Self::Content {
            message: message.into(),
        }
    }
}

/// Trait exposed by the external text renderer.
pub trait ContentRenderer: Send + Sync {
    fn render(
        &self,
        content: &[u8],
        options: &RenderOptions,
        ctx: &RenderContext,
    ) -> Result<RenderedContent, RenderError>;
}
