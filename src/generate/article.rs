//! Article generation with bounded head/tail fetches.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::backend::FetchMode;
use crate::cache::ArticleKey;
use crate::config::GeneratorConfig;
use crate::content::truncate_to_newline;
use crate::error::GenerateError;
use crate::render::{ContentRenderer, RenderContext, RenderOptions};

use super::Artifact;

/// A rendered article, possibly covering only the head and tail windows
/// of a larger file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub html: Bytes,
    /// Rendered tail window; present only for partial articles with a
    /// non-empty tail.
    pub tail_html: Option<Bytes>,
    pub title: String,
    pub preview: String,
    /// Fetched bytes cover less than the whole file.
    pub is_partial: bool,
    /// Implies `is_partial`.
    pub is_truncated: bool,
    pub is_valid: bool,
}

/// Generate the article artifact for `key` using its range fetcher.
pub(crate) async fn generate(
    config: &GeneratorConfig,
    renderer: &dyn ContentRenderer,
    key: &ArticleKey,
) -> Result<Artifact, GenerateError> {
    let ctx = RenderContext {
        namespace: key.namespace.clone(),
        board: key.board.name.clone(),
        filename: key.filename.clone(),
    };
    let head_size = config.head_size;
    let tail_size = config.tail_size;

    let mut chunk = key.fetcher.fetch(FetchMode::Head, 0, head_size).await?;

    // When the file barely exceeds the head window, independent head and
    // tail fetches would cover overlapping bytes. Discard the head fetch
    // and read the exact full range instead.
    if chunk.file_size > head_size && chunk.file_size <= head_size + tail_size {
        chunk = key
            .fetcher
            .fetch(FetchMode::ExactRange, 0, chunk.file_size)
            .await?;
    }

    if chunk.content.is_empty() {
        return Err(GenerateError::NotFound);
    }

    let is_partial = chunk.length < chunk.file_size;
    let is_truncated = is_partial;

    let mut tail_html = None;
    if is_partial {
        let tail = key
            .fetcher
            .fetch(FetchMode::Tail, -(tail_size as i64), tail_size)
            .await?;
        if !tail.content.is_empty() {
            // Tail windows start mid-article; no title to extract.
            let rendered = renderer.render(
                &tail.content,
                &RenderOptions {
                    suppress_title: true,
                },
                &ctx,
            )?;
            tail_html = Some(rendered.html);
        }
    }

    let content = if is_partial {
        truncate_to_newline(chunk.content, config.truncate_size, config.truncate_max_scan)
    } else {
        chunk.content
    };

    let rendered = renderer.render(&content, &RenderOptions::default(), &ctx)?;

    debug!(
        board = %key.board.name,
        filename = %key.filename,
        is_partial,
        "Generated article"
    );

    Ok(Artifact::Article(Arc::new(Article {
        html: rendered.html,
        tail_html,
        title: rendered.title,
        preview: rendered.preview,
        is_partial,
        is_truncated,
        is_valid: true,
    })))
}
