//! Backend content source contracts.
//!
//! The backend owns article counts, index listings, and raw article
//! bytes. This crate consumes it through these traits and never reaches
//! past them; fetch timeouts and transport concerns live behind the
//! implementations.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::domain::{ArticleSummary, Board};
use crate::pagination::PageCursor;

/// Byte-range selection mode for article file fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// First `max_len` bytes.
    Head,
    /// Last `max_len` bytes; `offset` is negative, counted from the end.
    Tail,
    /// Exactly `[offset, offset + max_len)`.
    ExactRange,
}

/// One byte-range fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChunk {
    pub content: Bytes,
    /// Total size of the article file on the backend.
    pub file_size: usize,
    /// Bytes actually covered by this fetch.
    pub length: usize,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("content not found")]
    NotFound,
    #[error("{message}")]
    Failure { message: String },
}

impl BackendError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Board-level queries against the backend.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn article_count(&self, board: &Board) -> Result<u32, BackendError>;

    /// Ordered summaries for the window addressed by `cursor`.
    async fn article_list(
        &self,
        board: &Board,
        cursor: PageCursor,
    ) -> Result<Vec<ArticleSummary>, BackendError>;

    /// Pinned articles always shown on the last index page.
    async fn bottom_list(&self, board: &Board) -> Result<Vec<ArticleSummary>, BackendError>;
}

/// Byte-range fetch capability for one article file.
///
/// Carried inside the article cache key so the generator can read the
/// file it was addressed with, without re-resolving the locator.
#[async_trait]
pub trait RangeFetcher: Send + Sync {
    async fn fetch(
        &self,
        mode: FetchMode,
        offset: i64,
        max_len: usize,
    ) -> Result<ContentChunk, BackendError>;
}
