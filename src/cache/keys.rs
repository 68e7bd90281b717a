//! Cache key definitions.
//!
//! A key selects the generator and addresses stored results. Keys are
//! transient, built per request; only their storage identity persists.

use std::fmt;
use std::sync::Arc;

use crate::backend::RangeFetcher;
use crate::domain::Board;

/// Addresses one page of a board's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardIndexKey {
    pub board: Board,
    /// Requested page; 0 resolves to the last page.
    pub page: u32,
}

/// Addresses one rendered article.
///
/// Carries the byte-range fetch capability for the article file; the
/// fetcher never participates in the key's identity.
#[derive(Clone)]
pub struct ArticleKey {
    /// Serving namespace, e.g. `article` for full views.
    pub namespace: String,
    pub board: Board,
    pub filename: String,
    pub fetcher: Arc<dyn RangeFetcher>,
}

impl fmt::Debug for ArticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleKey")
            .field("namespace", &self.namespace)
            .field("board", &self.board)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

/// Unified cache key.
#[derive(Debug, Clone)]
pub enum CacheKey {
    BoardIndex(BoardIndexKey),
    Article(ArticleKey),
}

impl CacheKey {
    /// Stable string identity for storage addressing.
    ///
    /// The variants use disjoint prefixes, so identities never collide
    /// across key types regardless of board or namespace values.
    pub fn storage_key(&self) -> String {
        match self {
            CacheKey::BoardIndex(key) => {
                format!("bacheca:index/{}/{}", key.board.name, key.page)
            }
            CacheKey::Article(key) => format!(
                "bacheca:article/{}/{}/{}",
                key.namespace, key.board.name, key.filename
            ),
        }
    }
}
