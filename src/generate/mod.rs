//! Cache-miss generators producing page artifacts.
//!
//! Each generator runs once per cache miss, sequentially within one
//! invocation: fetch, render, return. Artifacts are built once, then
//! shared immutably through `Arc`.

pub mod article;
pub mod board_index;

use std::sync::Arc;

pub use article::Article;
pub use board_index::BoardIndex;

/// A cacheable page artifact, immutable once produced.
#[derive(Debug, Clone)]
pub enum Artifact {
    BoardIndex(Arc<BoardIndex>),
    Article(Arc<Article>),
}

impl Artifact {
    pub fn is_valid(&self) -> bool {
        match self {
            Artifact::BoardIndex(index) => index.is_valid,
            Artifact::Article(article) => article.is_valid,
        }
    }

    pub fn as_board_index(&self) -> Option<&BoardIndex> {
        match self {
            Artifact::BoardIndex(index) => Some(index),
            Artifact::Article(_) => None,
        }
    }

    pub fn as_article(&self) -> Option<&Article> {
        match self {
            Artifact::Article(article) => Some(article),
            Artifact::BoardIndex(_) => None,
        }
    }
}
