//! Board index generation.

use std::sync::Arc;

use tracing::debug;

use crate::backend::ContentSource;
use crate::cache::BoardIndexKey;
use crate::config::GeneratorConfig;
use crate::domain::{ArticleSummary, Board};
use crate::error::GenerateError;
use crate::pagination::Pager;

use super::Artifact;

/// One rendered page of a board's article listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardIndex {
    pub board: Board,
    /// Summaries for the resolved page, in backend order.
    pub articles: Vec<ArticleSummary>,
    /// Pinned articles; populated iff the resolved page is the last page.
    pub bottoms: Vec<ArticleSummary>,
    pub total_pages: u32,
    pub has_prev_page: bool,
    pub prev_page: u32,
    pub has_next_page: bool,
    pub next_page: u32,
    pub is_valid: bool,
}

/// Generate the index artifact for `key`. A requested page of 0 resolves
/// to the last page. Any backend failure aborts generation.
pub(crate) async fn generate(
    config: &GeneratorConfig,
    source: &dyn ContentSource,
    key: &BoardIndexKey,
) -> Result<Artifact, GenerateError> {
    let count = source.article_count(&key.board).await?;

    let mut pager = Pager::new(config.entries_per_page_non_zero(), count);
    let page = if key.page == 0 {
        pager.last_page_no()
    } else {
        key.page
    };
    pager.set_page_no(page)?;
    let last_page = pager.last_page_no();

    let articles = source.article_list(&key.board, pager.cursor()).await?;

    let bottoms = if page == last_page {
        source.bottom_list(&key.board).await?
    } else {
        Vec::new()
    };

    let (has_prev_page, prev_page) = if page > 1 { (true, page - 1) } else { (false, 0) };
    let (has_next_page, next_page) = if page < last_page {
        (true, page + 1)
    } else {
        (false, 0)
    };

    debug!(
        board = %key.board.name,
        page,
        total_pages = last_page,
        articles = articles.len(),
        bottoms = bottoms.len(),
        "Generated board index"
    );

    Ok(Artifact::BoardIndex(Arc::new(BoardIndex {
        board: key.board.clone(),
        articles,
        bottoms,
        total_pages: last_page,
        has_prev_page,
        prev_page,
        has_next_page,
        next_page,
        is_valid: true,
    })))
}
