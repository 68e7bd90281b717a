//! Generation error taxonomy.
//!
//! Collaborator failures abort the current generation and propagate
//! unmodified; no retries happen inside this crate. `GenerateError` is
//! `Clone` so a single in-flight result can be shared across all callers
//! coalesced onto the same key.

use thiserror::Error;

use crate::backend::BackendError;
use crate::pagination::PaginationError;
use crate::render::RenderError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Content absent after fetch. Maps to "no such article" at the
    /// serving boundary.
    #[error("content not found")]
    NotFound,
    /// Requested page number outside `[1, last_page]`.
    #[error("page {page} out of range (last page {last_page})")]
    OutOfRange { page: u32, last_page: u32 },
    /// Backend failure, propagated unchanged from the content source.
    #[error("backend request failed: {0}")]
    Backend(BackendError),
    /// Renderer failure, propagated unchanged.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<BackendError> for GenerateError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::NotFound => Self::NotFound,
            other => Self::Backend(other),
        }
    }
}

impl From<PaginationError> for GenerateError {
    fn from(error: PaginationError) -> Self {
        let PaginationError::OutOfRange { page, last_page } = error;
        Self::OutOfRange { page, last_page }
    }
}
