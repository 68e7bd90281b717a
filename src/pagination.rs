//! Page-number pagination over a counted article list.

use std::num::NonZeroU32;

use thiserror::Error;

/// Fetch window for one page of a board's article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Zero-based offset of the first summary on the page.
    pub offset: u32,
    pub limit: u32,
}

/// Computes page boundaries and cursors from a total item count.
///
/// Page numbers are 1-based. An empty list still has one (empty) page so
/// that a board index always resolves somewhere.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: NonZeroU32,
    total_count: u32,
    page_no: u32,
}

impl Pager {
    pub fn new(page_size: NonZeroU32, total_count: u32) -> Self {
        Self {
            page_size,
            total_count,
            page_no: 1,
        }
    }

    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn last_page_no(&self) -> u32 {
        self.total_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Position the pager on `page`, failing when outside `[1, last_page]`.
    pub fn set_page_no(&mut self, page: u32) -> Result<(), PaginationError> {
        let last_page = self.last_page_no();
        if page == 0 || page > last_page {
            return Err(PaginationError::OutOfRange { page, last_page });
        }
        self.page_no = page;
        Ok(())
    }

    /// Fetch window for the current page.
    pub fn cursor(&self) -> PageCursor {
        PageCursor {
            offset: (self.page_no - 1) * self.page_size.get(),
            limit: self.page_size.get(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page {page} out of range (last page {last_page})")]
    OutOfRange { page: u32, last_page: u32 },
}
