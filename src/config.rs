//! Generator and store configuration.
//!
//! All limits default to the values the production frontend runs with;
//! deployments override them through their own configuration layer.

use std::num::{NonZeroU32, NonZeroUsize};

use serde::Deserialize;

// Default values for content generation
const DEFAULT_ENTRIES_PER_PAGE: u32 = 20;
const DEFAULT_HEAD_SIZE: usize = 100 * 1024;
const DEFAULT_TAIL_SIZE: usize = 50 * 1024;
const DEFAULT_TRUNCATE_SIZE: usize = 1024 * 1024;
const DEFAULT_TRUNCATE_MAX_SCAN: usize = 1024;
const DEFAULT_ARTIFACT_LIMIT: usize = 200;

/// Configuration for the cache front and both generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Article summaries per board index page.
    pub entries_per_page: u32,
    /// Bytes fetched from the start of an article file.
    pub head_size: usize,
    /// Bytes fetched from the end of an article file when partial.
    pub tail_size: usize,
    /// Upper bound on head content handed to the renderer.
    pub truncate_size: usize,
    /// Backward window scanned for a newline-aligned truncation cut.
    pub truncate_max_scan: usize,
    /// Maximum artifacts retained in the LRU store.
    pub artifact_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
            head_size: DEFAULT_HEAD_SIZE,
            tail_size: DEFAULT_TAIL_SIZE,
            truncate_size: DEFAULT_TRUNCATE_SIZE,
            truncate_max_scan: DEFAULT_TRUNCATE_MAX_SCAN,
            artifact_limit: DEFAULT_ARTIFACT_LIMIT,
        }
    }
}

impl GeneratorConfig {
    /// Returns the page size as `NonZeroU32`, clamping to 1 if zero.
    pub fn entries_per_page_non_zero(&self) -> NonZeroU32 {
        NonZeroU32::new(self.entries_per_page).unwrap_or(NonZeroU32::MIN)
    }

    /// Returns the artifact limit as `NonZeroUsize`, clamping to 1 if zero.
    pub fn artifact_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.artifact_limit).unwrap_or(NonZeroUsize::MIN)
    }
}
