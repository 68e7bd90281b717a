//! Bacheca content generation and caching core.
//!
//! Turns backend queries into ready-to-serve page artifacts for a
//! bulletin-board web frontend:
//!
//! - **Board index generation**: paginated article listings with pinned
//!   bottom articles on the last page.
//! - **Article generation**: bounded head/tail byte-range fetches of
//!   unbounded article files, rendered through an external renderer.
//! - **Rich content**: URL detection over rendered text with a
//!   priority-ordered pattern/handler table producing embed components.
//! - **Cache front**: get-or-generate by typed key with single-flight
//!   semantics, backed by a bounded LRU artifact store.
//!
//! The backend content source and the text renderer are external
//! collaborators, consumed through the [`backend`] and [`render`] traits.
//! This crate owns no HTTP surface.

pub mod backend;
pub mod cache;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod generate;
pub mod pagination;
pub mod render;
pub mod richcontent;

pub use cache::{ArticleKey, ArtifactStore, BoardIndexKey, CacheFront, CacheKey};
pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generate::{Article, Artifact, BoardIndex};
