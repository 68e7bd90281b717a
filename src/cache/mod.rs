//! Artifact cache: typed keys, bounded store, and the single-flight
//! generation front.

mod front;
mod keys;
mod lock;
mod store;

pub use front::CacheFront;
pub use keys::{ArticleKey, BoardIndexKey, CacheKey};
pub use store::ArtifactStore;
