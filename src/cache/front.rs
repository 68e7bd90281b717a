//! Get-or-generate front with per-key single flight.
//!
//! Concurrent requests for the same key await one shared generation
//! future instead of triggering duplicate backend fetches. Successful
//! artifacts land in the bounded store; failures are never stored.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, warn};

use crate::backend::ContentSource;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::generate::{Artifact, article, board_index};
use crate::render::ContentRenderer;

use super::keys::CacheKey;
use super::store::ArtifactStore;

type GenerationFuture = Shared<BoxFuture<'static, Result<Artifact, GenerateError>>>;

/// Entry point for cache-backed artifact generation.
pub struct CacheFront {
    config: Arc<GeneratorConfig>,
    source: Arc<dyn ContentSource>,
    renderer: Arc<dyn ContentRenderer>,
    store: ArtifactStore,
    inflight: DashMap<String, GenerationFuture>,
}

impl CacheFront {
    pub fn new(
        config: GeneratorConfig,
        source: Arc<dyn ContentSource>,
        renderer: Arc<dyn ContentRenderer>,
    ) -> Self {
        let store = ArtifactStore::new(config.artifact_limit_non_zero());
        Self {
            config: Arc::new(config),
            source,
            renderer,
            store,
            inflight: DashMap::new(),
        }
    }

    /// The backing artifact store, for invalidation and introspection.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Return the stored artifact for `key`, or run its generator.
    ///
    /// At most one generation is in flight per storage key; callers that
    /// miss while one is running await its result. All coalesced callers
    /// observe the same success or failure.
    pub async fn get_or_generate(&self, key: CacheKey) -> Result<Artifact, GenerateError> {
        let storage_key = key.storage_key();

        if let Some(artifact) = self.store.get(&storage_key) {
            debug!(key = %storage_key, "Cache hit");
            return Ok(artifact);
        }

        let future = match self.inflight.entry(storage_key.clone()) {
            Entry::Occupied(entry) => {
                debug!(key = %storage_key, "Joining in-flight generation");
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                debug!(key = %storage_key, "Cache miss, generating");
                let future = generate_for_key(
                    Arc::clone(&self.config),
                    Arc::clone(&self.source),
                    Arc::clone(&self.renderer),
                    key,
                )
                .boxed()
                .shared();
                entry.insert(future.clone());
                future
            }
        };

        let result = future.await;
        self.inflight.remove(&storage_key);

        match &result {
            Ok(artifact) => {
                self.store.insert(storage_key, artifact.clone());
            }
            Err(error) => {
                warn!(key = %storage_key, %error, "Generation failed; result not cached");
            }
        }

        result
    }
}

/// Generator selection: dispatch on the key variant.
async fn generate_for_key(
    config: Arc<GeneratorConfig>,
    source: Arc<dyn ContentSource>,
    renderer: Arc<dyn ContentRenderer>,
    key: CacheKey,
) -> Result<Artifact, GenerateError> {
    match key {
        CacheKey::BoardIndex(key) => board_index::generate(&config, source.as_ref(), &key).await,
        CacheKey::Article(key) => article::generate(&config, renderer.as_ref(), &key).await,
    }
}
