use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Runtime metrics exposed by the render-pass cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Well-known keys for values derived once per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderCacheKey {
    BubbleBaseLength,
}

/// Scalar cache scoped to a single render pass.
///
/// Entries never outlive the pass: the owner calls `clear` when a new pass starts.
#[derive(Debug, Default)]
pub(super) struct RenderPassCache {
    entries: HashMap<RenderCacheKey, f64>,
    hits: u64,
    misses: u64,
}

impl RenderPassCache {
    pub(super) fn get(&mut self, key: RenderCacheKey) -> Option<f64> {
        let value = self.entries.get(&key).copied();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn add(&mut self, key: RenderCacheKey, value: f64) {
        self.misses = self.misses.saturating_add(1);
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> RenderCacheStats {
        RenderCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
