//! Read-through cache of security estimates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::trace;

use crate::error::Result;
use crate::estimate::{estimate_with_config, SecurityEstimate};
use crate::model::CostModel;
use crate::params::{LweParams, SearchConfig};

/// Exact input tuple; sigma is keyed by its bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    n: usize,
    q: u64,
    sigma_bits: u64,
    cost_model: CostModel,
}

impl CacheKey {
    fn new(params: &LweParams, cost_model: CostModel) -> Self {
        Self {
            n: params.n(),
            q: params.q(),
            sigma_bits: params.sigma().to_bits(),
            cost_model,
        }
    }
}

type Slot = Arc<OnceLock<Result<SecurityEstimate>>>;

/// Memoizes estimates per `(n, q, sigma, cost model)`.
///
/// Each key is computed at most once, also under concurrent lookups: the map
/// lock only guards slot creation, and the computation runs inside the slot's
/// `OnceLock`, so concurrent callers for one key block on that slot alone.
/// Failures are cached as well since the computation is deterministic.
///
/// [`EstimateCache::new`] keeps every entry for the life of the cache. Use
/// [`EstimateCache::bounded`] when the key space is open ended; once full, an
/// arbitrary entry is evicted for each new key, and an evicted key is
/// recomputed on its next lookup.
pub struct EstimateCache {
    config: SearchConfig,
    capacity: Option<usize>,
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

impl EstimateCache {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Cache using `config` for every computation. A deadline in `config`
    /// would make results time dependent and is dropped.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config: config.without_deadline(),
            capacity: None,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Cache holding at most `capacity` entries (at least one).
    pub fn bounded(config: SearchConfig, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::with_config(config)
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn get_or_estimate(
        &self,
        params: &LweParams,
        cost_model: CostModel,
    ) -> Result<SecurityEstimate> {
        let key = CacheKey::new(params, cost_model);
        let slot = {
            let mut slots = self.lock();
            if let Some(cap) = self.capacity {
                if slots.len() >= cap && !slots.contains_key(&key) {
                    if let Some(victim) = slots.keys().next().copied() {
                        trace!(?victim, "cache full, evicting");
                        slots.remove(&victim);
                    }
                }
            }
            Arc::clone(slots.entry(key).or_default())
        };
        slot.get_or_init(|| {
            trace!(?key, "cache miss");
            estimate_with_config(params, cost_model, &self.config)
        })
        .clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for EstimateCache {
    fn default() -> Self {
        Self::new()
    }
}
