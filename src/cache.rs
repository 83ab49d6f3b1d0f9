// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::{distance, Algorithm, DistanceError, Ellipsoid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    coordinates: [u64; 4],
    algorithm: Algorithm,
    ellipsoid: [u64; 2],
}

impl CacheKey {
    fn new(
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
        algorithm: Algorithm,
        ellipsoid: &Ellipsoid,
    ) -> Self {
        Self {
            coordinates: [lat1.to_bits(), lon1.to_bits(), lat2.to_bits(), lon2.to_bits()],
            algorithm,
            ellipsoid: [ellipsoid.a.to_bits(), ellipsoid.b.to_bits()],
        }
    }
}

/// DistanceCache memoizes results of [distance], keyed by the exact coordinates,
/// [Algorithm] and [Ellipsoid] radii. Practice shows that workloads converting
/// tracks or tables of positions repeatedly ask for the same pairs of points.
///
/// Only successful computations are stored; errors are recomputed (and returned)
/// on every call.
///
/// The cache is safe to share between threads.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: Mutex<HashMap<CacheKey, f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a previously computed [distance], or computes and stores it.
    pub fn get_or_compute(
        &self,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
        algorithm: Algorithm,
        ellipsoid: &Ellipsoid,
    ) -> Result<f64, DistanceError> {
        let key = CacheKey::new(lat1, lon1, lat2, lon2, algorithm, ellipsoid);

        if let Some(&d) = self.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("cache hit: {key:?}");
            return Ok(d);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("cache miss: {key:?}");

        // The lock is not held while computing, so concurrent misses on the same key
        // may compute the distance twice. Both produce the same value.
        let d = distance(lat1, lon1, lat2, lon2, algorithm, ellipsoid)?;
        self.lock().insert(key, d);
        Ok(d)
    }

    /// Returns the number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of calls which required computing the distance.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Returns the number of stored results.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes all stored results and resets the statistics.
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, f64>> {
        // A poisoned map only ever holds fully computed values
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
