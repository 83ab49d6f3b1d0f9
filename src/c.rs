// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum CDistanceResultType {
    Ok = 0,
    InvalidArgument = 1,
    Convergence = 2,
}

/// Outcome of a distance computation. `meters` is only meaningful
/// if `type_` is [CDistanceResultType::Ok], and is NaN otherwise.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct CDistanceResult {
    pub meters: f64,
    pub type_: CDistanceResultType,
}

impl From<Result<f64, DistanceError>> for CDistanceResult {
    fn from(value: Result<f64, DistanceError>) -> Self {
        match value {
            Ok(meters) => CDistanceResult {
                meters,
                type_: CDistanceResultType::Ok,
            },

            Err(e) => {
                log::warn!("{e}");
                CDistanceResult {
                    meters: f64::NAN,
                    type_: match e {
                        DistanceError::InvalidArgument(_) => CDistanceResultType::InvalidArgument,
                        DistanceError::Convergence => CDistanceResultType::Convergence,
                    },
                }
            }
        }
    }
}

/// Resolves C algorithm and ellipsoid codes. Algorithm codes follow [Algorithm]'s
/// discriminants, ellipsoid codes are indices into [ELLIPSOIDS].
fn resolve_selectors(
    algorithm: u32,
    ellipsoid: u32,
) -> Result<(Algorithm, Ellipsoid), DistanceError> {
    Ok((Algorithm::try_from(algorithm)?, Ellipsoid::try_from(ellipsoid)?))
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    algorithm: u32,
    ellipsoid: u32,
) -> CDistanceResult {
    resolve_selectors(algorithm, ellipsoid)
        .and_then(|(algorithm, ellipsoid)| {
            distance(lat1, lon1, lat2, lon2, algorithm, &ellipsoid)
        })
        .into()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_new() -> *mut DistanceCache {
    Box::into_raw(Box::<DistanceCache>::default())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_delete(ptr: *mut DistanceCache) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_distance(
    cache: *const DistanceCache,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    algorithm: u32,
    ellipsoid: u32,
) -> CDistanceResult {
    resolve_selectors(algorithm, ellipsoid)
        .and_then(|(algorithm, ellipsoid)| match cache.as_ref() {
            Some(cache) => cache.get_or_compute(lat1, lon1, lat2, lon2, algorithm, &ellipsoid),
            None => distance(lat1, lon1, lat2, lon2, algorithm, &ellipsoid),
        })
        .into()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_hits(cache: *const DistanceCache) -> u64 {
    cache.as_ref().map(|c| c.hits()).unwrap_or(0)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_misses(cache: *const DistanceCache) -> u64 {
    cache.as_ref().map(|c| c.misses()).unwrap_or(0)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn latlng_cache_clear(cache: *const DistanceCache) {
    if let Some(cache) = cache.as_ref() {
        cache.clear();
    }
}
