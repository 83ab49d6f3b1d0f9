// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Approximate length of one degree of latitude, in meters.
const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Approximate length of one degree of longitude at mid-latitudes (around 35°N), in meters.
const METERS_PER_DEGREE_LON: f64 = 91_000.0;

/// Calculates the distance between two lat-lon positions by treating the
/// coordinates as points on a plane, scaled by fixed meters-per-degree factors.
/// Returns the result in meters.
///
/// This is a rough approximation, only usable for distances of a few kilometers
/// at mid-latitudes. The ellipsoid is ignored.
pub fn planar(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2) * METERS_PER_DEGREE_LAT).hypot((lon1 - lon2) * METERS_PER_DEGREE_LON)
}
