// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Ellipsoid;

/// Calculates the distance between two lat-lon positions using Hubeny's formula,
/// which approximates the ellipsoid around the midpoint by its meridian and
/// prime-vertical radii of curvature. Returns the result in meters.
///
/// Accurate to within a meter for distances up to ~100 km, degrading afterwards.
pub fn hubeny(lat1: f64, lon1: f64, lat2: f64, lon2: f64, ellipsoid: &Ellipsoid) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let d_lon = lon1 - lon2;
    let d_lat = lat1 - lat2;
    let mid_lat = (lat1 + lat2) * 0.5;

    let e2 = ellipsoid.eccentricity_squared();
    let sin_mid_lat = mid_lat.sin();
    let w = (1.0 - e2 * sin_mid_lat * sin_mid_lat).sqrt();

    let meridian_radius = ellipsoid.a * (1.0 - e2) / (w * w * w);
    let prime_vertical_radius = ellipsoid.a / w;

    let dy = d_lat * meridian_radius;
    let dx = d_lon * prime_vertical_radius * mid_lat.cos();
    (dy * dy + dx * dx).sqrt()
}
