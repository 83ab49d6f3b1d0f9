// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Ellipsoid;

/// Calculates the great-circle distance between two lat-lon positions
/// using the [spherical law of cosines](https://en.wikipedia.org/wiki/Great-circle_distance#Formulae),
/// treating Earth as a sphere with the equatorial radius of the provided [Ellipsoid].
/// Returns the result in meters.
pub fn spherical(lat1: f64, lon1: f64, lat2: f64, lon2: f64, ellipsoid: &Ellipsoid) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let cos_d = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();

    // Rounding may push the cosine slightly outside of acos' domain
    // for identical or antipodal points.
    ellipsoid.a * cos_d.clamp(-1.0, 1.0).acos()
}
