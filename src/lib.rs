// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Distance between two latitude/longitude positions on Earth.
//!
//! Four methods of increasing accuracy are available, see [Algorithm]:
//! - [planar] - scaled euclidean distance, only usable over a few kilometers,
//! - [spherical] - great-circle distance with the spherical law of cosines,
//! - [hubeny] - closed-form approximation on an [Ellipsoid],
//! - [vincenty] - iterative inverse solution on an [Ellipsoid], accurate to millimeters.
//!
//! All functions take positions in decimal degrees and return distances in meters.
//!
//! # Example
//!
//! ```
//! use latlng_distance::{distance, Algorithm, Ellipsoid};
//!
//! let tokyo = (35.65500, 139.74472);
//! let tsukuba = (36.10056, 140.09111);
//!
//! for algorithm in Algorithm::ALL {
//!     let d = distance(tokyo.0, tokyo.1, tsukuba.0, tsukuba.1, algorithm, &Ellipsoid::WGS84)
//!         .expect("tokyo and tsukuba are not antipodal");
//!     println!("{algorithm}: {d:.3} m");
//! }
//! ```

pub mod c;
mod cache;
mod distance;
mod ellipsoid;

pub use cache::DistanceCache;
pub use distance::{
    distance, hubeny, planar, spherical, vincenty, vincenty_unrounded, Algorithm, DistanceError,
    CONVERGENCE_TOLERANCE, MAX_ITERATIONS,
};
pub use ellipsoid::{Ellipsoid, ELLIPSOIDS};

/// Represents a position on Earth, in decimal degrees.
///
/// Latitude must be within [-90, 90] and longitude within [-180, 180].
/// This is not checked; distances to invalid positions are meaningless.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Calculates the [distance] to another point, in meters.
    pub fn distance_to(
        &self,
        other: &GeoPoint,
        algorithm: Algorithm,
        ellipsoid: &Ellipsoid,
    ) -> Result<f64, DistanceError> {
        distance(self.lat, self.lon, other.lat, other.lon, algorithm, ellipsoid)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}
