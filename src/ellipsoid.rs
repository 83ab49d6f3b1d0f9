// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::DistanceError;

/// Reference [ellipsoid](https://en.wikipedia.org/wiki/Earth_ellipsoid) describing
/// the shape of Earth, given by its equatorial and polar radii (in meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub name: &'static str,

    /// Equatorial radius (semi-major axis), in meters.
    pub a: f64,

    /// Polar radius (semi-minor axis), in meters.
    pub b: f64,
}

impl Ellipsoid {
    /// Bessel 1841 ellipsoid, used by the old Japanese geodetic datum.
    pub const BESSEL: Self = Self::new("Bessel", 6_377_397.155, 6_356_079.0);

    /// GRS80 ellipsoid, used by the Japanese Geodetic Datum 2000 and ITRF.
    pub const GRS80: Self = Self::new("GRS80", 6_378_137.0, 6_356_752.314_14);

    /// WGS84 ellipsoid, used by GPS.
    pub const WGS84: Self = Self::new("WGS84", 6_378_137.0, 6_356_752.314_245);

    pub const fn new(name: &'static str, a: f64, b: f64) -> Self {
        Self { name, a, b }
    }

    /// Flattening of the ellipsoid, `(a - b) / a`.
    #[inline]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// Square of the first eccentricity, `(a² - b²) / a²`.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    /// Looks up one of the predefined [ELLIPSOIDS] by its (case-insensitive) name.
    pub fn named(name: &str) -> Option<Self> {
        ELLIPSOIDS
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl FromStr for Ellipsoid {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s)
            .ok_or_else(|| DistanceError::InvalidArgument(format!("unknown ellipsoid: {s}")))
    }
}

impl TryFrom<u32> for Ellipsoid {
    type Error = DistanceError;

    /// Converts an index into [ELLIPSOIDS] (as used by the C bindings) into an [Ellipsoid].
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ELLIPSOIDS
            .get(value as usize)
            .copied()
            .ok_or_else(|| DistanceError::InvalidArgument(format!("unknown ellipsoid: {value}")))
    }
}

/// All predefined ellipsoids. Indices in this table are used as ellipsoid codes
/// by the C bindings.
pub static ELLIPSOIDS: [Ellipsoid; 3] = [Ellipsoid::BESSEL, Ellipsoid::GRS80, Ellipsoid::WGS84];
