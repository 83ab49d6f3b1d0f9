// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use super::{hubeny, planar, spherical, vincenty};
use crate::{DistanceError, Ellipsoid};

/// Method used by [distance] to compute the distance between two points,
/// in order of increasing accuracy (and cost).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Scaled euclidean distance, see [planar](crate::planar).
    Planar = 0,

    /// Great-circle distance on a sphere, see [spherical](crate::spherical).
    Spherical = 1,

    /// Closed-form ellipsoidal approximation, see [hubeny](crate::hubeny).
    #[default]
    Hubeny = 2,

    /// Iterative ellipsoidal solution, see [vincenty](crate::vincenty).
    Vincenty = 3,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::Planar, Self::Spherical, Self::Hubeny, Self::Vincenty];

    pub fn name(self) -> &'static str {
        match self {
            Self::Planar => "planar",
            Self::Spherical => "spherical",
            Self::Hubeny => "hubeny",
            Self::Vincenty => "vincenty",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planar" | "euclid" => Ok(Self::Planar),
            "spherical" | "haversine" => Ok(Self::Spherical),
            "hubeny" | "ellipsoidal-closed-form" => Ok(Self::Hubeny),
            "vincenty" | "ellipsoidal-iterative" => Ok(Self::Vincenty),
            _ => Err(DistanceError::InvalidArgument(format!(
                "unknown algorithm: {s}"
            ))),
        }
    }
}

impl TryFrom<u32> for Algorithm {
    type Error = DistanceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Planar),
            1 => Ok(Self::Spherical),
            2 => Ok(Self::Hubeny),
            3 => Ok(Self::Vincenty),
            _ => Err(DistanceError::InvalidArgument(format!(
                "unknown algorithm: {value}"
            ))),
        }
    }
}

/// Calculates the distance, in meters, between two lat-lon positions (in degrees)
/// with the selected [Algorithm] on the provided [Ellipsoid].
///
/// Only [Algorithm::Vincenty] may fail, with [DistanceError::Convergence].
///
/// ```
/// use latlng_distance::{distance, Algorithm, Ellipsoid};
///
/// let d = distance(35.655, 139.74472, 36.10056, 140.09111, Algorithm::Vincenty, &Ellipsoid::WGS84)
///     .expect("tokyo-tsukuba must converge");
/// assert_eq!(d, 58_502.342);
/// ```
pub fn distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    algorithm: Algorithm,
    ellipsoid: &Ellipsoid,
) -> Result<f64, DistanceError> {
    match algorithm {
        Algorithm::Planar => Ok(planar(lat1, lon1, lat2, lon2)),
        Algorithm::Spherical => Ok(spherical(lat1, lon1, lat2, lon2, ellipsoid)),
        Algorithm::Hubeny => Ok(hubeny(lat1, lon1, lat2, lon2, ellipsoid)),
        Algorithm::Vincenty => vincenty(lat1, lon1, lat2, lon2, ellipsoid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_from_str() {
        assert_eq!("planar".parse::<Algorithm>(), Ok(Algorithm::Planar));
        assert_eq!("euclid".parse::<Algorithm>(), Ok(Algorithm::Planar));
        assert_eq!("haversine".parse::<Algorithm>(), Ok(Algorithm::Spherical));
        assert_eq!("Hubeny".parse::<Algorithm>(), Ok(Algorithm::Hubeny));
        assert_eq!("ellipsoidal-iterative".parse::<Algorithm>(), Ok(Algorithm::Vincenty));
        assert_eq!(
            "karney".parse::<Algorithm>(),
            Err(DistanceError::InvalidArgument(
                "unknown algorithm: karney".into()
            ))
        );
    }

    #[test]
    fn algorithm_try_from_code() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::try_from(algorithm as u32), Ok(algorithm));
        }
        assert!(matches!(
            Algorithm::try_from(4u32),
            Err(DistanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn algorithm_display_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn distance_dispatch() {
        let (lat1, lon1, lat2, lon2) = (35.655, 139.74472, 36.10056, 140.09111);
        let e = Ellipsoid::GRS80;

        assert_eq!(
            distance(lat1, lon1, lat2, lon2, Algorithm::Planar, &e),
            Ok(planar(lat1, lon1, lat2, lon2))
        );
        assert_eq!(
            distance(lat1, lon1, lat2, lon2, Algorithm::Spherical, &e),
            Ok(spherical(lat1, lon1, lat2, lon2, &e))
        );
        assert_eq!(
            distance(lat1, lon1, lat2, lon2, Algorithm::Hubeny, &e),
            Ok(hubeny(lat1, lon1, lat2, lon2, &e))
        );
        assert_eq!(
            distance(lat1, lon1, lat2, lon2, Algorithm::Vincenty, &e),
            vincenty(lat1, lon1, lat2, lon2, &e)
        );
    }

    #[test]
    fn distance_reports_convergence_failure() {
        assert_eq!(
            distance(0.0, 0.0, 0.0, 179.9, Algorithm::Vincenty, &Ellipsoid::WGS84),
            Err(DistanceError::Convergence)
        );
        assert!(distance(0.0, 0.0, 0.0, 179.9, Algorithm::Spherical, &Ellipsoid::WGS84).is_ok());
    }

    #[test]
    fn default_algorithm_is_hubeny() {
        assert_eq!(Algorithm::default(), Algorithm::Hubeny);
    }
}
