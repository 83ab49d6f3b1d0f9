// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use latlng_distance::{
    distance, hubeny, spherical, vincenty_unrounded, Algorithm, DistanceError, Ellipsoid,
    GeoPoint, ELLIPSOIDS,
};

const TOKYO: GeoPoint = GeoPoint::new(35.65500, 139.74472);
const TSUKUBA: GeoPoint = GeoPoint::new(36.10056, 140.09111);

/// Pairs of points roughly 1 km, 10 km, 100 km and 1000 km apart, heading north-east from 35°N 139°E.
fn pairs_at_increasing_separation() -> Vec<(GeoPoint, GeoPoint)> {
    [1.0, 10.0, 100.0, 1000.0]
        .into_iter()
        .map(|km| {
            let deg = km / 111.0;
            (
                GeoPoint::new(35.0, 139.0),
                GeoPoint::new(35.0 + deg * 0.6, 139.0 + deg * 0.8 / 0.82),
            )
        })
        .collect()
}

#[test]
fn identical_points() {
    for e in &ELLIPSOIDS {
        for p in [TOKYO, TSUKUBA, GeoPoint::new(0.0, 0.0), GeoPoint::new(-33.9, 151.2)] {
            for algorithm in Algorithm::ALL {
                let d = p.distance_to(&p, algorithm, e).unwrap();
                assert!(d.abs() < 0.5, "{algorithm} on {e}: {d}");
            }
            assert_eq!(p.distance_to(&p, Algorithm::Vincenty, e), Ok(0.0));
        }
    }
}

#[test]
fn symmetry() {
    for algorithm in Algorithm::ALL {
        let ab = TOKYO.distance_to(&TSUKUBA, algorithm, &Ellipsoid::WGS84).unwrap();
        let ba = TSUKUBA.distance_to(&TOKYO, algorithm, &Ellipsoid::WGS84).unwrap();
        assert_eq!(ab, ba, "{algorithm}");
    }
}

#[test]
fn tokyo_tsukuba() {
    let e = Ellipsoid::WGS84;
    let v = TOKYO.distance_to(&TSUKUBA, Algorithm::Vincenty, &e).unwrap();
    assert!((58_000.0..=60_000.0).contains(&v), "{v}");

    let h = TOKYO.distance_to(&TSUKUBA, Algorithm::Hubeny, &e).unwrap();
    assert!((h - v).abs() < 50.0, "hubeny {h} vs vincenty {v}");

    // The sphere has the equatorial radius, overestimating distances by up to ~0.3%
    let s = TOKYO.distance_to(&TSUKUBA, Algorithm::Spherical, &e).unwrap();
    assert!((s - v).abs() < 150.0, "spherical {s} vs vincenty {v}");
    assert!((s - v).abs() / v < 0.003);
}

#[test]
fn spherical_never_nan() {
    for lat in (-90..=90).step_by(15) {
        for lon in (-180..=180).step_by(30) {
            let (lat, lon) = (lat as f64, lon as f64);
            let antipode_lon = if lon <= 0.0 { lon + 180.0 } else { lon - 180.0 };

            for (lat2, lon2) in [(lat, lon), (-lat, antipode_lon)] {
                let d = spherical(lat, lon, lat2, lon2, &Ellipsoid::WGS84);
                assert!(d.is_finite(), "({lat}, {lon}) -> ({lat2}, {lon2}): {d}");
            }
        }
    }
}

#[test]
fn vincenty_fails_for_nearly_antipodal_points() {
    assert_eq!(
        distance(0.0, 0.0, 0.0, 179.9, Algorithm::Vincenty, &Ellipsoid::WGS84),
        Err(DistanceError::Convergence)
    );
}

#[test]
fn error_shrinks_with_separation() {
    let e = Ellipsoid::WGS84;
    let mut last_spherical_error = f64::INFINITY;
    let mut last_hubeny_error = f64::INFINITY;

    // Walk from the farthest pair to the closest one
    for (a, b) in pairs_at_increasing_separation().into_iter().rev() {
        let v = vincenty_unrounded(a.lat, a.lon, b.lat, b.lon, &e).unwrap();
        let s_err = (spherical(a.lat, a.lon, b.lat, b.lon, &e) - v).abs();
        let h_err = (hubeny(a.lat, a.lon, b.lat, b.lon, &e) - v).abs();

        assert!(s_err < last_spherical_error, "spherical error {s_err} at {v} m");
        assert!(h_err < last_hubeny_error, "hubeny error {h_err} at {v} m");
        assert!(s_err / v < 0.001, "spherical error {s_err} at {v} m");
        assert!(h_err / v < 0.001, "hubeny error {h_err} at {v} m");

        last_spherical_error = s_err;
        last_hubeny_error = h_err;
    }

    assert!(last_spherical_error < 1.0);
    assert!(last_hubeny_error < 0.001);
}

#[test]
fn ellipsoid_changes_result() {
    for algorithm in Algorithm::ALL {
        let wgs84 = TOKYO.distance_to(&TSUKUBA, algorithm, &Ellipsoid::WGS84).unwrap();
        let bessel = TOKYO.distance_to(&TSUKUBA, algorithm, &Ellipsoid::BESSEL).unwrap();

        if algorithm == Algorithm::Planar {
            assert_eq!(wgs84, bessel);
        } else {
            assert_ne!(wgs84, bessel, "{algorithm}");
        }
    }
}

#[test]
fn unknown_selectors() {
    assert!(matches!(
        "great-circle".parse::<Algorithm>(),
        Err(DistanceError::InvalidArgument(_))
    ));
    assert!(matches!(
        "clarke1866".parse::<Ellipsoid>(),
        Err(DistanceError::InvalidArgument(_))
    ));
}
