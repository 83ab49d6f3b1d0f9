// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{DistanceError, Ellipsoid};

/// Maximum number of refinements of λ (longitude on the auxiliary sphere)
/// before [vincenty] gives up with [DistanceError::Convergence].
pub const MAX_ITERATIONS: usize = 20;

/// Iteration stops once λ changes by less than this amount, in radians.
/// 1e-12 rad corresponds to roughly 0.006 mm on Earth's surface.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Quantities on the auxiliary sphere, as determined by the last iteration.
#[derive(Debug, Clone, Copy)]
struct Auxiliary {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

/// Calculates the geodesic distance between two lat-lon positions on the provided
/// [Ellipsoid] using [Vincenty's inverse formula](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
/// Returns the result in meters, rounded to millimeters.
///
/// Returns [DistanceError::Convergence] if the iteration does not converge within
/// [MAX_ITERATIONS] steps, which happens for nearly antipodal points.
pub fn vincenty(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    ellipsoid: &Ellipsoid,
) -> Result<f64, DistanceError> {
    vincenty_unrounded(lat1, lon1, lat2, lon2, ellipsoid).map(round_to_millimeters)
}

/// Same as [vincenty], but without rounding the result to millimeters.
pub fn vincenty_unrounded(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    ellipsoid: &Ellipsoid,
) -> Result<f64, DistanceError> {
    let f = ellipsoid.flattening();

    let l = (lon2 - lon1).to_radians();

    // Reduced latitudes, i.e. latitudes on the auxiliary sphere
    let u1 = ((1.0 - f) * lat1.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;

    for iteration in 1..=MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        if sin_sigma == 0.0 {
            // Coincident points
            return Ok(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        let mut cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
        if cos_2sigma_m.is_nan() {
            // Both points on the equator: cos_sq_alpha == 0
            cos_2sigma_m = 0.0;
        }

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < CONVERGENCE_TOLERANCE {
            log::trace!("vincenty: converged after {iteration} iterations");
            let aux = Auxiliary {
                sin_sigma,
                cos_sigma,
                sigma,
                cos_sq_alpha,
                cos_2sigma_m,
            };
            return Ok(geodesic_length(ellipsoid, &aux));
        }
    }

    log::trace!(
        "vincenty: no convergence after {MAX_ITERATIONS} iterations for \
        ({lat1}, {lon1}) -> ({lat2}, {lon2})"
    );
    Err(DistanceError::Convergence)
}

/// Maps the arc length on the auxiliary sphere back onto the ellipsoid.
fn geodesic_length(ellipsoid: &Ellipsoid, aux: &Auxiliary) -> f64 {
    let a = ellipsoid.a;
    let b = ellipsoid.b;

    let u_sq = aux.cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let cos_2sigma_m_sq = aux.cos_2sigma_m * aux.cos_2sigma_m;
    let delta_sigma = big_b
        * aux.sin_sigma
        * (aux.cos_2sigma_m
            + big_b / 4.0
                * (aux.cos_sigma * (-1.0 + 2.0 * cos_2sigma_m_sq)
                    - big_b / 6.0
                        * aux.cos_2sigma_m
                        * (-3.0 + 4.0 * aux.sin_sigma * aux.sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m_sq)));

    b * big_a * (aux.sigma - delta_sigma)
}

#[inline]
fn round_to_millimeters(meters: f64) -> f64 {
    (meters * 1000.0).round() / 1000.0
}
