// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::vincenty::MAX_ITERATIONS;

/// Error conditions which may occur during [distance](crate::distance) computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// An unknown algorithm or ellipsoid selector was provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The [Vincenty](crate::vincenty) iteration has not converged within
    /// its iteration limit. This happens for nearly antipodal points.
    #[error("vincenty formula failed to converge within {MAX_ITERATIONS} iterations")]
    Convergence,
}
