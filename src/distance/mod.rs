// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod algorithm;
mod error;
mod hubeny;
mod planar;
mod spherical;
mod vincenty;

pub use algorithm::{distance, Algorithm};
pub use error::DistanceError;
pub use hubeny::hubeny;
pub use planar::planar;
pub use spherical::spherical;
pub use vincenty::{vincenty, vincenty_unrounded, CONVERGENCE_TOLERANCE, MAX_ITERATIONS};
