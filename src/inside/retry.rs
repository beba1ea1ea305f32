// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    f64::consts::TAU,
    sync::{Mutex, PoisonError},
};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{trace, warn};

use crate::{
    error::InsideError,
    geometry::{point::Point3, ray::Ray3},
    kernel::constructions::RayConstruction,
    numeric::scalar::Scalar,
};

/// Seed of the retry directions; fixed so retry sequences reproduce between runs.
pub const DEFAULT_SEED: u64 = 1340818006;

/// Directions uniformly distributed on the unit sphere.
#[derive(Clone, Debug)]
pub struct SphereDirections {
    rng: StdRng,
}

impl SphereDirections {
    pub fn new(seed: u64) -> Self {
        SphereDirections {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Height uniform in [-1, 1] and azimuth uniform in [0, 2π) give a
    /// uniform distribution over the sphere.
    pub fn next_direction(&mut self) -> [f64; 3] {
        let z: f64 = self.rng.random_range(-1.0..=1.0);
        let alpha: f64 = self.rng.random_range(0.0..TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        [r * alpha.cos(), r * alpha.sin(), z]
    }
}

impl Iterator for SphereDirections {
    type Item = [f64; 3];

    fn next(&mut self) -> Option<[f64; 3]> {
        Some(self.next_direction())
    }
}

pub(crate) enum DirectionSource<'a> {
    Owned(SphereDirections),
    Shared(&'a Mutex<SphereDirections>),
}

impl DirectionSource<'_> {
    fn next_direction(&mut self) -> [f64; 3] {
        match self {
            DirectionSource::Owned(directions) => directions.next_direction(),
            DirectionSource::Shared(directions) => directions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .next_direction(),
        }
    }
}

/// Supplies replacement probes after an indeterminate traversal.
///
/// Probes keep the query point as origin and take a random direction. The
/// count includes the initial axis-aligned probe.
pub struct RetryController<'a> {
    source: DirectionSource<'a>,
    attempts: usize,
    max_retries: Option<usize>,
}

impl<'a> RetryController<'a> {
    pub(crate) fn new(source: DirectionSource<'a>, max_retries: Option<usize>) -> Self {
        RetryController {
            source,
            attempts: 1,
            max_retries,
        }
    }

    /// Independent controller drawing from its own generator.
    pub fn seeded(seed: u64, max_retries: Option<usize>) -> Self {
        Self::new(DirectionSource::Owned(SphereDirections::new(seed)), max_retries)
    }

    /// Traversals performed so far, the initial probe included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn next_probe<T: Scalar>(
        &mut self,
        origin: &Point3<T>,
        construction: &dyn RayConstruction<T>,
    ) -> Result<Ray3<T>, InsideError> {
        if let Some(max) = self.max_retries {
            if self.attempts > max {
                warn!(attempts = self.attempts, "retry cap reached");
                return Err(InsideError::RetriesExhausted {
                    attempts: self.attempts,
                });
            }
        }
        let [dx, dy, dz] = self.source.next_direction();
        self.attempts += 1;
        trace!(attempt = self.attempts, dx, dy, dz, "random probe");
        Ok(construction.make_ray(origin, construction.make_vector(dx, dy, dz)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::constructions::KernelConstruction;

    #[test]
    fn directions_are_unit_and_reproducible() {
        let a: Vec<[f64; 3]> = SphereDirections::new(DEFAULT_SEED).take(64).collect();
        let b: Vec<[f64; 3]> = SphereDirections::new(DEFAULT_SEED).take(64).collect();
        assert_eq!(a, b);
        for [x, y, z] in a {
            assert!((x * x + y * y + z * z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SphereDirections::new(1).next_direction();
        let b = SphereDirections::new(2).next_direction();
        assert_ne!(a, b);
    }

    #[test]
    fn cap_limits_random_probes() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let mut retry = RetryController::seeded(DEFAULT_SEED, Some(2));
        assert!(retry.next_probe(&origin, &KernelConstruction).is_ok());
        assert!(retry.next_probe(&origin, &KernelConstruction).is_ok());
        assert_eq!(retry.attempts(), 3);
        assert_eq!(
            retry.next_probe(&origin, &KernelConstruction),
            Err(InsideError::RetriesExhausted { attempts: 3 })
        );
    }

    #[test]
    fn shared_source_continues_its_sequence() {
        let shared = Mutex::new(SphereDirections::new(7));
        let mut first = DirectionSource::Shared(&shared);
        let d0 = first.next_direction();
        let mut second = DirectionSource::Shared(&shared);
        let d1 = second.next_direction();

        let mut fresh = SphereDirections::new(7);
        assert_eq!(d0, fresh.next_direction());
        assert_eq!(d1, fresh.next_direction());
    }
}
