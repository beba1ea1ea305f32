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

//! Point-in-solid membership test by vertical ray casting.
//!
//! A query point outside the index's box is outside. Otherwise a ray is shot
//! along the up axis toward the nearer box face and the facets it crosses are
//! counted: odd means inside. When the ray grazes an edge, a vertex, or runs
//! in a facet's plane, random directions are tried until one is in general
//! position with respect to the mesh.

pub mod classifier;
pub mod gate;
pub mod options;
pub mod ray_selector;
pub mod retry;
pub mod side_of_mesh;
pub mod traversal;

use std::sync::Mutex;

use tracing::{debug, trace};

pub use classifier::Verdict;
pub use options::{InsideOptions, SeedMode};
pub use retry::{DEFAULT_SEED, RetryController, SphereDirections};
pub use side_of_mesh::SideOfTriangleMesh;
pub use traversal::{RayTraversal, TraversalStatus};

use crate::{
    error::InsideError,
    geometry::point::Point3,
    kernel::constructions::{KernelConstruction, RayConstruction},
};
use retry::DirectionSource;

/// Membership tester. Holds configuration and, in [`SeedMode::Shared`],
/// the generator shared by its queries; the index is borrowed per call.
#[derive(Debug)]
pub struct PointInside {
    options: InsideOptions,
    shared: Mutex<SphereDirections>,
}

impl Default for PointInside {
    fn default() -> Self {
        Self::new(InsideOptions::default())
    }
}

impl PointInside {
    pub fn new(options: InsideOptions) -> Self {
        let shared = Mutex::new(SphereDirections::new(options.seed));
        PointInside { options, shared }
    }

    pub fn options(&self) -> &InsideOptions {
        &self.options
    }

    /// Classifies `point` against the closed surface indexed by `index`.
    pub fn classify<I>(&self, point: &Point3<I::FT>, index: &I) -> Result<Verdict, InsideError>
    where
        I: RayTraversal + ?Sized,
    {
        self.classify_with(point, index, &KernelConstruction)
    }

    /// Same as [`classify`](Self::classify), building every probe through
    /// `construction`.
    pub fn classify_with<I>(
        &self,
        point: &Point3<I::FT>,
        index: &I,
        construction: &dyn RayConstruction<I::FT>,
    ) -> Result<Verdict, InsideError>
    where
        I: RayTraversal + ?Sized,
    {
        if !point.is_finite() {
            return Err(InsideError::NonFiniteQuery);
        }

        let bbox = index.bbox();
        if !gate::admits(point, bbox) {
            trace!(?point, "outside index box");
            return Ok(Verdict::Outside);
        }

        let probe = ray_selector::initial_probe(point, bbox, self.options.up_axis, construction);
        let mut status = index.traverse(&probe);
        let mut retry: Option<RetryController<'_>> = None;

        loop {
            if let Some(verdict) = Verdict::from_status(status) {
                if let Some(controller) = &retry {
                    debug!(attempts = controller.attempts(), %verdict, "resolved after retries");
                }
                return Ok(verdict);
            }
            let controller = retry.get_or_insert_with(|| {
                debug!(?point, "axis probe indeterminate, retrying with random rays");
                self.retry_controller()
            });
            let probe = controller.next_probe(point, construction)?;
            status = index.traverse(&probe);
        }
    }

    fn retry_controller(&self) -> RetryController<'_> {
        let source = match self.options.seed_mode {
            SeedMode::PerQuery => DirectionSource::Owned(SphereDirections::new(self.options.seed)),
            SeedMode::Shared => DirectionSource::Shared(&self.shared),
        };
        RetryController::new(source, self.options.max_retries)
    }
}

/// Classifies `point` with default options.
pub fn classify<I>(point: &Point3<I::FT>, index: &I) -> Result<Verdict, InsideError>
where
    I: RayTraversal + ?Sized,
{
    PointInside::default().classify(point, index)
}
