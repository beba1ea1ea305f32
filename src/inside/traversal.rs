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

use std::marker::PhantomData;

use crate::{
    geometry::{
        aabb::Aabb3,
        aabb_tree::{AabbTree, TraversalTraits},
        axis::Axis,
        ray::Ray3,
        triangle::{RayHit, Triangle3},
    },
    kernel::Kernel,
    numeric::scalar::Scalar,
};

/// Outcome of walking one ray through a triangle index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalStatus {
    /// The ray crossed a countable number of facets; `parity_odd` iff that
    /// number is odd.
    Determinate { parity_odd: bool },
    /// The ray origin lies on a facet.
    DeterminateOnBoundary,
    /// The ray grazes an edge or vertex, or runs inside a facet's plane, so
    /// the crossing count cannot be trusted.
    Indeterminate,
}

/// A read-only spatial index able to report the crossing parity of a ray.
///
/// Implementations must return `DeterminateOnBoundary` whenever the ray
/// origin lies on a facet, whatever the direction, `Determinate` for rays in
/// general position, and `Indeterminate` otherwise.
pub trait RayTraversal {
    type FT: Scalar;

    /// Box containing every indexed triangle.
    fn bbox(&self) -> &Aabb3<Self::FT>;

    fn traverse(&self, ray: &Ray3<Self::FT>) -> TraversalStatus;
}

enum Progress {
    Counting,
    OnBoundary,
    Indeterminate,
}

/// Counts ray crossings and stops at the first boundary or degenerate contact.
struct RayCrossingTraits<K: Kernel> {
    crossings: usize,
    progress: Progress,
    axis_ray: Option<(Axis, bool)>,
    _kernel: PhantomData<K>,
}

impl<K: Kernel> RayCrossingTraits<K> {
    fn new(ray: &Ray3<K::FT>) -> Self {
        RayCrossingTraits {
            crossings: 0,
            progress: Progress::Counting,
            axis_ray: ray.axis_direction(),
            _kernel: PhantomData,
        }
    }

    fn status(&self) -> TraversalStatus {
        match self.progress {
            Progress::Counting => TraversalStatus::Determinate {
                parity_odd: self.crossings % 2 == 1,
            },
            Progress::OnBoundary => TraversalStatus::DeterminateOnBoundary,
            Progress::Indeterminate => TraversalStatus::Indeterminate,
        }
    }
}

impl<K: Kernel> TraversalTraits<K::FT, Ray3<K::FT>> for RayCrossingTraits<K> {
    fn go_further(&self) -> bool {
        matches!(self.progress, Progress::Counting)
    }

    fn do_intersect(&self, ray: &Ray3<K::FT>, aabb: &Aabb3<K::FT>) -> bool {
        match self.axis_ray {
            // Axis-parallel probes only need the footprint and half-range check.
            Some((axis, positive)) => aabb.hit_by_axis_ray(&ray.origin, axis, positive),
            None => aabb.hit_by_ray(ray),
        }
    }

    fn intersection(&mut self, ray: &Ray3<K::FT>, primitive: &Triangle3<K::FT>) {
        match primitive.ray_hit::<K>(ray) {
            RayHit::Miss => {}
            RayHit::Crossing => self.crossings += 1,
            RayHit::OriginOnFacet => self.progress = Progress::OnBoundary,
            RayHit::Degenerate => self.progress = Progress::Indeterminate,
        }
    }
}

impl<K: Kernel> RayTraversal for AabbTree<K> {
    type FT = K::FT;

    fn bbox(&self) -> &Aabb3<K::FT> {
        AabbTree::bbox(self)
    }

    fn traverse(&self, ray: &Ray3<K::FT>) -> TraversalStatus {
        let mut traits = RayCrossingTraits::<K>::new(ray);
        self.traversal(ray, &mut traits);
        traits.status()
    }
}
