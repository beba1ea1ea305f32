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

use crate::{
    geometry::{aabb::Aabb3, axis::Axis, point::Point3, ray::Ray3},
    kernel::Kernel,
    numeric::scalar::{Scalar, Sign},
};

/// Position of a ray relative to one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayHit {
    /// The ray does not touch the closed triangle.
    Miss,
    /// The ray crosses the triangle's interior transversally.
    Crossing,
    /// The ray origin lies on the closed triangle.
    OriginOnFacet,
    /// The ray touches an edge or a vertex, or runs inside the triangle's
    /// plane and meets it. Counting this contact is unreliable.
    Degenerate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle3<T: Scalar> {
    vertices: [Point3<T>; 3],
}

impl<T: Scalar> Triangle3<T> {
    /// The winding order determines the normal direction via the right-hand rule:
    /// normal = (b - a) x (c - a)
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Triangle3 {
            vertices: [a, b, c],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<T>; 3] {
        &self.vertices
    }

    pub fn aabb(&self) -> Aabb3<T> {
        let [a, b, c] = &self.vertices;
        let mut bb = Aabb3::new(a.clone(), a.clone());
        bb.expand(b);
        bb.expand(c);
        bb
    }

    /// Three times the centroid coordinate along `axis`; orders triangles
    /// like the centroid does without a division.
    pub fn centroid_key(&self, axis: Axis) -> T {
        let [a, b, c] = &self.vertices;
        a[axis].clone() + b[axis].clone() + c[axis].clone()
    }

    /// Classifies `ray` against this triangle with the predicates of `K`.
    pub fn ray_hit<K: Kernel<FT = T>>(&self, ray: &Ray3<T>) -> RayHit {
        let [a, b, c] = &self.vertices;
        let p = &ray.origin;
        let d = &ray.direction;

        let side = K::orient3d(a, b, c, p);
        // Sign of normal · direction.
        let heading = K::det3(d, &a.vector_to(b), &a.vector_to(c));

        if side == Sign::Zero {
            if self.contains_coplanar::<K>(p) {
                return RayHit::OriginOnFacet;
            }
            if heading == Sign::Zero && self.coplanar_line_meets::<K>(ray) {
                return RayHit::Degenerate;
            }
            return RayHit::Miss;
        }

        // The origin is off the plane; the ray has to head toward it. A zero
        // heading still goes through the edge tests: an exact kernel then sees
        // mixed signs, a filtering one may not know the ray is parallel.
        if heading == side {
            return RayHit::Miss;
        }

        let (pa, pb, pc) = (p.vector_to(a), p.vector_to(b), p.vector_to(c));
        let edges = [K::det3(d, &pa, &pb), K::det3(d, &pb, &pc), K::det3(d, &pc, &pa)];

        let positives = edges.iter().filter(|s| **s == Sign::Positive).count();
        let negatives = edges.iter().filter(|s| **s == Sign::Negative).count();
        match (positives, negatives) {
            (3, 0) | (0, 3) if heading != Sign::Zero => RayHit::Crossing,
            (_, 0) | (0, _) => RayHit::Degenerate,
            _ => RayHit::Miss,
        }
    }

    /// Inclusive point-in-triangle test for a point known to lie in the
    /// triangle's plane. Degenerate triangles contain nothing.
    fn contains_coplanar<K: Kernel<FT = T>>(&self, p: &Point3<T>) -> bool {
        let Some(axis) = self.projection_axis() else {
            return false;
        };
        let [a, b, c] = self.vertices.each_ref().map(|v| v.project(axis));
        let p = p.project(axis);

        let orientation = K::orient2d(&a, &b, &c);
        if orientation == Sign::Zero {
            return false;
        }
        let opposite = orientation.flip();
        K::orient2d(&a, &b, &p) != opposite
            && K::orient2d(&b, &c, &p) != opposite
            && K::orient2d(&c, &a, &p) != opposite
    }

    /// For a ray lying in the triangle's plane: does its supporting line meet
    /// the closed triangle? Conservative, the part behind the origin counts.
    fn coplanar_line_meets<K: Kernel<FT = T>>(&self, ray: &Ray3<T>) -> bool {
        let Some(axis) = self.projection_axis() else {
            return false;
        };
        let zero = [T::zero(), T::zero()];
        let d = ray.direction.coords.clone();
        let (u, v) = axis.others();
        let d = [d[u.index()].clone(), d[v.index()].clone()];

        let mut sides = self.vertices.iter().map(|vertex| {
            let rel = ray.origin.vector_to(vertex);
            K::orient2d(&zero, &d, &[rel[u].clone(), rel[v].clone()])
        });
        let first = sides.next().unwrap_or(Sign::Zero);
        if first == Sign::Zero {
            return true;
        }
        !sides.all(|s| s == first)
    }

    fn projection_axis(&self) -> Option<Axis> {
        let [a, b, c] = &self.vertices;
        let normal = a.vector_to(b).cross(&a.vector_to(c));
        if normal.is_zero() {
            None
        } else {
            Some(normal.dominant_axis())
        }
    }
}
