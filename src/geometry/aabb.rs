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

use std::array::from_fn;

use crate::{
    geometry::{axis::Axis, point::Point3, ray::Ray3},
    numeric::scalar::{Scalar, Sign},
};

/// An axis-aligned bounding box, bounds inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb3<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Aabb3<T> {
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        Aabb3 { min, max }
    }

    pub fn min(&self) -> &Point3<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &Point3<T> {
        &self.max
    }

    /// Build the smallest AABB containing all `points`. `None` if empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<T>>,
        T: 'a,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut out = Aabb3::new(first.clone(), first.clone());
        for p in it {
            out.expand(p);
        }
        Some(out)
    }

    pub fn expand(&mut self, p: &Point3<T>) {
        for i in 0..3 {
            if p[i] < self.min[i] {
                self.min[i] = p[i].clone();
            }
            if p[i] > self.max[i] {
                self.max[i] = p[i].clone();
            }
        }
    }

    pub fn union(&self, other: &Aabb3<T>) -> Aabb3<T> {
        let mins = from_fn(|i| min_of(&self.min[i], &other.min[i]));
        let maxs = from_fn(|i| max_of(&self.max[i], &other.max[i]));
        Aabb3::new(Point3::from(mins), Point3::from(maxs))
    }

    /// Inclusive containment on all three axes.
    pub fn contains(&self, p: &Point3<T>) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Does this AABB intersect `other`?
    pub fn intersects(&self, other: &Aabb3<T>) -> bool {
        (0..3).all(|i| self.max[i] >= other.min[i] && other.max[i] >= self.min[i])
    }

    /// Center coordinate along `axis`.
    pub fn center(&self, axis: Axis) -> T {
        (self.min[axis.index()].clone() + self.max[axis.index()].clone()) / T::from(2)
    }

    /// Length along `axis`.
    pub fn extent(&self, axis: Axis) -> T {
        self.max[axis.index()].clone() - self.min[axis.index()].clone()
    }

    /// Return the axis with largest extent.
    pub fn longest_axis(&self) -> Axis {
        let mut best = Axis::X;
        let mut best_len = self.extent(Axis::X);
        for axis in [Axis::Y, Axis::Z] {
            let e = self.extent(axis);
            if e > best_len {
                best = axis;
                best_len = e;
            }
        }
        best
    }

    /// Ray test for rays parallel to a coordinate axis: the origin must fall
    /// in the box footprint on the two other axes, and the box must not lie
    /// entirely behind the origin.
    pub fn hit_by_axis_ray(&self, origin: &Point3<T>, axis: Axis, positive: bool) -> bool {
        let (u, v) = axis.others();
        let in_footprint = origin[u] >= self.min[u]
            && origin[u] <= self.max[u]
            && origin[v] >= self.min[v]
            && origin[v] <= self.max[v];
        if !in_footprint {
            return false;
        }
        if positive {
            origin[axis] <= self.max[axis]
        } else {
            origin[axis] >= self.min[axis]
        }
    }

    /// Slab test for arbitrary rays. Touching the boundary counts as a hit.
    pub fn hit_by_ray(&self, ray: &Ray3<T>) -> bool {
        if let Some((axis, positive)) = ray.axis_direction() {
            return self.hit_by_axis_ray(&ray.origin, axis, positive);
        }

        let mut t_enter = T::zero();
        let mut t_exit: Option<T> = None;
        for i in 0..3 {
            let o = &ray.origin[i];
            let d = &ray.direction[i];
            if d.sign() == Sign::Zero {
                if *o < self.min[i] || *o > self.max[i] {
                    return false;
                }
                continue;
            }
            let t_a = (self.min[i].clone() - o.clone()) / d.clone();
            let t_b = (self.max[i].clone() - o.clone()) / d.clone();
            let (near, far) = if t_a <= t_b { (t_a, t_b) } else { (t_b, t_a) };
            if near > t_enter {
                t_enter = near;
            }
            t_exit = Some(match t_exit {
                Some(t) if t <= far => t,
                _ => far,
            });
            if let Some(t) = &t_exit {
                if t_enter > *t {
                    return false;
                }
            }
        }
        true
    }
}

#[inline(always)]
fn min_of<T: Scalar>(a: &T, b: &T) -> T {
    if a < b { a.clone() } else { b.clone() }
}

#[inline(always)]
fn max_of<T: Scalar>(a: &T, b: &T) -> T {
    if a > b { a.clone() } else { b.clone() }
}
