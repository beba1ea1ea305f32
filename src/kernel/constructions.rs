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
    geometry::{point::Point3, ray::Ray3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Ray and vector construction for a numeric representation.
///
/// The membership test only builds probes through this capability, so
/// callers with a different coordinate system (scaled integers, snapped
/// grids) inject their own.
pub trait RayConstruction<T: Scalar> {
    fn make_vector(&self, dx: f64, dy: f64, dz: f64) -> Vector3<T>;

    fn make_ray(&self, origin: &Point3<T>, direction: Vector3<T>) -> Ray3<T>;
}

/// Default construction: converts components with [`Scalar::from_f64`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KernelConstruction;

impl<T: Scalar> RayConstruction<T> for KernelConstruction {
    fn make_vector(&self, dx: f64, dy: f64, dz: f64) -> Vector3<T> {
        Vector3::new(T::from_f64(dx), T::from_f64(dy), T::from_f64(dz))
    }

    fn make_ray(&self, origin: &Point3<T>, direction: Vector3<T>) -> Ray3<T> {
        Ray3::new(origin.clone(), direction)
    }
}

/// Construction from a pair of closures.
pub struct FnConstruction<V, R> {
    vector: V,
    ray: R,
}

impl<V, R> FnConstruction<V, R> {
    pub fn new(vector: V, ray: R) -> Self {
        FnConstruction { vector, ray }
    }
}

impl<T, V, R> RayConstruction<T> for FnConstruction<V, R>
where
    T: Scalar,
    V: Fn(f64, f64, f64) -> Vector3<T>,
    R: Fn(&Point3<T>, Vector3<T>) -> Ray3<T>,
{
    fn make_vector(&self, dx: f64, dy: f64, dz: f64) -> Vector3<T> {
        (self.vector)(dx, dy, dz)
    }

    fn make_ray(&self, origin: &Point3<T>, direction: Vector3<T>) -> Ray3<T> {
        (self.ray)(origin, direction)
    }
}
