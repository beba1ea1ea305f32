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
    array::from_fn,
    ops::{Index, IndexMut},
};

use crate::{
    geometry::{axis::Axis, vector::Vector3},
    numeric::scalar::Scalar,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { coords: [x, y, z] }
    }

    /// Builds a point in any field type from double coordinates.
    pub fn from_f64s(x: f64, y: f64, z: f64) -> Self {
        Point3::new(T::from_f64(x), T::from_f64(y), T::from_f64(z))
    }

    pub fn origin() -> Self {
        Point3 {
            coords: from_fn(|_| T::zero()),
        }
    }

    pub fn x(&self) -> &T {
        &self.coords[0]
    }

    pub fn y(&self) -> &T {
        &self.coords[1]
    }

    pub fn z(&self) -> &T {
        &self.coords[2]
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// `other - self`.
    pub fn vector_to(&self, other: &Self) -> Vector3<T> {
        Vector3 {
            coords: from_fn(|i| other.coords[i].clone() - self.coords[i].clone()),
        }
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        let two = T::from(2);
        Point3 {
            coords: from_fn(|i| (self.coords[i].clone() + other.coords[i].clone()) / two.clone()),
        }
    }

    /// Drops the coordinate along `axis`, keeping the other two in cyclic order.
    pub fn project(&self, axis: Axis) -> [T; 2] {
        let (u, v) = axis.others();
        [self[u].clone(), self[v].clone()]
    }

    /// Converts the coordinates into another field type through `f64`.
    pub fn cast<U: Scalar>(&self) -> Point3<U> {
        Point3 {
            coords: from_fn(|i| U::from_f64(self.coords[i].to_f64().unwrap_or(f64::NAN))),
        }
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Point3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Scalar> Index<Axis> for Point3<T> {
    type Output = T;
    fn index(&self, axis: Axis) -> &T {
        &self.coords[axis.index()]
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        Point3 { coords }
    }
}

impl<T: Scalar> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        p.coords
    }
}
