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
    ops::{Index, Neg},
};

use crate::{
    geometry::axis::Axis,
    numeric::scalar::{Scalar, Sign},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector3<T: Scalar> {
    pub coords: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { coords: [x, y, z] }
    }

    pub fn zero() -> Self {
        Vector3 {
            coords: from_fn(|_| T::zero()),
        }
    }

    /// Unit vector along `axis`, pointing toward `+` or `-` by `positive`.
    pub fn along(axis: Axis, positive: bool) -> Self {
        let mut v = Self::zero();
        v.coords[axis.index()] = if positive { T::one() } else { -T::one() };
        v
    }

    pub fn dot(&self, other: &Self) -> T {
        let [a0, a1, a2] = self.coords.clone();
        let [b0, b1, b2] = other.coords.clone();
        a0 * b0 + a1 * b1 + a2 * b2
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = &self.coords;
        let [b0, b1, b2] = &other.coords;
        Vector3 {
            coords: [
                a1.clone() * b2.clone() - a2.clone() * b1.clone(),
                a2.clone() * b0.clone() - a0.clone() * b2.clone(),
                a0.clone() * b1.clone() - a1.clone() * b0.clone(),
            ],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.sign() == Sign::Zero)
    }

    /// The single axis this vector runs along, with its direction, or `None`
    /// when more than one component is non-zero (or all are).
    pub fn axis_direction(&self) -> Option<(Axis, bool)> {
        let mut found = None;
        for axis in Axis::ALL {
            match self[axis].sign() {
                Sign::Zero => continue,
                s if found.is_none() => found = Some((axis, s == Sign::Positive)),
                _ => return None,
            }
        }
        found
    }

    /// Axis of the component with the largest magnitude.
    pub fn dominant_axis(&self) -> Axis {
        let mut best = Axis::X;
        let mut best_abs = self[Axis::X].abs();
        for axis in [Axis::Y, Axis::Z] {
            let a = self[axis].abs();
            if a > best_abs {
                best = axis;
                best_abs = a;
            }
        }
        best
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Scalar> Index<Axis> for Vector3<T> {
    type Output = T;
    fn index(&self, axis: Axis) -> &T {
        &self.coords[axis.index()]
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Vector3<T> {
        Vector3 {
            coords: self.coords.map(|c| -c),
        }
    }
}
