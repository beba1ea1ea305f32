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
    geometry::{axis::Axis, point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Half-line `origin + t * direction`, `t >= 0`. The direction is not normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray3<T: Scalar> {
    pub origin: Point3<T>,
    pub direction: Vector3<T>,
}

impl<T: Scalar> Ray3<T> {
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Ray3 { origin, direction }
    }

    /// Axis and sense for rays parallel to a coordinate axis.
    pub fn axis_direction(&self) -> Option<(Axis, bool)> {
        self.direction.axis_direction()
    }
}
