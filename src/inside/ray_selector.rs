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
    geometry::{aabb::Aabb3, axis::Axis, point::Point3, ray::Ray3, vector::Vector3},
    kernel::constructions::RayConstruction,
    numeric::scalar::Scalar,
};

/// Direction of the first probe: along `up`, toward the nearer box face on
/// that axis, so the ray leaves the box through the shorter side.
pub fn initial_direction<T: Scalar>(
    point: &Point3<T>,
    bbox: &Aabb3<T>,
    up: Axis,
    construction: &dyn RayConstruction<T>,
) -> Vector3<T> {
    let twice = point[up].clone() + point[up].clone();
    let span = bbox.min[up].clone() + bbox.max[up].clone();
    let mut components = [0.0; 3];
    components[up.index()] = if twice < span { -1.0 } else { 1.0 };
    let [dx, dy, dz] = components;
    construction.make_vector(dx, dy, dz)
}

pub fn initial_probe<T: Scalar>(
    point: &Point3<T>,
    bbox: &Aabb3<T>,
    up: Axis,
    construction: &dyn RayConstruction<T>,
) -> Ray3<T> {
    construction.make_ray(point, initial_direction(point, bbox, up, construction))
}
