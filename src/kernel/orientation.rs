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
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T {
    let (dx1, dy1) = (b[0].clone() - a[0].clone(), b[1].clone() - a[1].clone());
    let (dx2, dy2) = (c[0].clone() - a[0].clone(), c[1].clone() - a[1].clone());
    dx1 * dy2 - dy1 * dx2
}

/// Magnitude bound of the terms in [`orient2d`], for floating error filters.
pub fn orient2d_permanent<T: Scalar>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T {
    let (dx1, dy1) = (b[0].clone() - a[0].clone(), b[1].clone() - a[1].clone());
    let (dx2, dy2) = (c[0].clone() - a[0].clone(), c[1].clone() - a[1].clone());
    (dx1 * dy2).abs() + (dy1 * dx2).abs()
}

/// Determinant `u · (v × w)`.
pub fn det3<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>, w: &Vector3<T>) -> T {
    u.dot(&v.cross(w))
}

/// Sum of absolute values of the six products of [`det3`].
pub fn det3_permanent<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>, w: &Vector3<T>) -> T {
    let c = |a: &T, b: &T, x: &T, y: &T| (a.clone() * b.clone()).abs() + (x.clone() * y.clone()).abs();
    u[0].abs() * c(&v[1], &w[2], &v[2], &w[1])
        + u[1].abs() * c(&v[2], &w[0], &v[0], &w[2])
        + u[2].abs() * c(&v[0], &w[1], &v[1], &w[0])
}

/// Signed volume of tetra (a,b,c,d): ((b-a) x (c-a)) · (d-a).
///
/// Positive when `d` lies on the side of plane `abc` that sees `a, b, c`
/// counter-clockwise.
pub fn orient3d<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let ad = a.vector_to(d);
    ab.cross(&ac).dot(&ad)
}

pub fn orient3d_permanent<T: Scalar>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    d: &Point3<T>,
) -> T {
    det3_permanent(&a.vector_to(d), &a.vector_to(b), &a.vector_to(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = [0.0, 0.0];
        let b = [1.0, 0.0];
        let c = [0.0, 1.0];

        assert!(orient2d(&a, &b, &c) > 0.0); // Counter-clockwise
    }

    #[test]
    fn orientation_3d_positive_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0); // above the abc plane

        assert!(orient3d(&a, &b, &c, &d) > 0.0);
    }

    #[test]
    fn orientation_3d_negative_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, -1.0); // below the abc plane

        assert!(orient3d(&a, &b, &c, &d) < 0.0);
    }

    #[test]
    fn det3_matches_orient3d() {
        let a = Point3::new(0.5, -1.0, 2.0);
        let b = Point3::new(1.0, 0.0, 0.25);
        let c = Point3::new(-3.0, 1.0, 0.0);
        let d = Point3::new(2.0, 2.0, 2.0);

        let via_vectors = det3(&a.vector_to(&d), &a.vector_to(&b), &a.vector_to(&c));
        assert!((orient3d(&a, &b, &c, &d) - via_vectors).abs() < 1e-12);
        assert!(orient3d_permanent(&a, &b, &c, &d) >= via_vectors.abs());
    }
}
