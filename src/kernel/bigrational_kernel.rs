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
    kernel::{
        kernel::Kernel,
        orientation::{det3, orient2d, orient3d},
    },
    numeric::{rational::Rational, scalar::{Scalar, Sign}},
};

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP).
/// Every predicate is exact.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalKernel;

impl Kernel for RationalKernel {
    type FT = Rational;

    const NAME: &'static str = "rational";

    fn orient3d(
        a: &Point3<Rational>,
        b: &Point3<Rational>,
        c: &Point3<Rational>,
        d: &Point3<Rational>,
    ) -> Sign {
        orient3d(a, b, c, d).sign()
    }

    fn det3(u: &Vector3<Rational>, v: &Vector3<Rational>, w: &Vector3<Rational>) -> Sign {
        det3(u, v, w).sign()
    }

    fn orient2d(a: &[Rational; 2], b: &[Rational; 2], c: &[Rational; 2]) -> Sign {
        orient2d(a, b, c).sign()
    }
}
