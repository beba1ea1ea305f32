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
        orientation::{det3, det3_permanent, orient2d, orient2d_permanent, orient3d, orient3d_permanent},
    },
    numeric::scalar::{Scalar, Sign},
};

// Relative error bounds for the determinants, with margin over the
// classical first-stage filter constants.
const ORIENT2D_BOUND: f64 = 4.0 * f64::EPSILON;
const DET3_BOUND: f64 = 8.0 * f64::EPSILON;

/// Double precision kernel with a static error filter: a determinant whose
/// magnitude does not clear the rounding bound is reported as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct F64Kernel;

#[inline(always)]
fn filtered_sign(det: f64, permanent: f64, bound: f64) -> Sign {
    if !det.is_finite() || det.abs() <= permanent * bound {
        Sign::Zero
    } else {
        det.sign()
    }
}

impl Kernel for F64Kernel {
    type FT = f64;

    const NAME: &'static str = "f64";

    fn orient3d(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>, d: &Point3<f64>) -> Sign {
        filtered_sign(
            orient3d(a, b, c, d),
            orient3d_permanent(a, b, c, d),
            DET3_BOUND,
        )
    }

    fn det3(u: &Vector3<f64>, v: &Vector3<f64>, w: &Vector3<f64>) -> Sign {
        filtered_sign(det3(u, v, w), det3_permanent(u, v, w), DET3_BOUND)
    }

    fn orient2d(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> Sign {
        filtered_sign(
            orient2d(a, b, c),
            orient2d_permanent(a, b, c),
            ORIENT2D_BOUND,
        )
    }
}
