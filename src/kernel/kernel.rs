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

use std::fmt::Debug;

use crate::{
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::{Scalar, Sign},
};

/// Predicates of a geometric kernel over its field type `FT`.
///
/// Kernels that cannot decide a sign exactly report [`Sign::Zero`] for the
/// uncertain cases, so callers treat them as degeneracies.
pub trait Kernel: Clone + Copy + Debug + Default + Send + Sync + 'static {
    type FT: Scalar;

    const NAME: &'static str;

    /// Sign of ((b-a) x (c-a)) · (d-a).
    fn orient3d(
        a: &Point3<Self::FT>,
        b: &Point3<Self::FT>,
        c: &Point3<Self::FT>,
        d: &Point3<Self::FT>,
    ) -> Sign;

    /// Sign of u · (v x w).
    fn det3(u: &Vector3<Self::FT>, v: &Vector3<Self::FT>, w: &Vector3<Self::FT>) -> Sign;

    // Sign of oriented area (CCW>0, CW<0, 0 if collinear)
    fn orient2d(a: &[Self::FT; 2], b: &[Self::FT; 2], c: &[Self::FT; 2]) -> Sign;
}
