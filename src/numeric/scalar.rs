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

use num_traits::{One, ToPrimitive, Zero};

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Sign of a scalar or of a geometric predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    pub fn from_ordering(ord: Ordering) -> Sign {
        match ord {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

/// Field type of a kernel.
///
/// Arithmetic is by value; borrowed operands are cloned by the caller. For
/// `f64` that is a copy, for exact rationals it is an allocation the
/// predicates would have paid for anyway.
pub trait Scalar:
    Clone
    + Debug
    + PartialOrd
    + Zero
    + One
    + ToPrimitive
    + From<i32>
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Converts a double into the field type.
    ///
    /// Exact types saturate non-finite input: NaN maps to zero and infinities
    /// to `±f64::MAX`.
    fn from_f64(value: f64) -> Self;

    fn from_num_den(num: i32, den: i32) -> Self {
        Self::from(num) / Self::from(den)
    }

    /// `false` only for NaN or infinite floating values.
    fn is_finite(&self) -> bool {
        true
    }

    fn sign(&self) -> Sign {
        match self.partial_cmp(&Self::zero()) {
            Some(ord) => Sign::from_ordering(ord),
            None => Sign::Zero,
        }
    }

    fn abs(&self) -> Self {
        if self.sign() == Sign::Negative {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_sign_and_abs() {
        assert_eq!((-2.5f64).sign(), Sign::Negative);
        assert_eq!(0.0f64.sign(), Sign::Zero);
        assert_eq!(Scalar::abs(&-2.5f64), 2.5);
        assert!(!Scalar::is_finite(&f64::NAN));
    }

    #[test]
    fn num_den_is_a_fraction() {
        assert_eq!(<f64 as Scalar>::from_num_den(1, 2), 0.5);
    }
}
