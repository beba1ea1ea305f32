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
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::{One, ToPrimitive, Zero};

use crate::numeric::scalar::Scalar;

/// Exact rational backed by GMP through `rug`.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Rational(pub rug::Rational);

impl Rational {
    pub fn new(num: i64, den: i64) -> Self {
        Rational(rug::Rational::from((num, den)))
    }

    /// Exact conversion; `None` for NaN or infinities.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        rug::Rational::from_f64(value).map(Rational)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        Rational(self.0 / rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational(rug::Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational(rug::Rational::from(1))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational(rug::Rational::from(value))
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().numer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().numer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl Scalar for Rational {
    fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Rational::zero();
        }
        let clamped = value.clamp(-f64::MAX, f64::MAX);
        Rational::try_from_f64(clamped).unwrap_or_default()
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        Rational(rug::Rational::from((num, den)))
    }

    fn sign(&self) -> crate::numeric::scalar::Sign {
        crate::numeric::scalar::Sign::from_ordering(self.0.cmp0())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_convert_exactly() {
        let r = Rational::from_f64(0.1);
        // 0.1 is not representable; the rational must carry the exact binary value.
        assert_ne!(r, Rational::new(1, 10));
        assert_eq!(r.to_f64(), Some(0.1));
    }

    #[test]
    fn non_finite_input_saturates() {
        assert!(Rational::from_f64(f64::NAN).is_zero());
        assert_eq!(Rational::from_f64(f64::INFINITY).to_f64(), Some(f64::MAX));
    }

    #[test]
    fn truncating_integer_conversion() {
        assert_eq!(Rational::new(7, 2).to_i64(), Some(3));
        assert_eq!(Rational::new(-7, 2).to_i64(), Some(-3));
    }
}
