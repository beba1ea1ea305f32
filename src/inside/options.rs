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

use crate::{geometry::axis::Axis, inside::retry::DEFAULT_SEED};

/// How retry directions are drawn across queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedMode {
    /// Each query that needs retries starts a fresh generator from the seed.
    #[default]
    PerQuery,
    /// One generator per tester, shared by all its queries behind a mutex.
    /// Sequences are reproducible only for single-threaded call orders.
    Shared,
}

/// Configuration of [`PointInside`](crate::inside::PointInside).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InsideOptions {
    /// Axis of the first, axis-aligned probe.
    pub up_axis: Axis,
    pub seed: u64,
    pub seed_mode: SeedMode,
    /// Random probes allowed after the first one; `None` retries until a
    /// traversal is determinate.
    pub max_retries: Option<usize>,
}

impl Default for InsideOptions {
    fn default() -> Self {
        InsideOptions {
            up_axis: Axis::Z,
            seed: DEFAULT_SEED,
            seed_mode: SeedMode::PerQuery,
            max_retries: None,
        }
    }
}

impl InsideOptions {
    pub fn with_up_axis(mut self, axis: Axis) -> Self {
        self.up_axis = axis;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_seed_mode(mut self, mode: SeedMode) -> Self {
        self.seed_mode = mode;
        self
    }

    pub fn with_max_retries(mut self, max_retries: Option<usize>) -> Self {
        self.max_retries = max_retries;
        self
    }
}
