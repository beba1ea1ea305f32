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

use std::fmt;

use crate::inside::traversal::TraversalStatus;

/// Position of a query point relative to a closed surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Inside,
    Outside,
    OnBoundary,
}

impl Verdict {
    /// Even-odd rule: an interior point's ray crosses the surface an odd
    /// number of times. `None` while the status is indeterminate.
    pub fn from_status(status: TraversalStatus) -> Option<Verdict> {
        match status {
            TraversalStatus::DeterminateOnBoundary => Some(Verdict::OnBoundary),
            TraversalStatus::Determinate { parity_odd: true } => Some(Verdict::Inside),
            TraversalStatus::Determinate { parity_odd: false } => Some(Verdict::Outside),
            TraversalStatus::Indeterminate => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Inside => "inside",
            Verdict::Outside => "outside",
            Verdict::OnBoundary => "on boundary",
        };
        f.write_str(s)
    }
}
