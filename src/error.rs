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

use thiserror::Error;

/// Failures of the point membership test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsideError {
    /// The configured retry cap was reached without a determinate traversal.
    #[error("no determinate ray traversal after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
    /// A query coordinate is NaN or infinite.
    #[error("query point has a non-finite coordinate")]
    NonFiniteQuery,
}

/// Invalid triangle meshes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("mesh has no faces")]
    Empty,
    #[error("face {face} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("face {face} repeats vertex {vertex}")]
    RepeatedVertex { face: usize, vertex: usize },
}

/// Errors of the OFF reader and writer.
#[derive(Debug, Error)]
pub enum OffError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors of the classification evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("ground truth has {ground_truth} items but result has {result}")]
    LengthMismatch { ground_truth: usize, result: usize },
    #[error("item {item}: label index {index} is outside 0..{label_count}")]
    LabelOutOfRange {
        item: usize,
        index: i32,
        label_count: usize,
    },
}

/// Errors while ingesting point records into a point set.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("property `{name}` already exists with a different value type")]
    PropertyType { name: &'static str },
}
