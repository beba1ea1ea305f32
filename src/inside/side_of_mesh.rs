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
    error::{InsideError, MeshError},
    geometry::{aabb_tree::AabbTree, point::Point3},
    inside::{InsideOptions, PointInside, Verdict},
    kernel::Kernel,
    mesh::basic_types::TriangleMesh,
};

/// Owns an AABB tree over a closed triangle mesh and classifies points
/// against it.
pub struct SideOfTriangleMesh<K: Kernel> {
    tree: AabbTree<K>,
    tester: PointInside,
}

impl<K: Kernel> SideOfTriangleMesh<K> {
    pub fn new(mesh: &TriangleMesh<K::FT>) -> Result<Self, MeshError> {
        Self::with_options(mesh, InsideOptions::default())
    }

    pub fn with_options(mesh: &TriangleMesh<K::FT>, options: InsideOptions) -> Result<Self, MeshError> {
        Ok(SideOfTriangleMesh {
            tree: AabbTree::from_mesh(mesh)?,
            tester: PointInside::new(options),
        })
    }

    pub fn classify(&self, point: &Point3<K::FT>) -> Result<Verdict, InsideError> {
        self.tester.classify(point, &self.tree)
    }

    pub fn tree(&self) -> &AabbTree<K> {
        &self.tree
    }
}
