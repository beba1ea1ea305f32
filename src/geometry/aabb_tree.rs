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

use std::{cmp::Ordering, marker::PhantomData};

use tracing::debug;

use crate::{
    error::MeshError,
    geometry::{aabb::Aabb3, triangle::Triangle3},
    kernel::Kernel,
    mesh::basic_types::TriangleMesh,
    numeric::scalar::Scalar,
};

enum AabbNode<T: Scalar> {
    Leaf {
        aabb: Aabb3<T>,
        primitive: usize,
    },
    Node {
        aabb: Aabb3<T>,
        left: Box<AabbNode<T>>,
        right: Box<AabbNode<T>>,
    },
}

impl<T: Scalar> AabbNode<T> {
    fn aabb(&self) -> &Aabb3<T> {
        match self {
            AabbNode::Leaf { aabb, .. } => aabb,
            AabbNode::Node { aabb, .. } => aabb,
        }
    }

    fn depth(&self) -> usize {
        match self {
            AabbNode::Leaf { .. } => 1,
            AabbNode::Node { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Callbacks driving [`AabbTree::traversal`].
///
/// Nodes whose box fails `do_intersect` are pruned; every surviving leaf
/// reports its triangle to `intersection`. Traversal ends as soon as
/// `go_further` turns false.
pub trait TraversalTraits<T: Scalar, Q> {
    fn go_further(&self) -> bool;
    fn do_intersect(&self, query: &Q, aabb: &Aabb3<T>) -> bool;
    fn intersection(&mut self, query: &Q, primitive: &Triangle3<T>);
}

/// Static AABB tree over an immutable set of triangles.
pub struct AabbTree<K: Kernel> {
    triangles: Vec<Triangle3<K::FT>>,
    root: AabbNode<K::FT>,
    _kernel: PhantomData<K>,
}

impl<K: Kernel> AabbTree<K> {
    /// Build an AABB tree over `triangles` via recursive median split along
    /// the longest axis of each node's box.
    pub fn build(triangles: Vec<Triangle3<K::FT>>) -> Result<Self, MeshError> {
        if triangles.is_empty() {
            return Err(MeshError::Empty);
        }

        let items: Vec<(Aabb3<K::FT>, usize)> = triangles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.aabb(), i))
            .collect();
        let root = Self::build_binary_tree(&triangles, items);
        debug!(
            kernel = K::NAME,
            triangles = triangles.len(),
            depth = root.depth(),
            "built AABB tree"
        );

        Ok(AabbTree {
            triangles,
            root,
            _kernel: PhantomData,
        })
    }

    /// Validates `mesh` and builds a tree over its faces.
    pub fn from_mesh(mesh: &TriangleMesh<K::FT>) -> Result<Self, MeshError> {
        mesh.validate()?;
        Self::build(mesh.triangles().collect())
    }

    fn build_binary_tree(
        triangles: &[Triangle3<K::FT>],
        mut items: Vec<(Aabb3<K::FT>, usize)>,
    ) -> AabbNode<K::FT> {
        if items.len() == 1 {
            let (aabb, primitive) = items.remove(0);
            return AabbNode::Leaf { aabb, primitive };
        }

        let mut bounds = items[0].0.clone();
        for (aabb, _) in &items[1..] {
            bounds = bounds.union(aabb);
        }
        let axis = bounds.longest_axis();
        items.sort_by(|(_, a), (_, b)| {
            triangles[*a]
                .centroid_key(axis)
                .partial_cmp(&triangles[*b].centroid_key(axis))
                .unwrap_or(Ordering::Equal)
        });

        let mid = items.len() / 2;
        let right_items = items.split_off(mid); // items = left half

        let left = Box::new(Self::build_binary_tree(triangles, items));
        let right = Box::new(Self::build_binary_tree(triangles, right_items));

        AabbNode::Node {
            aabb: bounds,
            left,
            right,
        }
    }

    /// Box containing every indexed triangle.
    pub fn bbox(&self) -> &Aabb3<K::FT> {
        self.root.aabb()
    }

    pub fn size(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangles(&self) -> &[Triangle3<K::FT>] {
        &self.triangles
    }

    /// Collect the indices of all triangles whose box intersects `query`.
    pub fn query(&self, query: &Aabb3<K::FT>, out: &mut Vec<usize>) {
        Self::query_node(&self.root, query, out);
    }

    fn query_node(node: &AabbNode<K::FT>, query: &Aabb3<K::FT>, out: &mut Vec<usize>) {
        if !node.aabb().intersects(query) {
            return;
        }
        match node {
            AabbNode::Leaf { primitive, .. } => out.push(*primitive),
            AabbNode::Node { left, right, .. } => {
                Self::query_node(left, query, out);
                Self::query_node(right, query, out);
            }
        }
    }

    /// Depth-first walk, left child first, pruning with `traits`.
    pub fn traversal<Q, Tr>(&self, query: &Q, traits: &mut Tr)
    where
        Tr: TraversalTraits<K::FT, Q>,
    {
        self.traverse_node(&self.root, query, traits);
    }

    fn traverse_node<Q, Tr>(&self, node: &AabbNode<K::FT>, query: &Q, traits: &mut Tr)
    where
        Tr: TraversalTraits<K::FT, Q>,
    {
        if !traits.go_further() || !traits.do_intersect(query, node.aabb()) {
            return;
        }
        match node {
            AabbNode::Leaf { primitive, .. } => {
                traits.intersection(query, &self.triangles[*primitive]);
            }
            AabbNode::Node { left, right, .. } => {
                self.traverse_node(left, query, traits);
                self.traverse_node(right, query, traits);
            }
        }
    }
}
