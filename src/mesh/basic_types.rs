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
    error::MeshError,
    geometry::{aabb::Aabb3, point::Point3, triangle::Triangle3},
    numeric::scalar::Scalar,
};

/// Indexed triangle soup: shared vertex positions and faces as vertex
/// index triples, counter-clockwise seen from outside.
#[derive(Debug, Clone)]
pub struct TriangleMesh<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub faces: Vec<[usize; 3]>,
}

impl<T: Scalar> Default for TriangleMesh<T> {
    fn default() -> Self {
        TriangleMesh {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<T: Scalar> TriangleMesh<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, p: Point3<T>) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) -> usize {
        self.faces.push([a, b, c]);
        self.faces.len() - 1
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Checks that the mesh has faces and that every face references three
    /// distinct existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.faces.is_empty() {
            return Err(MeshError::Empty);
        }
        let vertex_count = self.vertices.len();
        for (face, idx) in self.faces.iter().enumerate() {
            for (k, &vertex) in idx.iter().enumerate() {
                if vertex >= vertex_count {
                    return Err(MeshError::VertexOutOfRange {
                        face,
                        vertex,
                        vertex_count,
                    });
                }
                if idx[..k].contains(&vertex) {
                    return Err(MeshError::RepeatedVertex { face, vertex });
                }
            }
        }
        Ok(())
    }

    /// Geometric triangles, in face order. Assumes a validated mesh.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle3<T>> + '_ {
        self.faces.iter().map(|&[a, b, c]| {
            Triangle3::new(
                self.vertices[a].clone(),
                self.vertices[b].clone(),
                self.vertices[c].clone(),
            )
        })
    }

    pub fn bbox(&self) -> Option<Aabb3<T>> {
        Aabb3::from_points(&self.vertices)
    }

    /// Converts the coordinates into another field type through `f64`.
    pub fn cast<U: Scalar>(&self) -> TriangleMesh<U> {
        TriangleMesh {
            vertices: self.vertices.iter().map(|p| p.cast()).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Axis-aligned box `[min, max]` as 8 vertices and 12 outward-facing triangles.
    pub fn cuboid(min: Point3<T>, max: Point3<T>) -> Self {
        let mut mesh = Self::new();
        for i in 0..8usize {
            let pick = |bit: usize, axis: usize| {
                if i & bit == 0 {
                    min[axis].clone()
                } else {
                    max[axis].clone()
                }
            };
            mesh.add_vertex(Point3::new(pick(1, 0), pick(2, 1), pick(4, 2)));
        }
        // Vertex i has x from bit 0, y from bit 1, z from bit 2.
        const FACES: [[usize; 3]; 12] = [
            [0, 2, 1],
            [1, 2, 3], // z = min
            [4, 5, 6],
            [5, 7, 6], // z = max
            [0, 1, 4],
            [1, 5, 4], // y = min
            [2, 6, 3],
            [3, 6, 7], // y = max
            [0, 4, 2],
            [2, 4, 6], // x = min
            [1, 3, 5],
            [3, 7, 5], // x = max
        ];
        for [a, b, c] in FACES {
            mesh.add_triangle(a, b, c);
        }
        mesh
    }
}
