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

use solidcast::{
    error::MeshError,
    geometry::{Aabb3, Point3},
    kernel::{F64Kernel, Kernel},
    mesh::TriangleMesh,
    numeric::{Rational, Sign},
};

#[test]
fn test_add_vertices_and_triangle() {
    let mut mesh = TriangleMesh::<f64>::new();

    let v0 = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    let v1 = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
    let v2 = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
    assert_eq!((v0, v1, v2), (0, 1, 2));

    let face = mesh.add_triangle(v0, v1, v2);
    assert_eq!(face, 0);
    assert_eq!(mesh.num_faces(), 1);
    assert!(mesh.validate().is_ok());

    let triangle = mesh.triangles().next().unwrap();
    assert_eq!(triangle.vertices()[1], Point3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_validate() {
    assert_eq!(TriangleMesh::<f64>::new().validate(), Err(MeshError::Empty));

    let mut mesh = TriangleMesh::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    assert!(mesh.validate().is_ok());
    mesh.add_triangle(0, 8, 1);
    assert_eq!(
        mesh.validate(),
        Err(MeshError::VertexOutOfRange { face: 12, vertex: 8, vertex_count: 8 })
    );
}

#[test]
fn test_cuboid_faces_point_outward() {
    let mesh = TriangleMesh::cuboid(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
    assert_eq!(mesh.num_vertices(), 8);
    assert_eq!(mesh.num_faces(), 12);
    assert_eq!(
        mesh.bbox(),
        Some(Aabb3::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0)))
    );

    // The center sees every face clockwise, so it lies on the negative side.
    let center = Point3::new(0.0, 0.0, 0.0);
    for t in mesh.triangles() {
        let [a, b, c] = t.vertices();
        assert_eq!(F64Kernel::orient3d(a, b, c, &center), Sign::Negative);
    }
}

#[test]
fn test_cast_to_rational() {
    let mesh = TriangleMesh::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.25, 1.0));
    let exact = mesh.cast::<Rational>();
    assert_eq!(exact.faces, mesh.faces);
    assert_eq!(exact.vertices[7], Point3::new(Rational::new(1, 2), Rational::new(1, 4), Rational::new(1, 1)));
}
