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

use std::io::Cursor;

use solidcast::{
    error::{MeshError, OffError},
    geometry::Point3,
    inside::{SideOfTriangleMesh, Verdict},
    io::{parse_off, read_off, write_off, write_off_to},
    kernel::F64Kernel,
    mesh::TriangleMesh,
};

const QUAD_CUBE: &str = "\
OFF
# unit cube with quad faces
8 6 12
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
4 0 2 3 1
4 4 5 7 6
4 0 1 5 4
4 2 6 7 3
4 0 4 6 2
4 1 3 7 5
";

#[test]
fn test_polygons_are_fan_triangulated() {
    let mesh: TriangleMesh<f64> = parse_off(Cursor::new(QUAD_CUBE)).unwrap();
    assert_eq!(mesh.num_vertices(), 8);
    assert_eq!(mesh.num_faces(), 12);
    assert_eq!(mesh.faces[0], [0, 2, 3]);
    assert_eq!(mesh.faces[1], [0, 3, 1]);

    let side = SideOfTriangleMesh::<F64Kernel>::new(&mesh).unwrap();
    assert_eq!(side.classify(&Point3::new(0.3, 0.2, 0.4)), Ok(Verdict::Inside));
    assert_eq!(side.classify(&Point3::new(0.3, 0.2, 1.0)), Ok(Verdict::OnBoundary));
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    let bad_header = parse_off::<f64, _>(Cursor::new("OFFX\n0 0 0\n"));
    assert!(matches!(bad_header, Err(OffError::Parse { line: 1, .. })));

    let bad_coord = parse_off::<f64, _>(Cursor::new("OFF\n1 0 0\n0 zero 0\n"));
    assert!(matches!(bad_coord, Err(OffError::Parse { line: 3, .. })));

    let truncated = parse_off::<f64, _>(Cursor::new("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1\n"));
    assert!(matches!(truncated, Err(OffError::Parse { line: 6, .. })));

    let two_gon = parse_off::<f64, _>(Cursor::new("OFF\n2 1 0\n0 0 0\n1 0 0\n2 0 1\n"));
    assert!(matches!(two_gon, Err(OffError::Parse { line: 5, .. })));
}

#[test]
fn test_oversized_face_is_a_parse_error() {
    let text = "OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n2305843009213693951 0 1 2\n";
    let huge = parse_off::<f64, _>(Cursor::new(text));
    assert!(matches!(huge, Err(OffError::Parse { line: 6, .. })));
}

#[test]
fn test_invalid_topology_is_a_mesh_error() {
    let out_of_range = parse_off::<f64, _>(Cursor::new("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n"));
    assert!(matches!(
        out_of_range,
        Err(OffError::Mesh(MeshError::VertexOutOfRange { face: 0, vertex: 7, vertex_count: 3 }))
    ));

    let no_faces = parse_off::<f64, _>(Cursor::new("OFF\n0 0 0\n"));
    assert!(matches!(no_faces, Err(OffError::Mesh(MeshError::Empty))));
}

#[test]
fn test_write_then_read_file() {
    let mesh = TriangleMesh::cuboid(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.5, 0.25, 3.0));
    let mut text = Vec::new();
    write_off_to(&mesh, &mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.starts_with("OFF\n8 12 0\n-1 0 2\n"));

    let path = std::env::temp_dir().join(format!("solidcast-off-{}.off", std::process::id()));
    write_off(&mesh, &path).unwrap();
    let back: TriangleMesh<f64> = read_off(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(back.vertices, mesh.vertices);
    assert_eq!(back.faces, mesh.faces);
}
