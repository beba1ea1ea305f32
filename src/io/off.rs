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
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::{
    error::OffError,
    geometry::point::Point3,
    mesh::basic_types::TriangleMesh,
    numeric::scalar::Scalar,
};

/// Write a mesh to an OFF file.
pub fn write_off<T: Scalar, P: AsRef<Path>>(mesh: &TriangleMesh<T>, path: P) -> Result<(), OffError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_off_to(mesh, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Format:
///   OFF
///   <numVertices> <numFaces> 0
///   x y z
///   ...
///   3 i j k   (zero-based indices)
pub fn write_off_to<T: Scalar, W: Write>(mesh: &TriangleMesh<T>, out: &mut W) -> Result<(), OffError> {
    writeln!(out, "OFF")?;
    writeln!(out, "{} {} 0", mesh.num_vertices(), mesh.num_faces())?;
    for v in &mesh.vertices {
        let [x, y, z] = v.coords.each_ref().map(|c| c.to_f64().unwrap_or(f64::NAN));
        writeln!(out, "{} {} {}", x, y, z)?;
    }
    for [a, b, c] in &mesh.faces {
        writeln!(out, "3 {} {} {}", a, b, c)?;
    }
    Ok(())
}

/// Read a mesh from an OFF file.
pub fn read_off<T: Scalar, P: AsRef<Path>>(path: P) -> Result<TriangleMesh<T>, OffError> {
    let file = File::open(path)?;
    parse_off(BufReader::new(file))
}

/// Non-comment tokens tagged with their 1-based line number.
struct Tokens {
    tokens: std::vec::IntoIter<(usize, String)>,
    last_line: usize,
}

impl Tokens {
    fn read<R: BufRead>(reader: R) -> Result<Self, OffError> {
        let mut tokens = Vec::new();
        let mut last_line = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            last_line = i + 1;
            let content = line.split('#').next().unwrap_or("");
            tokens.extend(content.split_whitespace().map(|t| (i + 1, t.to_owned())));
        }
        Ok(Tokens {
            tokens: tokens.into_iter(),
            last_line,
        })
    }

    fn next<V: FromStr>(&mut self, what: &str) -> Result<(usize, V), OffError> {
        let Some((line, token)) = self.tokens.next() else {
            return Err(OffError::Parse {
                line: self.last_line,
                message: format!("unexpected end of file, expected {}", what),
            });
        };
        let value = token.parse().map_err(|_| OffError::Parse {
            line,
            message: format!("bad {} '{}'", what, token),
        })?;
        Ok((line, value))
    }
}

/// Parses OFF text. Polygonal faces are fan-triangulated from their first
/// vertex; the result is validated before it is returned.
pub fn parse_off<T: Scalar, R: BufRead>(reader: R) -> Result<TriangleMesh<T>, OffError> {
    let mut tokens = Tokens::read(reader)?;

    let (line, header) = tokens.next::<String>("header")?;
    if header != "OFF" {
        return Err(OffError::Parse {
            line,
            message: format!("expected 'OFF', got '{}'", header),
        });
    }

    let (_, vertex_count) = tokens.next::<usize>("vertex count")?;
    let (_, face_count) = tokens.next::<usize>("face count")?;
    let _ = tokens.next::<usize>("edge count")?;

    let mut mesh = TriangleMesh::new();
    for _ in 0..vertex_count {
        let (_, x) = tokens.next::<f64>("vertex coordinate")?;
        let (_, y) = tokens.next::<f64>("vertex coordinate")?;
        let (_, z) = tokens.next::<f64>("vertex coordinate")?;
        mesh.add_vertex(Point3::from_f64s(x, y, z));
    }

    let mut polygons = 0;
    for _ in 0..face_count {
        let (line, size) = tokens.next::<usize>("face size")?;
        if size < 3 {
            return Err(OffError::Parse {
                line,
                message: format!("face with {} vertices", size),
            });
        }
        let mut indices = Vec::new();
        for _ in 0..size {
            indices.push(tokens.next::<usize>("vertex index")?.1);
        }
        if size > 3 {
            polygons += 1;
        }
        for k in 1..size - 1 {
            mesh.add_triangle(indices[0], indices[k], indices[k + 1]);
        }
    }

    mesh.validate()?;
    debug!(
        vertices = mesh.num_vertices(),
        triangles = mesh.num_faces(),
        polygons,
        "read OFF mesh"
    );
    Ok(mesh)
}
