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

use std::cell::{Cell, RefCell};

use solidcast::{
    error::InsideError,
    geometry::{Aabb3, AabbTree, Axis, Point3, Ray3, Vector3},
    inside::{
        self, InsideOptions, PointInside, RayTraversal, SeedMode, SideOfTriangleMesh,
        SphereDirections, TraversalStatus, Verdict,
    },
    kernel::{F64Kernel, FnConstruction, RationalKernel},
    mesh::TriangleMesh,
    numeric::Rational,
};

fn unit_cube() -> TriangleMesh<f64> {
    TriangleMesh::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}

/// Two disjoint unit cubes along x, with a gap between x = 1 and x = 2.
fn two_cubes() -> TriangleMesh<f64> {
    let mut mesh = unit_cube();
    let other = TriangleMesh::cuboid(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
    let offset = mesh.num_vertices();
    for v in other.vertices {
        mesh.add_vertex(v);
    }
    for [a, b, c] in other.faces {
        mesh.add_triangle(a + offset, b + offset, c + offset);
    }
    mesh
}

fn cube_tree() -> AabbTree<F64Kernel> {
    AabbTree::from_mesh(&unit_cube()).unwrap()
}

/// Logs every traversal performed through it.
struct Recording<'a, I: RayTraversal> {
    inner: &'a I,
    log: RefCell<Vec<(Ray3<I::FT>, TraversalStatus)>>,
}

impl<'a, I: RayTraversal> Recording<'a, I> {
    fn new(inner: &'a I) -> Self {
        Recording {
            inner,
            log: RefCell::new(Vec::new()),
        }
    }

    fn take(&self) -> Vec<(Ray3<I::FT>, TraversalStatus)> {
        self.log.take()
    }
}

impl<I: RayTraversal> RayTraversal for Recording<'_, I> {
    type FT = I::FT;

    fn bbox(&self) -> &Aabb3<I::FT> {
        self.inner.bbox()
    }

    fn traverse(&self, ray: &Ray3<I::FT>) -> TraversalStatus {
        let status = self.inner.traverse(ray);
        self.log.borrow_mut().push((ray.clone(), status));
        status
    }
}

/// Index whose every traversal is indeterminate.
struct AlwaysIndeterminate {
    bbox: Aabb3<f64>,
}

impl RayTraversal for AlwaysIndeterminate {
    type FT = f64;

    fn bbox(&self) -> &Aabb3<f64> {
        &self.bbox
    }

    fn traverse(&self, _ray: &Ray3<f64>) -> TraversalStatus {
        TraversalStatus::Indeterminate
    }
}

#[test]
fn test_cube_center_region_is_inside() {
    let tree = cube_tree();
    let recording = Recording::new(&tree);
    let verdict = inside::classify(&Point3::new(0.3, 0.2, 0.4), &recording).unwrap();
    assert_eq!(verdict, Verdict::Inside);

    // General position: the axis probe settles it.
    let log = recording.take();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0.direction, Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(log[0].1, TraversalStatus::Determinate { parity_odd: true });
}

#[test]
fn test_cube_centered_at_origin() {
    let mesh = TriangleMesh::cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let tree = AabbTree::<F64Kernel>::from_mesh(&mesh).unwrap();
    let recording = Recording::new(&tree);

    assert_eq!(inside::classify(&Point3::new(0.0, 0.0, 0.0), &recording), Ok(Verdict::Inside));
    recording.take();
    assert_eq!(inside::classify(&Point3::new(10.0, 10.0, 10.0), &recording), Ok(Verdict::Outside));
    assert!(recording.take().is_empty());
    assert_eq!(inside::classify(&Point3::new(0.0, 0.3, 1.0), &tree), Ok(Verdict::OnBoundary));
}

/// Square pyramid over `[0, 2]^2` with its apex at `(1, 1, 2)`.
fn pyramid() -> TriangleMesh<f64> {
    let mut mesh = TriangleMesh::new();
    for [x, y, z] in [
        [0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [2.0, 2.0, 0.0],
        [0.0, 2.0, 0.0],
        [1.0, 1.0, 2.0],
    ] {
        mesh.add_vertex(Point3::new(x, y, z));
    }
    for [a, b, c] in [[0, 2, 1], [0, 3, 2], [0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]] {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

#[test]
fn test_vertical_ray_through_apex() {
    let tree = AabbTree::<F64Kernel>::from_mesh(&pyramid()).unwrap();
    let recording = Recording::new(&tree);

    let point = Point3::new(1.0, 1.0, 1.5);
    let verdict = inside::classify(&point, &recording).unwrap();
    let log = recording.take();
    assert_eq!(log[0].0.direction, Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(log[0].1, TraversalStatus::Indeterminate);

    let perturbed = inside::classify(&Point3::new(1.01, 1.02, 1.5), &tree).unwrap();
    assert_eq!(verdict, Verdict::Inside);
    assert_eq!(verdict, perturbed);
}

#[test]
fn test_outside_bbox_skips_traversal() {
    let tree = cube_tree();
    let recording = Recording::new(&tree);
    for p in [
        Point3::new(2.0, 0.5, 0.5),
        Point3::new(0.5, -0.1, 0.5),
        Point3::new(0.5, 0.5, 1.0 + 1e-9),
    ] {
        assert_eq!(inside::classify(&p, &recording), Ok(Verdict::Outside));
    }
    assert!(recording.take().is_empty());
}

#[test]
fn test_points_on_the_surface() {
    let tree = cube_tree();
    let tester = PointInside::default();
    for p in [
        Point3::new(0.3, 0.2, 0.0),  // bottom face
        Point3::new(0.25, 0.25, 1.0), // top face
        Point3::new(0.0, 0.4, 0.7),  // x = 0 face
        Point3::new(1.0, 1.0, 0.5),  // vertical edge
        Point3::new(0.0, 0.0, 0.0),  // corner
        Point3::new(0.5, 0.5, 1.0),  // on a face diagonal
    ] {
        assert_eq!(tester.classify(&p, &tree), Ok(Verdict::OnBoundary), "{:?}", p);
    }
}

#[test]
fn test_inside_box_but_outside_solid() {
    let tree = AabbTree::<F64Kernel>::from_mesh(&two_cubes()).unwrap();
    let tester = PointInside::default();
    assert_eq!(tester.classify(&Point3::new(1.5, 0.5, 0.5), &tree), Ok(Verdict::Outside));
    assert_eq!(tester.classify(&Point3::new(1.5, 0.1, 0.9), &tree), Ok(Verdict::Outside));
    assert_eq!(tester.classify(&Point3::new(2.3, 0.2, 0.4), &tree), Ok(Verdict::Inside));
    assert_eq!(tester.classify(&Point3::new(0.7, 0.6, 0.1), &tree), Ok(Verdict::Inside));
}

#[test]
fn test_parity_does_not_depend_on_direction() {
    let tree = cube_tree();
    let origin = Point3::new(0.37, 0.61, 0.52);
    for dz in [1.0, -1.0] {
        let status = tree.traverse(&Ray3::new(origin.clone(), Vector3::new(0.0, 0.0, dz)));
        assert_eq!(status, TraversalStatus::Determinate { parity_odd: true });
    }
    for [dx, dy, dz] in SphereDirections::new(99).take(200) {
        let status = tree.traverse(&Ray3::new(origin.clone(), Vector3::new(dx, dy, dz)));
        assert!(
            matches!(
                status,
                TraversalStatus::Determinate { parity_odd: true } | TraversalStatus::Indeterminate
            ),
            "{:?}",
            status
        );
    }

    let outside = Point3::new(1.5, 0.5, 0.5);
    for [dx, dy, dz] in SphereDirections::new(7).take(200) {
        let status = tree.traverse(&Ray3::new(outside.clone(), Vector3::new(dx, dy, dz)));
        assert!(!matches!(status, TraversalStatus::Determinate { parity_odd: true }));
        assert_ne!(status, TraversalStatus::DeterminateOnBoundary);
    }
}

#[test]
fn test_degenerate_axis_probe_recovers() {
    let tree = cube_tree();
    let recording = Recording::new(&tree);

    // The downward probe runs through the bottom face's diagonal.
    let verdict = inside::classify(&Point3::new(0.5, 0.5, 0.3), &recording).unwrap();
    assert_eq!(verdict, Verdict::Inside);

    let log = recording.take();
    assert!(log.len() >= 2);
    assert_eq!(log[0].1, TraversalStatus::Indeterminate);
    assert_eq!(log.last().map(|(_, s)| *s), Some(TraversalStatus::Determinate { parity_odd: true }));
    for (ray, _) in &log[1..] {
        assert_eq!(ray.origin, Point3::new(0.5, 0.5, 0.3));
    }

    // Matches a nearby point in general position.
    let nudged = inside::classify(&Point3::new(0.5 + 1e-3, 0.5 + 2e-3, 0.3), &tree).unwrap();
    assert_eq!(nudged, verdict);
}

#[test]
fn test_retry_sequence_is_reproducible() {
    let tree = cube_tree();
    let point = Point3::new(0.5, 0.5, 0.7);

    let first = Recording::new(&tree);
    PointInside::default().classify(&point, &first).unwrap();
    let second = Recording::new(&tree);
    PointInside::default().classify(&point, &second).unwrap();
    assert_eq!(first.take(), second.take());

    // Per-query seeding: the same tester repeats itself.
    let tester = PointInside::default();
    let a = Recording::new(&tree);
    tester.classify(&point, &a).unwrap();
    let b = Recording::new(&tree);
    tester.classify(&point, &b).unwrap();
    assert_eq!(a.take(), b.take());
}

#[test]
fn test_shared_seed_mode_advances_between_queries() {
    let tree = cube_tree();
    let point = Point3::new(0.5, 0.5, 0.7);
    let tester = PointInside::new(InsideOptions::default().with_seed_mode(SeedMode::Shared));

    let a = Recording::new(&tree);
    assert_eq!(tester.classify(&point, &a), Ok(Verdict::Inside));
    let b = Recording::new(&tree);
    assert_eq!(tester.classify(&point, &b), Ok(Verdict::Inside));

    let (a, b) = (a.take(), b.take());
    assert_eq!(a[0], b[0]);
    assert_ne!(a[1].0, b[1].0);
}

#[test]
fn test_retry_cap() {
    let index = AlwaysIndeterminate {
        bbox: Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
    };
    let point = Point3::new(0.5, 0.5, 0.5);

    let capped = PointInside::new(InsideOptions::default().with_max_retries(Some(5)));
    assert_eq!(
        capped.classify(&point, &index),
        Err(InsideError::RetriesExhausted { attempts: 6 })
    );

    let no_retries = PointInside::new(InsideOptions::default().with_max_retries(Some(0)));
    assert_eq!(
        no_retries.classify(&Point3::new(0.3, 0.2, 0.4), &cube_tree()),
        Ok(Verdict::Inside),
        "general position needs no retry"
    );
    assert_eq!(
        no_retries.classify(&Point3::new(0.5, 0.5, 0.3), &cube_tree()),
        Err(InsideError::RetriesExhausted { attempts: 1 })
    );
}

#[test]
fn test_non_finite_query_is_rejected() {
    let tree = cube_tree();
    assert_eq!(
        inside::classify(&Point3::new(f64::NAN, 0.5, 0.5), &tree),
        Err(InsideError::NonFiniteQuery)
    );
    assert_eq!(
        inside::classify(&Point3::new(0.5, f64::INFINITY, 0.5), &tree),
        Err(InsideError::NonFiniteQuery)
    );
}

#[test]
fn test_up_axis_option() {
    let tree = cube_tree();
    let tester = PointInside::new(InsideOptions::default().with_up_axis(Axis::X));
    let recording = Recording::new(&tree);
    assert_eq!(tester.classify(&Point3::new(0.8, 0.3, 0.2), &recording), Ok(Verdict::Inside));
    let log = recording.take();
    assert_eq!(log[0].0.direction, Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_injected_construction_builds_every_probe() {
    let tree = cube_tree();
    let vectors = Cell::new(0);
    let rays = Cell::new(0);
    let construction = FnConstruction::new(
        |dx: f64, dy: f64, dz: f64| {
            vectors.set(vectors.get() + 1);
            Vector3::new(dx, dy, dz)
        },
        |origin: &Point3<f64>, direction: Vector3<f64>| {
            rays.set(rays.get() + 1);
            Ray3::new(origin.clone(), direction)
        },
    );

    let recording = Recording::new(&tree);
    let verdict = PointInside::default()
        .classify_with(&Point3::new(0.5, 0.5, 0.3), &recording, &construction)
        .unwrap();
    assert_eq!(verdict, Verdict::Inside);
    let traversals = recording.take().len();
    assert_eq!(rays.get(), traversals);
    assert_eq!(vectors.get(), traversals);
}

#[test]
fn test_rational_kernel_cube() {
    let mesh = unit_cube().cast::<Rational>();
    let side = SideOfTriangleMesh::<RationalKernel>::new(&mesh).unwrap();
    let q = |x: (i64, i64), y: (i64, i64), z: (i64, i64)| {
        Point3::new(Rational::new(x.0, x.1), Rational::new(y.0, y.1), Rational::new(z.0, z.1))
    };

    assert_eq!(side.classify(&q((1, 3), (1, 5), (2, 5))), Ok(Verdict::Inside));
    assert_eq!(side.classify(&q((1, 2), (1, 2), (3, 10))), Ok(Verdict::Inside));
    assert_eq!(side.classify(&q((1, 3), (1, 5), (1, 1))), Ok(Verdict::OnBoundary));
    assert_eq!(side.classify(&q((3, 2), (1, 2), (1, 2))), Ok(Verdict::Outside));
}

#[test]
fn test_side_of_mesh_rejects_bad_meshes() {
    let mut mesh = unit_cube();
    mesh.add_triangle(0, 1, 42);
    assert!(SideOfTriangleMesh::<F64Kernel>::new(&mesh).is_err());
    assert!(SideOfTriangleMesh::<F64Kernel>::new(&TriangleMesh::new()).is_err());
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn distance_to_cube_surface(p: [f64; 3]) -> f64 {
        p.iter()
            .map(|&c| c.abs().min((c - 1.0).abs()))
            .fold(f64::INFINITY, f64::min)
    }

    proptest! {
        #[test]
        fn prop_cube_membership(x in -0.5f64..1.5, y in -0.5f64..1.5, z in -0.5f64..1.5) {
            prop_assume!(distance_to_cube_surface([x, y, z]) > 1e-6);
            let side = SideOfTriangleMesh::<F64Kernel>::new(&unit_cube()).unwrap();
            let inside = [x, y, z].iter().all(|&c| c > 0.0 && c < 1.0);
            let expected = if inside { Verdict::Inside } else { Verdict::Outside };
            prop_assert_eq!(side.classify(&Point3::new(x, y, z)), Ok(expected));
        }

        #[test]
        fn prop_gate_rejects_without_traversal(
            x in -5.0f64..5.0, y in -5.0f64..5.0, z in 1.0f64..5.0, axis in 0usize..3
        ) {
            // Push one coordinate past the box.
            let mut coords = [x, y, z];
            coords.swap(2, axis);
            coords[axis] += 1e-9;
            let tree = cube_tree();
            let recording = Recording::new(&tree);
            prop_assert_eq!(inside::classify(&Point3::from(coords), &recording), Ok(Verdict::Outside));
            prop_assert!(recording.take().is_empty());
        }

        #[test]
        fn prop_seed_does_not_change_verdict(seed in any::<u64>(), x in 0.05f64..0.95, y in 0.05f64..0.95) {
            let tree = cube_tree();
            let tester = PointInside::new(InsideOptions::default().with_seed(seed));
            // On the plane through two face diagonals.
            prop_assert_eq!(tester.classify(&Point3::new(x, 1.0 - x, y), &tree), Ok(Verdict::Inside));
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_options_and_verdicts_serialize() {
    let options = InsideOptions::default()
        .with_up_axis(Axis::X)
        .with_seed(7)
        .with_seed_mode(SeedMode::Shared)
        .with_max_retries(Some(3));
    let json = serde_json::to_string(&options).unwrap();
    let back: InsideOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);

    // Missing fields fall back to the defaults.
    let partial: InsideOptions = serde_json::from_str(r#"{"up_axis":"Y"}"#).unwrap();
    assert_eq!(partial, InsideOptions::default().with_up_axis(Axis::Y));
    let empty: InsideOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, InsideOptions::default());

    for verdict in [Verdict::Inside, Verdict::Outside, Verdict::OnBoundary] {
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(serde_json::from_str::<Verdict>(&json).unwrap(), verdict);
    }
    assert_eq!(serde_json::to_string(&Verdict::OnBoundary).unwrap(), "\"OnBoundary\"");
}
