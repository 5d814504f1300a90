//! Assertion macros and mesh fixtures shared by the unit tests.

use std::{
    collections::BTreeSet,
    fmt::Debug,
};

use crate::{
    prelude::*,
    EdgeHandle, FaceHandle, VertexHandle,
    ds::HalfEdgeMesh,
};


/// Takes an iterator and a list of elements. Collects both into sets and
/// compares those sets for equality via `assert_eq`.
macro_rules! assert_eq_set {
    ($iter:expr, [$($item:expr),* $(,)*] $(,)?) => {
        crate::test_utils::assert_eq_set_fn(
            $iter,
            &[$($item),*],
            stringify!($iter),
            stringify!([$($item),*]),
        );
    }
}

/// Internal helper function for `assert_eq_set`.
pub(crate) fn assert_eq_set_fn<I, T>(actual: I, expected: &[T], left_str: &str, right_str: &str)
where
    I: Iterator<Item = T>,
    T: Debug + Clone + Eq + Ord,
{
    let actual = actual.collect::<BTreeSet<_>>();
    let expected = expected.iter().cloned().collect::<BTreeSet<_>>();
    if actual != expected {
        panic!(
            "assert_eq_set({}, {}) failed:\n  left: {:?}\n right: {:?} ",
            left_str,
            right_str,
            actual,
            expected,
        );
    }
}

/// Runs `check_integrity` and panics with the error and the mesh if it fails.
macro_rules! assert_integrity {
    ($mesh:expr) => {
        if let Err(e) = $mesh.check_integrity() {
            panic!("integrity check failed: {}\nmesh: {:#?}", e, $mesh);
        }
    };
}


/// Returns the edge between `a` and `b`. Panics if there is none.
pub(crate) fn find_edge(mesh: &HalfEdgeMesh, a: VertexHandle, b: VertexHandle) -> EdgeHandle {
    mesh.incoming_halfedges(a)
        .find(|&he| mesh.source(he) == b)
        .map(|he| mesh.edge_of(he))
        .unwrap_or_else(|| panic!("no edge between {:?} and {:?}", a, b))
}

/// A quad split into two triangles along the diagonal `a -- c`.
///
/// ```text
///   (d) ---- (c)
///    |  Y  ⋰  |
///    |   ⋰    |
///    | ⋰   X  |
///   (a) ---- (b)
/// ```
pub(crate) fn two_triangles() -> (HalfEdgeMesh, [VertexHandle; 4], [FaceHandle; 2]) {
    let mut mesh = HalfEdgeMesh::empty();
    let a = mesh.add_vertex();
    let b = mesh.add_vertex();
    let c = mesh.add_vertex();
    let d = mesh.add_vertex();
    let x = mesh.add_triangle([a, b, c]);
    let y = mesh.add_triangle([a, c, d]);

    (mesh, [a, b, c, d], [x, y])
}

/// Two triangles that only share the vertex `s`.
///
/// ```text
///   (c)       (e)
///    | ╲     ╱ |
///    |  X (s) Y |
///    | ╱     ╲ |
///   (b)       (d)
/// ```
pub(crate) fn bowtie() -> (HalfEdgeMesh, VertexHandle, [FaceHandle; 2]) {
    let mut mesh = HalfEdgeMesh::empty();
    let s = mesh.add_vertex();
    let b = mesh.add_vertex();
    let c = mesh.add_vertex();
    let d = mesh.add_vertex();
    let e = mesh.add_vertex();
    let x = mesh.add_triangle([s, c, b]);
    let y = mesh.add_triangle([s, d, e]);

    (mesh, s, [x, y])
}

/// A closed tetrahedron (no border at all).
pub(crate) fn tetrahedron() -> (HalfEdgeMesh, [VertexHandle; 4], [FaceHandle; 4]) {
    let mut mesh = HalfEdgeMesh::empty();
    let a = mesh.add_vertex();
    let b = mesh.add_vertex();
    let c = mesh.add_vertex();
    let d = mesh.add_vertex();
    let f0 = mesh.add_triangle([a, b, c]);
    let f1 = mesh.add_triangle([a, d, b]);
    let f2 = mesh.add_triangle([b, d, c]);
    let f3 = mesh.add_triangle([c, d, a]);

    (mesh, [a, b, c, d], [f0, f1, f2, f3])
}

/// A row of `n` quads, each sharing an edge with its neighbors.
pub(crate) fn quad_strip(n: usize) -> (HalfEdgeMesh, Vec<VertexHandle>, Vec<FaceHandle>) {
    let mut mesh = HalfEdgeMesh::empty();
    let bottom = (0..=n).map(|_| mesh.add_vertex()).collect::<Vec<_>>();
    let top = (0..=n).map(|_| mesh.add_vertex()).collect::<Vec<_>>();
    let faces = (0..n)
        .map(|i| mesh.add_face(&[bottom[i], bottom[i + 1], top[i + 1], top[i]]))
        .collect();

    let vertices = bottom.into_iter().chain(top).collect();
    (mesh, vertices, faces)
}
