//! Traits abstracting over polygon mesh data structures, and iterators over
//! their elements.
//!
//! The mesh data structures in this library are *only* concerned with
//! connectivity information and cannot store additional properties, like
//! vertex positions or per-edge flags. Use [prop maps][crate::map] for that
//! purpose.
//!
//!
//! # Mesh Traits
//!
//! ```text
//! Mesh ◄──── MeshMut ◄────────────┐
//!   ▲                             │
//!   │                             │
//!   └──── HalfEdgeGraph ◄──── HalfEdgeGraphMut
//! ```
//!
//! - [`Mesh`]: counting and iterating over vertices, faces and edges.
//! - [`MeshMut`]: adding vertices and faces.
//! - [`HalfEdgeGraph`]: read access to the half edge connectivity.
//! - [`HalfEdgeGraphMut`]: low level pointer manipulation and structural
//!   deletion. This is what the algorithms in [`algo`][crate::algo] use to
//!   perform mesh surgery.
//!
//! The only implementation in this library is
//! [`HalfEdgeMesh`][crate::ds::HalfEdgeMesh], but all algorithms are written
//! against these traits.

use crate::{
    hsize,
    handle::{Handle, HSizeExt, EdgeHandle, FaceHandle, HalfEdgeHandle, VertexHandle},
};



mod traits;

pub use self::traits::{HalfEdgeGraph, HalfEdgeGraphMut, Mesh, MeshMut};


// ===========================================================================
// ===== Iterators over handles
// ===========================================================================

/// An iterator over the handles of the elements of a mesh. Yields handles with
/// increasing index value.
///
/// Instances of this type are returned by:
/// - [`Mesh::vertex_handles`]
/// - [`Mesh::face_handles`]
/// - [`Mesh::edge_handles`]
#[derive(Debug, Clone)]
pub struct HandleIter<'a, M: Mesh + ?Sized, H: Handle> {
    current: H,
    mesh: &'a M,
    count: hsize,
}

macro_rules! impl_handle_iter {
    ($handle:ident, $method:ident, $num_fn:ident) => {
        impl<'a, M: Mesh + ?Sized> HandleIter<'a, M, $handle> {
            pub(crate) fn new(mesh: &'a M) -> Self {
                Self {
                    current: $handle::new(0),
                    mesh,
                    count: mesh.$num_fn(),
                }
            }
        }

        impl<M: Mesh + ?Sized> Iterator for HandleIter<'_, M, $handle> {
            type Item = $handle;

            fn next(&mut self) -> Option<Self::Item> {
                let out = self.mesh.$method(self.current);
                if let Some(out) = out {
                    self.current = $handle::new(out.idx().next());
                    self.count -= 1;
                }

                out
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.count as usize, Some(self.count as usize))
            }
        }

        impl<M: Mesh + ?Sized> ExactSizeIterator for HandleIter<'_, M, $handle> {}
    }
}

impl_handle_iter!(VertexHandle, next_vertex_handle_from, num_vertices);
impl_handle_iter!(FaceHandle, next_face_handle_from, num_faces);
impl_handle_iter!(EdgeHandle, next_edge_handle_from, num_edges);


/// An iterator over the handles of the elements of a mesh. Yields handles with
/// increasing index value. Can give mutable access to the underlying mesh.
///
/// Before yielding a handle, the iterator already advances its cursor past
/// it. So removing the element that was just yielded (or any element with a
/// smaller handle) does not disturb the iteration. The iterator goes from
/// handle index 0 to the `last_{element}_handle` at the time the iterator was
/// created. That means that:
///
/// - Adding new elements with a handle higher than the "initial last handle"
///   won't affect the iteration.
/// - Adding or removing elements with handle indices lower than the handle
///   that was last yielded by this iterator, won't affect the iteration.
/// - Adding or removing elements with handle indices higher than the handle
///   last yielded by this iterator but smaller than the "initial last handle"
///   *will* affect the iteration. You should avoid doing that.
///
/// Since the iterator holds the mutable borrow, use it with `while let` and
/// access the mesh via [`HandleIterMut::mesh`]:
///
/// ```
/// use isle::{prelude::*, ds::HalfEdgeMesh};
///
/// let mut mesh = HalfEdgeMesh::empty();
/// let vs: Vec<_> = (0..4).map(|_| mesh.add_vertex()).collect();
/// mesh.add_triangle([vs[0], vs[1], vs[2]]);
///
/// // Remove all isolated vertices while iterating.
/// let mut it = mesh.vertex_handles_mut();
/// while let Some(v) = it.next() {
///     if it.mesh().halfedge_of_vertex(v).is_none() {
///         it.mesh().remove_vertex(v);
///     }
/// }
///
/// assert_eq!(mesh.num_vertices(), 3);
/// ```
#[derive(Debug)]
pub struct HandleIterMut<'a, M: Mesh + ?Sized, H: Handle> {
    current: H,
    last: H,
    mesh: &'a mut M,
}

impl<'a, M: Mesh + ?Sized, H: Handle> HandleIterMut<'a, M, H> {
    pub fn mesh(&mut self) -> &mut M {
        self.mesh
    }
}

macro_rules! impl_handle_iter_mut {
    ($handle:ident, $next:ident, $last:ident) => {
        impl<'a, M: Mesh + ?Sized> HandleIterMut<'a, M, $handle> {
            pub(crate) fn new(mesh: &'a mut M) -> Self {
                // If the mesh has none of these elements, the `last` value is
                // not important.
                Self {
                    current: $handle::new(0),
                    last: mesh.$last().unwrap_or($handle::new(0)),
                    mesh,
                }
            }
        }

        impl<M: Mesh + ?Sized> Iterator for HandleIterMut<'_, M, $handle> {
            type Item = $handle;

            fn next(&mut self) -> Option<Self::Item> {
                let out = self.mesh.$next(self.current);

                if let Some(out) = out {
                    if out.idx() > self.last.idx() {
                        return None;
                    }

                    self.current = $handle::new(out.idx().next());
                }

                out
            }
        }
    }
}

impl_handle_iter_mut!(VertexHandle, next_vertex_handle_from, last_vertex_handle);
impl_handle_iter_mut!(FaceHandle, next_face_handle_from, last_face_handle);
impl_handle_iter_mut!(EdgeHandle, next_edge_handle_from, last_edge_handle);


/// Iterator over all half edges of a mesh. Returned by
/// [`HalfEdgeGraph::halfedge_handles`].
#[derive(Debug, Clone)]
pub struct HalfEdgeHandles<'a, M: HalfEdgeGraph + ?Sized> {
    edges: HandleIter<'a, M, EdgeHandle>,
    pending: Option<HalfEdgeHandle>,
}

impl<'a, M: HalfEdgeGraph + ?Sized> HalfEdgeHandles<'a, M> {
    pub(crate) fn new(mesh: &'a M) -> Self {
        Self {
            edges: mesh.edge_handles(),
            pending: None,
        }
    }
}

impl<M: HalfEdgeGraph + ?Sized> Iterator for HalfEdgeHandles<'_, M> {
    type Item = HalfEdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(he) = self.pending.take() {
            return Some(he);
        }

        let mesh = self.edges.mesh;
        self.edges.next().map(|e| {
            let he = mesh.halfedge_of_edge(e);
            self.pending = Some(mesh.opposite(he));
            he
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.edges.len() * 2 + self.pending.is_some() as usize;
        (len, Some(len))
    }
}

impl<M: HalfEdgeGraph + ?Sized> ExactSizeIterator for HalfEdgeHandles<'_, M> {}


// ===========================================================================
// ===== Circulators
// ===========================================================================

/// Iterates over the half edges of one face (or hole) by following `next`.
/// Returned by [`HalfEdgeGraph::halfedges_around_face`].
#[derive(Debug, Clone)]
pub struct FaceHalfEdges<'a, M: HalfEdgeGraph + ?Sized> {
    mesh: &'a M,
    start: HalfEdgeHandle,
    current: Option<HalfEdgeHandle>,
}

impl<'a, M: HalfEdgeGraph + ?Sized> FaceHalfEdges<'a, M> {
    /// Creates a circulator that starts at `start` and walks the `next`
    /// cycle `start` is part of. This works for holes, too.
    pub fn new(mesh: &'a M, start: HalfEdgeHandle) -> Self {
        Self {
            mesh,
            start,
            current: Some(start),
        }
    }
}

impl<M: HalfEdgeGraph + ?Sized> Iterator for FaceHalfEdges<'_, M> {
    type Item = HalfEdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current?;
        let next = self.mesh.next(out);
        self.current = if next == self.start { None } else { Some(next) };

        Some(out)
    }
}

/// Iterates over the vertices of one face. Returned by
/// [`HalfEdgeGraph::vertices_around_face`].
#[derive(Debug, Clone)]
pub struct FaceVertices<'a, M: HalfEdgeGraph + ?Sized> {
    inner: FaceHalfEdges<'a, M>,
}

impl<'a, M: HalfEdgeGraph + ?Sized> FaceVertices<'a, M> {
    pub(crate) fn new(inner: FaceHalfEdges<'a, M>) -> Self {
        Self { inner }
    }
}

impl<M: HalfEdgeGraph + ?Sized> Iterator for FaceVertices<'_, M> {
    type Item = VertexHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let mesh = self.inner.mesh;
        self.inner.next().map(|he| mesh.target(he))
    }
}

/// Iterates over all half edges pointing to one vertex. Returned by
/// [`HalfEdgeGraph::incoming_halfedges`].
///
/// The rotation goes from an incoming half edge `he` to `opposite(next(he))`.
/// Fan blades around a border vertex are linked by border half edges, so all
/// blades are visited.
#[derive(Debug, Clone)]
pub struct IncomingHalfEdges<'a, M: HalfEdgeGraph + ?Sized> {
    mesh: &'a M,
    start: Option<HalfEdgeHandle>,
    current: Option<HalfEdgeHandle>,
}

impl<'a, M: HalfEdgeGraph + ?Sized> IncomingHalfEdges<'a, M> {
    pub(crate) fn new(mesh: &'a M, start: Option<HalfEdgeHandle>) -> Self {
        Self {
            mesh,
            start,
            current: start,
        }
    }
}

impl<M: HalfEdgeGraph + ?Sized> Iterator for IncomingHalfEdges<'_, M> {
    type Item = HalfEdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current?;
        let next = self.mesh.opposite(self.mesh.next(out));
        self.current = if Some(next) == self.start { None } else { Some(next) };

        Some(out)
    }
}
