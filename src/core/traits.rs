use std::fmt;

use crate::{
    handle::{hsize, EdgeHandle, FaceHandle, HalfEdgeHandle, VertexHandle},
    util::Empty,
};
use super::{
    FaceHalfEdges, FaceVertices, HalfEdgeHandles, HandleIter, HandleIterMut,
    IncomingHalfEdges,
};


/// Some kind of polygon mesh with explicit edges.
///
/// This trait only describes the elements of a mesh and how to iterate over
/// them. Adjacency information is exposed by [`HalfEdgeGraph`].
pub trait Mesh: Empty + fmt::Debug {
    // ===== Vertices ========================================================
    /// Returns the number of vertices in this mesh.
    fn num_vertices(&self) -> hsize;

    /// Returns the next handle of an existing vertex with an index ≥ `start`'s
    /// index, or `None` if there is no such handle.
    ///
    /// This is a low level building block for iteration. As a user of this
    /// library, you usually don't want to use this method directly.
    ///
    /// Example: assume a mesh contains three vertices, with the handles with
    /// indices 0, 1 and 3. Then this method returns the following values:
    /// - `next_vertex_handle_from(VertexHandle(0))` → `Some(VertexHandle(0))`
    /// - `next_vertex_handle_from(VertexHandle(1))` → `Some(VertexHandle(1))`
    /// - `next_vertex_handle_from(VertexHandle(2))` → `Some(VertexHandle(3))`
    /// - `next_vertex_handle_from(VertexHandle(3))` → `Some(VertexHandle(3))`
    /// - `next_vertex_handle_from(VertexHandle(4))` → `None`
    fn next_vertex_handle_from(&self, start: VertexHandle) -> Option<VertexHandle>;

    /// Returns the vertex handle for an existing vertex with the highest
    /// index, or `None` if there are no vertices in the mesh.
    fn last_vertex_handle(&self) -> Option<VertexHandle>;


    // ===== Faces ===========================================================
    /// Returns the number of faces in this mesh.
    fn num_faces(&self) -> hsize;

    /// Like [`Mesh::next_vertex_handle_from`], but for faces.
    fn next_face_handle_from(&self, start: FaceHandle) -> Option<FaceHandle>;

    /// Returns the face handle for an existing face with the highest index, or
    /// `None` if there are no faces in the mesh.
    fn last_face_handle(&self) -> Option<FaceHandle>;


    // ===== Edges ===========================================================
    /// Returns the number of (full) edges in this mesh.
    fn num_edges(&self) -> hsize;

    /// Like [`Mesh::next_vertex_handle_from`], but for edges.
    fn next_edge_handle_from(&self, start: EdgeHandle) -> Option<EdgeHandle>;

    /// Returns the edge handle for an existing edge with the highest index, or
    /// `None` if there are no edges in the mesh.
    fn last_edge_handle(&self) -> Option<EdgeHandle>;


    // ===========================================================================================
    // ===== Provided methods
    // ===========================================================================================

    /// Checks if the given vertex handle refers to a valid vertex of this
    /// mesh.
    fn contains_vertex(&self, vertex: VertexHandle) -> bool {
        self.next_vertex_handle_from(vertex) == Some(vertex)
    }

    /// Returns an iterator over the handles of all vertices in this mesh, in
    /// increasing index order.
    fn vertex_handles(&self) -> HandleIter<'_, Self, VertexHandle> {
        HandleIter::<Self, VertexHandle>::new(self)
    }

    /// Returns an iterator over the handles of all vertices which can return a
    /// mutable reference to the mesh. This is useful when it is necessary to
    /// mutate the mesh while iterating.
    ///
    /// Using this iterator is tricky, so please see the documentation of
    /// [`HandleIterMut`] for more information.
    fn vertex_handles_mut(&mut self) -> HandleIterMut<'_, Self, VertexHandle> {
        HandleIterMut::<'_, Self, VertexHandle>::new(self)
    }

    /// Checks if the given face handle refers to a valid face of this mesh.
    fn contains_face(&self, face: FaceHandle) -> bool {
        self.next_face_handle_from(face) == Some(face)
    }

    /// Returns an iterator over the handles of all faces in this mesh, in
    /// increasing index order.
    fn face_handles(&self) -> HandleIter<'_, Self, FaceHandle> {
        HandleIter::<Self, FaceHandle>::new(self)
    }

    /// Like [`Mesh::vertex_handles_mut`], but for faces.
    fn face_handles_mut(&mut self) -> HandleIterMut<'_, Self, FaceHandle> {
        HandleIterMut::<'_, Self, FaceHandle>::new(self)
    }

    /// Checks if the given edge handle refers to a valid edge of this mesh.
    fn contains_edge(&self, edge: EdgeHandle) -> bool {
        self.next_edge_handle_from(edge) == Some(edge)
    }

    /// Returns an iterator over the handles of all edges in this mesh, in
    /// increasing index order.
    fn edge_handles(&self) -> HandleIter<'_, Self, EdgeHandle> {
        HandleIter::<Self, EdgeHandle>::new(self)
    }

    /// Like [`Mesh::vertex_handles_mut`], but for edges.
    fn edge_handles_mut(&mut self) -> HandleIterMut<'_, Self, EdgeHandle> {
        HandleIterMut::<'_, Self, EdgeHandle>::new(self)
    }

    /// Returns `true` if the mesh has no vertices (and thus no other
    /// elements).
    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }
}

/// Some kind of polygon mesh that allows adding elements.
pub trait MeshMut: Mesh {
    /// Adds a new, unconnected vertex to the mesh and returns the handle
    /// representing that vertex.
    ///
    /// Meshes only store connectivity. All properties (like the vertex
    /// position) are stored in external property maps. See [module
    /// `map`][crate::map].
    fn add_vertex(&mut self) -> VertexHandle;

    /// Adds a new face to this mesh and returns the handle representing that
    /// face.
    ///
    /// The `vertices` have to be given in front-face CCW (counterclockwise)
    /// order. This means: if you look at front of the face you want to create
    /// (the face's normal is pointing to you), the vertices should appear in
    /// CCW order.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 vertices are given, if a vertex handle is
    /// invalid or appears more than once, or if adding the face would create
    /// a non-manifold edge or vertex.
    fn add_face(&mut self, vertices: &[VertexHandle]) -> FaceHandle;

    /// Adds a new triangular face. See [`MeshMut::add_face`].
    fn add_triangle(&mut self, vertices: [VertexHandle; 3]) -> FaceHandle {
        self.add_face(&vertices)
    }

    /// Removes all elements of this mesh.
    fn clear(&mut self);

    /// Reserves memory for `count` additional vertices.
    ///
    /// This is just an optimization that can reduce the number allocations
    /// done by this data structure. The provided default implementation does
    /// nothing.
    fn reserve_for_vertices(&mut self, _count: hsize) {}

    /// Reserves memory for `count` additional faces. The provided default
    /// implementation does nothing.
    fn reserve_for_faces(&mut self, _count: hsize) {}
}


/// Read access to the half edge structure of a mesh.
///
/// Every edge consists of two oppositely oriented half edges. Each half edge
/// points to its `target` vertex, to the `next` and `prev` half edge around
/// the face (or hole) it is adjacent to and optionally to that `face`. Half
/// edges without face are *border* half edges.
///
/// Every vertex stores one *incoming* half edge (the anchor) whose target is
/// that vertex. For border vertices, the anchor is a border half edge.
///
/// All methods panic if given a handle that does not refer to an existing
/// element.
pub trait HalfEdgeGraph: Mesh {
    /// Returns one half edge on the boundary of `face`.
    fn halfedge_of_face(&self, face: FaceHandle) -> HalfEdgeHandle;

    /// Returns the anchor of `vertex`: an incoming half edge, or `None` if the
    /// vertex is isolated.
    fn halfedge_of_vertex(&self, vertex: VertexHandle) -> Option<HalfEdgeHandle>;

    /// Returns one of the two half edges of `edge`.
    fn halfedge_of_edge(&self, edge: EdgeHandle) -> HalfEdgeHandle;

    /// Returns the full edge `he` is part of.
    fn edge_of(&self, he: HalfEdgeHandle) -> EdgeHandle;

    /// Returns the other half edge of the same full edge.
    fn opposite(&self, he: HalfEdgeHandle) -> HalfEdgeHandle;

    /// Returns the half edge after `he` around its face or hole.
    fn next(&self, he: HalfEdgeHandle) -> HalfEdgeHandle;

    /// Returns the half edge before `he` around its face or hole.
    fn prev(&self, he: HalfEdgeHandle) -> HalfEdgeHandle;

    /// Returns the face `he` is adjacent to or `None` if `he` is a border half
    /// edge.
    fn face(&self, he: HalfEdgeHandle) -> Option<FaceHandle>;

    /// Returns the vertex `he` points to.
    fn target(&self, he: HalfEdgeHandle) -> VertexHandle;

    /// Returns the vertex `he` starts at.
    fn source(&self, he: HalfEdgeHandle) -> VertexHandle {
        self.target(self.opposite(he))
    }

    /// Returns `true` if `he` is not adjacent to a face.
    fn is_border(&self, he: HalfEdgeHandle) -> bool {
        self.face(he).is_none()
    }

    /// Returns `true` if at least one half edge of `edge` is a border half
    /// edge.
    fn is_border_edge(&self, edge: EdgeHandle) -> bool {
        let he = self.halfedge_of_edge(edge);
        self.is_border(he) || self.is_border(self.opposite(he))
    }

    /// Returns the number of half edges (always twice the number of edges).
    fn num_halfedges(&self) -> hsize {
        self.num_edges() * 2
    }

    /// Iterates over the half edges bounding `face`, following `next`,
    /// starting with [`HalfEdgeGraph::halfedge_of_face`].
    fn halfedges_around_face(&self, face: FaceHandle) -> FaceHalfEdges<'_, Self> {
        FaceHalfEdges::new(self, self.halfedge_of_face(face))
    }

    /// Iterates over the vertices of `face` in their CCW order.
    fn vertices_around_face(&self, face: FaceHandle) -> FaceVertices<'_, Self> {
        FaceVertices::new(self.halfedges_around_face(face))
    }

    /// Iterates over all half edges pointing to `vertex`, starting with its
    /// anchor. Yields nothing for isolated vertices.
    fn incoming_halfedges(&self, vertex: VertexHandle) -> IncomingHalfEdges<'_, Self> {
        IncomingHalfEdges::new(self, self.halfedge_of_vertex(vertex))
    }

    /// Returns an iterator over all half edges of the mesh, ordered by their
    /// edge handle.
    fn halfedge_handles(&self) -> HalfEdgeHandles<'_, Self> {
        HalfEdgeHandles::new(self)
    }
}

/// Low level write access to the half edge structure of a mesh.
///
/// These operations do not keep the mesh consistent on their own. The
/// `remove_*` methods in particular only delete the element; the caller has
/// to relink all surrounding `next`/`prev` pointers and anchors before (or
/// after) calling them.
pub trait HalfEdgeGraphMut: HalfEdgeGraph + MeshMut {
    /// Sets `next(he) = next` and `prev(next) = he`.
    fn set_next(&mut self, he: HalfEdgeHandle, next: HalfEdgeHandle);

    /// Sets (or clears) the face `he` is adjacent to.
    fn set_face(&mut self, he: HalfEdgeHandle, face: Option<FaceHandle>);

    /// Sets the anchor of `vertex`. The half edge has to point to `vertex`.
    fn set_halfedge_of_vertex(&mut self, vertex: VertexHandle, he: Option<HalfEdgeHandle>);

    /// Sets the anchor of `face`. The half edge has to be adjacent to `face`.
    fn set_halfedge_of_face(&mut self, face: FaceHandle, he: HalfEdgeHandle);

    /// Removes both half edges of `edge`.
    fn remove_edge(&mut self, edge: EdgeHandle);

    /// Removes `face`. Half edges still referring to it are not touched.
    fn remove_face(&mut self, face: FaceHandle);

    /// Removes `vertex`. Half edges still pointing to it are not touched.
    fn remove_vertex(&mut self, vertex: VertexHandle);

    /// Makes sure the anchor of `vertex` is a border half edge if the vertex
    /// has any incoming border half edge.
    fn adjust_vertex_anchor(&mut self, vertex: VertexHandle) {
        let anchor = match self.halfedge_of_vertex(vertex) {
            Some(he) => he,
            None => return,
        };
        if self.is_border(anchor) {
            return;
        }

        let border = self.incoming_halfedges(vertex).find(|&he| self.is_border(he));
        if let Some(border) = border {
            self.set_halfedge_of_vertex(vertex, Some(border));
        }
    }
}
