//! Everything related to the `HalfEdgeMesh`.

use std::fmt;

use smallvec::SmallVec;

use crate::{
    hsize,
    core::{HalfEdgeGraph, HalfEdgeGraphMut, Mesh, MeshMut},
    handle::{
        Handle, Opt, EdgeHandle, FaceHandle, HalfEdgeHandle, VertexHandle,
    },
    map::{DenseMap, PropMap, PropStore, PropStoreMut},
    util::Empty,
};


mod check;

pub use self::check::IntegrityError;


const NON_MANIFOLD_VERTEX_ERR: &str =
    "new face would add a non-manifold vertex (no half edge around the vertex is a \
        boundary half edge)";
const NON_MANIFOLD_EDGE_ERR: &str =
    "new face would add a non-manifold edge (the edge is already adjacent to two faces)";


// ===============================================================================================
// ===== Definition of types stored inside the data structure
// ===============================================================================================

/// Implementation of the *half edge mesh*. This data structure is widely used
/// in geometry processing due to its many capabilities paired with fairly good
/// speed and memory consumption.
///
/// Every full edge is stored as two half edges next to each other, so the
/// opposite half edge is found by flipping the lowest bit of the handle. Each
/// half edge stores its target vertex, its adjacent face (if any), and the
/// `next` and `prev` half edges around that face or hole. Each vertex stores
/// one incoming half edge, each face one of its half edges.
///
/// Elements are stored in [`DenseMap`]s: removing an element leaves a hole
/// and never changes the handle of another element.
///
/// # References
///
/// Introduced in: Mäntylä, Martti. An introduction to solid modeling. Computer
/// science press, 1988.
#[derive(Clone, PartialEq)]
pub struct HalfEdgeMesh {
    vertices: DenseMap<VertexHandle, Vertex>,
    faces: DenseMap<FaceHandle, Face>,
    half_edges: DenseMap<HalfEdgeHandle, HalfEdge>,
}

/// Data stored per `Face`.
#[derive(Clone, Copy, PartialEq)]
struct Face {
    /// Handle of one (arbitrary) half edge adjacent to the face.
    edge: HalfEdgeHandle,
}

/// Data stored per `Vertex`.
#[derive(Clone, Copy)]
struct Vertex {
    /// Handle of one half edge pointing to this vertex.
    ///
    /// - If the vertex is isolated, this is `None`.
    /// - If the vertex is a boundary vertex, this stores one of the incoming
    ///   boundary half edges.
    /// - Otherwise, the half edge is arbitrary.
    incoming: Opt<HalfEdgeHandle>,
}

/// Data stored per half edge.
#[derive(Clone, Copy)]
struct HalfEdge {
    /// The adjacent face, if one exists.
    face: Opt<FaceHandle>,

    /// The vertex this half edge points to.
    target: VertexHandle,

    /// The next half edge around the face or hole this half edge is adjacent
    /// to (going counter clock wise).
    next: HalfEdgeHandle,

    /// The previous half edge around the face or hole.
    prev: HalfEdgeHandle,
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.incoming.into_option() == other.incoming.into_option()
    }
}

impl PartialEq for HalfEdge {
    fn eq(&self, other: &Self) -> bool {
        self.face.into_option() == other.face.into_option()
            && self.target == other.target
            && self.next == other.next
            && self.prev == other.prev
    }
}

impl fmt::Debug for HalfEdgeMesh {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HalfEdgeMesh")
            .field("vertices", &self.vertices)
            .field("faces", &self.faces)
            .field("half_edges", &self.half_edges)
            .finish()
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vertex {{ incoming: {:?} }}", self.incoming.into_option())
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Face {{ edge: {:?} }}", self.edge)
    }
}

impl fmt::Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "HalfEdge {{ target: {:5} next: {:6} prev: {:6} face: {:?} }}",
            format!("{:?},", self.target),
            format!("{:?},", self.next),
            format!("{:?},", self.prev),
            self.face.into_option(),
        )
    }
}

impl Empty for HalfEdgeMesh {
    fn empty() -> Self {
        Self {
            vertices: DenseMap::new(),
            faces: DenseMap::new(),
            half_edges: DenseMap::new(),
        }
    }
}

impl Default for HalfEdgeMesh {
    fn default() -> Self {
        Self::empty()
    }
}

fn to_opt<H: Handle + optional::Noned>(h: Option<H>) -> Opt<H> {
    match h {
        Some(h) => Opt::some(h),
        None => Opt::none(),
    }
}

/// Helper macro to set the `next` and `prev` handles in one line. These two
/// handles always have to be set at the same time, so with this macro you
/// cannot forget.
macro_rules! set_next_prev {
    ($mesh:ident, $prev:tt -> $next:tt) => {{
        $mesh.he_mut($prev).next = $next;
        $mesh.he_mut($next).prev = $prev;
    }};
}


// ===============================================================================================
// ===== Internal helper methods
// ===============================================================================================

impl HalfEdgeMesh {
    fn vertex(&self, vh: VertexHandle) -> &Vertex {
        match self.vertices.get_ref(vh) {
            Some(v) => v,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this vertex does not exist in this mesh",
                vh,
            ),
        }
    }

    fn vertex_mut(&mut self, vh: VertexHandle) -> &mut Vertex {
        match self.vertices.get_mut(vh) {
            Some(v) => v,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this vertex does not exist in this mesh",
                vh,
            ),
        }
    }

    fn face_data(&self, fh: FaceHandle) -> &Face {
        match self.faces.get_ref(fh) {
            Some(f) => f,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this face does not exist in this mesh",
                fh,
            ),
        }
    }

    fn he(&self, heh: HalfEdgeHandle) -> &HalfEdge {
        match self.half_edges.get_ref(heh) {
            Some(he) => he,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this half edge does not exist in this \
                    mesh",
                heh,
            ),
        }
    }

    fn he_mut(&mut self, heh: HalfEdgeHandle) -> &mut HalfEdge {
        match self.half_edges.get_mut(heh) {
            Some(he) => he,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this half edge does not exist in this \
                    mesh",
                heh,
            ),
        }
    }

    /// Tries to find the half edge from `from` to `to`. Returns `None` if
    /// there is no edge between the two vertices.
    fn he_between(&self, from: VertexHandle, to: VertexHandle) -> Option<HalfEdgeHandle> {
        self.incoming_halfedges(from)
            .map(|incoming| incoming.twin())
            .find(|&outgoing| self.he(outgoing).target == to)
    }

    /// Tries to find a half edge pointing towards `start_edge.target` that
    /// satisfies the given predicate. Returns `None` if no edge around
    /// `start_edge.target` satisfying `predicate` is found.
    #[inline(always)]
    fn find_incoming_he(
        &self,
        start_edge: HalfEdgeHandle,
        mut predicate: impl FnMut(HalfEdgeHandle) -> bool,
    ) -> Option<HalfEdgeHandle> {
        let mut incoming = start_edge;
        loop {
            if predicate(incoming) {
                return Some(incoming);
            }

            let next = self.he(incoming).next.twin();
            if next == start_edge {
                return None;
            }

            incoming = next;
        }
    }

    /// Adds two half edges between `from` and `to`. Returns the handle of the
    /// half edge pointing to `to`.
    ///
    /// Both half edges have no face and their `next` and `prev` fields point
    /// to themselves. The caller has to link them into the mesh. The anchors
    /// of the vertices are not changed.
    fn add_edge_partially(&mut self, from: VertexHandle, to: VertexHandle) -> HalfEdgeHandle {
        let lower = self.half_edges.next_push_handle();
        debug_assert!(lower.idx() % 2 == 0, "half edges are not stored in pairs");

        let face = Opt::none();
        let upper = lower.twin();
        self.half_edges.push(HalfEdge { target: from, face, next: lower, prev: lower });
        self.half_edges.push(HalfEdge { target: to, face, next: upper, prev: upper })
    }

    /// Adds a face defined by the given `vertices`. The vertices have already
    /// been checked to exist and be unique.
    fn add_face_impl(&mut self, vertices: &[VertexHandle]) -> FaceHandle {
        // ===================================================================
        // ===== Find edges between vertices
        // ===================================================================
        // `inner_half_edges[i]` goes from `vertices[i]` to
        // `vertices[(i + 1) % len]`. Missing edges are added, but not yet
        // linked to anything.
        let mut inner_half_edges = SmallVec::<[HalfEdgeHandle; 4]>::new();
        for vi in 0..vertices.len() {
            let from = vertices[vi];
            let to = vertices[(vi + 1) % vertices.len()];

            let he = match self.he_between(from, to) {
                Some(he) => {
                    // Make sure the half edge we found is not connected to a
                    // face already.
                    assert!(self.he(he).face.is_none(), "{}", NON_MANIFOLD_EDGE_ERR);
                    he
                }
                None => self.add_edge_partially(from, to),
            };
            inner_half_edges.push(he);
        }


        // ===================================================================
        // ===== Add face and fix `face` handle of inner edges
        // ===================================================================
        let new_face = self.faces.push(Face {
            edge: inner_half_edges[0],
        });

        for &he in &inner_half_edges {
            self.he_mut(he).face = Opt::some(new_face);
        }


        // ===================================================================
        // ===== Fix `next` handles
        // ===================================================================
        // Each corner is handled separately. For the corner vertex `v` of the
        // new face `F`, `incoming` and `outgoing` are the outer half edges:
        //
        //                 ?
        //           ?           ?
        //
        //                (v)
        //               ^/ ^\
        //              //   \\
        //   incoming  //     \\  outgoing
        //            //   F   \\
        //           /v         \v
        //          ( ) ------> ( )
        //              <------
        //
        // There can be multiple fan blades around `v` that are only connected
        // via the `next` handles of border half edges. When inserting a new
        // blade we don't know where it belongs, so we insert it anywhere.
        // When blades are reconnected (the `(true, true)` case below), the
        // blade order might have to be fixed.
        for vi in 0..vertices.len() {
            let prev_idx = vi.checked_sub(1).unwrap_or(vertices.len() - 1);

            let vh = vertices[vi];
            let incoming = inner_half_edges[vi].twin();
            let outgoing = inner_half_edges[prev_idx].twin();

            let incoming_face = self.he(incoming).face;
            let outgoing_face = self.he(outgoing).face;

            match (incoming_face.is_some(), outgoing_face.is_some()) {
                // Both outer half edges are border half edges. If `v` is
                // already connected to something, we create a new fan blade
                // and insert it after some border half edge.
                (false, false) => {
                    if let Some(anchor) = self.vertex(vh).incoming.into_option() {
                        //
                        //           ^  ?     ?  /
                        //            \         /
                        //      start  \   ?   /  end
                        //              \     /
                        //               \   v
                        //                (v)
                        //               ^/ ^\
                        //              //   \\
                        //             //     \\
                        //            //   F   \\
                        //           /v         \v
                        //          ( )         ( )
                        //
                        let end = self.find_incoming_he(anchor, |he| self.he(he).face.is_none())
                            .expect(NON_MANIFOLD_VERTEX_ERR);
                        let start = self.he(end).next;

                        set_next_prev!(self, incoming -> start);
                        set_next_prev!(self, end -> outgoing);
                    } else {
                        // `v` was isolated before.
                        set_next_prev!(self, incoming -> outgoing);
                        self.vertex_mut(vh).incoming = Opt::some(incoming);
                    }
                }

                // The incoming edge is adjacent to another face (IF), but the
                // outgoing is not. The half edge `before_new`, whose `next`
                // handle pointed to `incoming.twin()`, now has to point to
                // `outgoing`.
                //
                //                      /
                //      ?         ?    /
                //           ?        /  before_new
                //                   /
                //                  v
                //      <-------- (v)
                //               ^/ ^\
                //         IF   //   \\
                //             //     \\
                //            //   F   \\
                //           /v         \v
                //          ( )         ( )
                //
                (true, false) => {
                    let before_new = self.he(incoming.twin()).prev;
                    set_next_prev!(self, before_new -> outgoing);
                }

                // The outgoing edge is adjacent to another face (OF), but the
                // incoming is not. `incoming` just needs to point to the half
                // edge `outgoing.twin()` pointed to before.
                //
                //            ^
                //             \   ?
                //              \           ?
                //               \   ?
                //                \
                //                (v)<---------
                //               ^/ ^\
                //              //   \\  OF
                //             //     \\
                //            //   F   \\
                //           /v         \v
                //          ( )         ( )
                //
                (false, true) => {
                    let blade_start = self.he(outgoing.twin()).next;
                    set_next_prev!(self, incoming -> blade_start);
                }

                // Both outer edges are adjacent to a face: we are connecting
                // two fan blades. If the blade of `incoming` (IB) already
                // directly follows the blade of `outgoing` (OB) around `v`,
                // nothing needs to be done. Otherwise IB is moved right after
                // OB.
                //
                //       ┌────┐    ┌─────┐         ┌─────┐    ┌────┐
                //  +--> │ OB │ -> │ AOB │ -> ? -> │ BIB │ -> │ IB │ -> ?
                //  |    └────┘    └─────┘         └─────┘    └────┘    |
                //  +---------------------------------------------------+
                //
                (true, true) => {
                    if self.he(outgoing.twin()).next != incoming.twin() {
                        let ib_end = self.find_incoming_he(
                            incoming,
                            |he| self.he(he).face.is_none(),
                        ).expect(NON_MANIFOLD_VERTEX_ERR);
                        let bib_end = self.he(incoming.twin()).prev;

                        // Remove IB from the cycle.
                        let after_ib = self.he(ib_end).next;
                        set_next_prev!(self, bib_end -> after_ib);

                        // Reinsert it right after OB. The cycle is still
                        // broken at `outgoing.twin()`, but that is repaired
                        // when the inner half edges are linked below.
                        let aob_start = self.he(outgoing.twin()).next;
                        set_next_prev!(self, ib_end -> aob_start);
                    }
                }
            }
        }

        // Now we only need to set the `next` handles of the inner half edges.
        for he_i in 0..inner_half_edges.len() {
            let curr = inner_half_edges[he_i];
            let next = inner_half_edges[(he_i + 1) % inner_half_edges.len()];
            set_next_prev!(self, curr -> next);
        }

        // Some anchors might not be border half edges anymore.
        for &vh in vertices {
            self.adjust_vertex_anchor(vh);
        }

        new_face
    }
}


// ===============================================================================================
// ===== Mesh trait implementations
// ===============================================================================================

impl Mesh for HalfEdgeMesh {
    fn num_vertices(&self) -> hsize {
        self.vertices.num_elements()
    }

    fn next_vertex_handle_from(&self, start: VertexHandle) -> Option<VertexHandle> {
        self.vertices.first_handle_from(start)
    }

    fn last_vertex_handle(&self) -> Option<VertexHandle> {
        self.vertices.last_handle()
    }

    fn contains_vertex(&self, vertex: VertexHandle) -> bool {
        self.vertices.contains_handle(vertex)
    }

    fn num_faces(&self) -> hsize {
        self.faces.num_elements()
    }

    fn next_face_handle_from(&self, start: FaceHandle) -> Option<FaceHandle> {
        self.faces.first_handle_from(start)
    }

    fn last_face_handle(&self) -> Option<FaceHandle> {
        self.faces.last_handle()
    }

    fn contains_face(&self, face: FaceHandle) -> bool {
        self.faces.contains_handle(face)
    }

    fn num_edges(&self) -> hsize {
        self.half_edges.num_elements() / 2
    }

    fn next_edge_handle_from(&self, start: EdgeHandle) -> Option<EdgeHandle> {
        // Both half edges of an edge are always removed together, so looking
        // at the lower half is enough.
        self.half_edges
            .first_handle_from(HalfEdgeHandle::lower_half_of(start))
            .map(|he| he.full_edge())
    }

    fn last_edge_handle(&self) -> Option<EdgeHandle> {
        self.half_edges.last_handle().map(|he| he.full_edge())
    }

    fn contains_edge(&self, edge: EdgeHandle) -> bool {
        self.half_edges.contains_handle(HalfEdgeHandle::lower_half_of(edge))
    }
}

impl MeshMut for HalfEdgeMesh {
    fn add_vertex(&mut self) -> VertexHandle {
        self.vertices.push(Vertex {
            incoming: Opt::none(),
        })
    }

    fn add_face(&mut self, vertices: &[VertexHandle]) -> FaceHandle {
        assert!(
            vertices.len() >= 3,
            "attempt to add a face with only {} vertices, but at least 3 vertices are required",
            vertices.len(),
        );

        for (i, &vh) in vertices.iter().enumerate() {
            self.vertex(vh);
            assert!(
                !vertices[..i].contains(&vh),
                "vertices of new face are not unique: {:?}",
                vertices,
            );
        }

        self.add_face_impl(vertices)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.half_edges.clear();
    }

    fn reserve_for_vertices(&mut self, count: hsize) {
        self.vertices.reserve(count);
    }

    fn reserve_for_faces(&mut self, count: hsize) {
        self.faces.reserve(count);
        self.half_edges.reserve(count * 3);
    }
}

impl HalfEdgeGraph for HalfEdgeMesh {
    fn halfedge_of_face(&self, face: FaceHandle) -> HalfEdgeHandle {
        self.face_data(face).edge
    }

    fn halfedge_of_vertex(&self, vertex: VertexHandle) -> Option<HalfEdgeHandle> {
        self.vertex(vertex).incoming.into_option()
    }

    fn halfedge_of_edge(&self, edge: EdgeHandle) -> HalfEdgeHandle {
        let he = HalfEdgeHandle::lower_half_of(edge);
        assert!(
            self.half_edges.contains_handle(he),
            "{:?} was passed to a half edge mesh, but this edge does not exist in this mesh",
            edge,
        );
        he
    }

    fn edge_of(&self, he: HalfEdgeHandle) -> EdgeHandle {
        he.full_edge()
    }

    fn opposite(&self, he: HalfEdgeHandle) -> HalfEdgeHandle {
        he.twin()
    }

    fn next(&self, he: HalfEdgeHandle) -> HalfEdgeHandle {
        self.he(he).next
    }

    fn prev(&self, he: HalfEdgeHandle) -> HalfEdgeHandle {
        self.he(he).prev
    }

    fn face(&self, he: HalfEdgeHandle) -> Option<FaceHandle> {
        self.he(he).face.into_option()
    }

    fn target(&self, he: HalfEdgeHandle) -> VertexHandle {
        self.he(he).target
    }

    fn num_halfedges(&self) -> hsize {
        self.half_edges.num_elements()
    }
}

impl HalfEdgeGraphMut for HalfEdgeMesh {
    fn set_next(&mut self, he: HalfEdgeHandle, next: HalfEdgeHandle) {
        set_next_prev!(self, he -> next);
    }

    fn set_face(&mut self, he: HalfEdgeHandle, face: Option<FaceHandle>) {
        self.he_mut(he).face = to_opt(face);
    }

    fn set_halfedge_of_vertex(&mut self, vertex: VertexHandle, he: Option<HalfEdgeHandle>) {
        debug_assert!(
            he.map_or(true, |he| self.he(he).target == vertex),
            "anchor {:?} of {:?} does not point to that vertex",
            he,
            vertex,
        );
        self.vertex_mut(vertex).incoming = to_opt(he);
    }

    fn set_halfedge_of_face(&mut self, face: FaceHandle, he: HalfEdgeHandle) {
        match self.faces.get_mut(face) {
            Some(f) => f.edge = he,
            None => panic!(
                "{:?} was passed to a half edge mesh, but this face does not exist in this mesh",
                face,
            ),
        }
    }

    fn remove_edge(&mut self, edge: EdgeHandle) {
        let lower = HalfEdgeHandle::lower_half_of(edge);
        if self.half_edges.remove(lower).is_none() {
            panic!("attempt to remove {:?}, but this edge does not exist in this mesh", edge);
        }
        self.half_edges.remove(lower.twin());
    }

    fn remove_face(&mut self, face: FaceHandle) {
        if self.faces.remove(face).is_none() {
            panic!("attempt to remove {:?}, but this face does not exist in this mesh", face);
        }
    }

    fn remove_vertex(&mut self, vertex: VertexHandle) {
        if self.vertices.remove(vertex).is_none() {
            panic!("attempt to remove {:?}, but this vertex does not exist in this mesh", vertex);
        }
    }
}
