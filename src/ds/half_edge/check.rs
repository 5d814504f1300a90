use failure::Fail;

use crate::{
    core::{HalfEdgeGraph, Mesh},
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
    map::{DenseSet, PropMap},
};
use super::HalfEdgeMesh;


/// A broken invariant found by [`HalfEdgeMesh::check_integrity`].
///
/// If you get one of these after only using the public API of this library,
/// that's a bug in this library.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum IntegrityError {
    #[fail(display = "[{}].{} = {}, but that element does not exist", _0, _1, _2)]
    BrokenReference(String, &'static str, String),

    #[fail(display = "{:?} exists, but its twin {:?} does not", _0, _1)]
    MissingTwin(HalfEdgeHandle, HalfEdgeHandle),

    #[fail(display = "[{:?}].incoming = {:?}, but [{:?}].target = {:?}", _0, _1, _1, _2)]
    VertexAnchor(VertexHandle, HalfEdgeHandle, VertexHandle),

    #[fail(
        display = "[{:?}].incoming = {:?} is not a border half edge, but {:?} is",
        _0, _1, _2
    )]
    VertexAnchorNotBorder(VertexHandle, HalfEdgeHandle, HalfEdgeHandle),

    #[fail(display = "{:?} points to {:?}, but that vertex has no incoming half edge", _0, _1)]
    UnanchoredVertex(HalfEdgeHandle, VertexHandle),

    #[fail(
        display = "{:?} points to {:?}, but is not reachable when circulating around it",
        _0, _1
    )]
    UnreachableIncoming(HalfEdgeHandle, VertexHandle),

    #[fail(display = "[{:?}].edge = {:?}, but [{:?}].face = {:?}", _0, _1, _1, _2)]
    FaceAnchor(FaceHandle, HalfEdgeHandle, Option<FaceHandle>),

    #[fail(display = "[{:?}].next = {:?}, but [{:?}].prev = {:?}", _0, _1, _1, _2)]
    NextPrev(HalfEdgeHandle, HalfEdgeHandle, HalfEdgeHandle),

    #[fail(
        display = "while iterating around {:?} starting from {:?}, {:?} was encountered \
            and its face is {:?}",
        _0, _1, _2, _3
    )]
    FaceCycle(Option<FaceHandle>, HalfEdgeHandle, HalfEdgeHandle, Option<FaceHandle>),

    #[fail(
        display = "while iterating around {:?} starting from {:?}, {:?} was encountered \
            and its target is {:?}",
        _0, _1, _2, _3
    )]
    VertexCycle(VertexHandle, HalfEdgeHandle, HalfEdgeHandle, VertexHandle),

    #[fail(display = "{:?} is part of two cycles (found again while iterating from {:?})", _0, _1)]
    SharedCycle(HalfEdgeHandle, HalfEdgeHandle),
}

macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

impl HalfEdgeMesh {
    /// Performs a number of integrity checks on internal data and returns the
    /// first broken invariant found.
    ///
    /// This method is mainly intended for unit tests: every algorithm that
    /// modifies a mesh should leave it in a state that passes this check. It
    /// has a runtime of `O(|V| + |E| + |F|)`.
    ///
    /// Checked are:
    /// - all references between elements point to existing elements,
    /// - half edges come in pairs,
    /// - `prev(next(he)) == he`,
    /// - the anchors of faces and vertices point to adjacent half edges,
    /// - border vertices are anchored at a border half edge,
    /// - every `next` cycle has a single face (or none),
    /// - circulating around every vertex from its anchor reaches all half
    ///   edges pointing to it.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        // Check vertices
        for (vh, v) in self.vertices.iter() {
            if let Some(incoming) = v.incoming.into_option() {
                ensure!(
                    self.half_edges.contains_handle(incoming),
                    IntegrityError::BrokenReference(
                        format!("{:?}", vh), "incoming", format!("{:?}", incoming),
                    )
                );

                let target = self.half_edges[incoming].target;
                ensure!(target == vh, IntegrityError::VertexAnchor(vh, incoming, target));
            }
        }

        // Check faces
        for (fh, f) in self.faces.iter() {
            ensure!(
                self.half_edges.contains_handle(f.edge),
                IntegrityError::BrokenReference(
                    format!("{:?}", fh), "edge", format!("{:?}", f.edge),
                )
            );

            let face = self.half_edges[f.edge].face.into_option();
            ensure!(face == Some(fh), IntegrityError::FaceAnchor(fh, f.edge, face));
        }

        // Check half edges
        for (heh, he) in self.half_edges.iter() {
            ensure!(
                self.half_edges.contains_handle(heh.twin()),
                IntegrityError::MissingTwin(heh, heh.twin())
            );

            if let Some(face) = he.face.into_option() {
                ensure!(
                    self.faces.contains_handle(face),
                    IntegrityError::BrokenReference(
                        format!("{:?}", heh), "face", format!("{:?}", face),
                    )
                );
            }

            ensure!(
                self.vertices.contains_handle(he.target),
                IntegrityError::BrokenReference(
                    format!("{:?}", heh), "target", format!("{:?}", he.target),
                )
            );
            ensure!(
                self.vertices[he.target].incoming.is_some(),
                IntegrityError::UnanchoredVertex(heh, he.target)
            );

            for &(field, other) in &[("next", he.next), ("prev", he.prev)] {
                ensure!(
                    self.half_edges.contains_handle(other),
                    IntegrityError::BrokenReference(
                        format!("{:?}", heh), field, format!("{:?}", other),
                    )
                );
            }

            let prev_of_next = self.half_edges[he.next].prev;
            ensure!(prev_of_next == heh, IntegrityError::NextPrev(heh, he.next, prev_of_next));
        }

        // Iterate around all faces and holes to make sure all cycles are fine.
        let mut visited = DenseSet::with_capacity(self.half_edges.num_elements());
        for start in self.half_edges.handles() {
            if visited.contains_handle(start) {
                continue;
            }

            let face = self.half_edges[start].face.into_option();
            let mut heh = start;
            loop {
                let actual = self.half_edges[heh].face.into_option();
                ensure!(actual == face, IntegrityError::FaceCycle(face, start, heh, actual));
                ensure!(!visited.insert(heh), IntegrityError::SharedCycle(heh, start));

                heh = self.half_edges[heh].next;
                if heh == start {
                    break;
                }
            }
        }

        // Iterate around all vertices to make sure all cycles are fine.
        let mut visited = DenseSet::with_capacity(self.half_edges.num_elements());
        for start in self.half_edges.handles() {
            if visited.contains_handle(start) {
                continue;
            }

            let vertex = self.half_edges[start].target;
            let mut heh = start;
            loop {
                let actual = self.half_edges[heh].target;
                ensure!(actual == vertex, IntegrityError::VertexCycle(vertex, start, heh, actual));
                ensure!(!visited.insert(heh), IntegrityError::SharedCycle(heh, start));

                heh = self.half_edges[heh].next.twin();
                if heh == start {
                    break;
                }
            }
        }

        // Make sure all incoming half edges are reachable from the anchor and
        // that border vertices are anchored at a border half edge.
        let mut reachable = DenseSet::with_capacity(self.half_edges.num_elements());
        for vh in self.vertex_handles() {
            let anchor = match self.halfedge_of_vertex(vh) {
                Some(anchor) => anchor,
                None => continue,
            };

            let mut border = None;
            for incoming in self.incoming_halfedges(vh) {
                reachable.insert(incoming);
                if border.is_none() && self.is_border(incoming) {
                    border = Some(incoming);
                }
            }

            if let Some(border) = border {
                ensure!(
                    self.is_border(anchor),
                    IntegrityError::VertexAnchorNotBorder(vh, anchor, border)
                );
            }
        }

        for (heh, he) in self.half_edges.iter() {
            ensure!(
                reachable.contains_handle(heh),
                IntegrityError::UnreachableIncoming(heh, he.target)
            );
        }

        Ok(())
    }
}
