use crate::{
    core::HalfEdgeGraph,
    handle::{EdgeHandle, FaceHandle},
    map::PropMap,
};
use super::params::is_constrained;


/// The face adjacency graph of a mesh: faces are nodes and two faces are
/// adjacent if they share an edge that is not constrained.
///
/// This is only a view on the mesh, nothing is precomputed.
#[derive(Debug)]
pub struct DualGraph<'a, M: ?Sized, C> {
    mesh: &'a M,
    edge_is_constrained: &'a C,
}

impl<'a, M, C> DualGraph<'a, M, C>
where
    M: HalfEdgeGraph + ?Sized,
    C: PropMap<EdgeHandle, Target = bool>,
{
    pub fn new(mesh: &'a M, edge_is_constrained: &'a C) -> Self {
        Self { mesh, edge_is_constrained }
    }

    /// Returns `true` if components extend across `edge`: it has a face on
    /// both sides and is not constrained.
    pub fn is_passable(&self, edge: EdgeHandle) -> bool {
        !self.mesh.is_border_edge(edge) && !is_constrained(self.edge_is_constrained, edge)
    }

    /// Returns all faces adjacent to `face` via a passable edge. A face can
    /// be yielded more than once if it shares multiple edges with `face`.
    pub fn neighbors(&self, face: FaceHandle) -> impl Iterator<Item = FaceHandle> + '_ {
        let mesh = self.mesh;
        mesh.halfedges_around_face(face).filter_map(move |he| {
            if self.is_passable(mesh.edge_of(he)) {
                mesh.face(mesh.opposite(he))
            } else {
                None
            }
        })
    }
}
