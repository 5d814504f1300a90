use smallvec::SmallVec;
use tracing::debug;

use crate::{
    hsize,
    core::{HalfEdgeGraph, MeshMut},
    handle::{EdgeHandle, FaceHandle, VertexHandle},
    map::{DenseMap, PropMap, PropStoreMut, SparseMap},
};
use super::{Params, connected_components};


/// Copies every connected component of `mesh` into a new mesh. The meshes
/// are returned in the order of their component ids.
///
/// The source mesh is not changed. Each face is added to its new mesh with
/// the same vertex order as in the source mesh. Isolated vertices are not
/// copied. Use [`split_connected_components_with_origins`] if you need to
/// carry vertex properties over.
pub fn split_connected_components<M, C, FI, VI>(mesh: &M, params: &Params<C, FI, VI>) -> Vec<M>
where
    M: HalfEdgeGraph + MeshMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
{
    split_connected_components_with_origins(mesh, params)
        .into_iter()
        .map(|(part, _)| part)
        .collect()
}

/// Like [`split_connected_components`], but additionally returns a map from
/// the vertices of each new mesh to the vertices of `mesh` they were copied
/// from.
///
/// A vertex that is shared by multiple components (e.g. where two
/// components only touch in one vertex) is copied into each of them.
///
/// ```
/// use isle::{
///     prelude::*,
///     algo::components::{self, Params},
///     ds::HalfEdgeMesh,
///     shape::Grid,
/// };
///
/// let mut mesh = HalfEdgeMesh::empty();
/// let first = Grid { cols: 2, rows: 1, ..Grid::default() }.add_to(&mut mesh);
/// let second = Grid { cols: 1, rows: 1, ..Grid::default() }.add_to(&mut mesh);
///
/// let parts = components::split_connected_components_with_origins(&mesh, &Params::default());
/// assert_eq!(parts.len(), 2);
///
/// let (part, origins) = &parts[1];
/// assert_eq!(part.num_faces(), 1);
/// for v in part.vertex_handles() {
///     assert!(second.vertices.contains(&origins[v]));
///     assert!(!first.vertices.contains(&origins[v]));
/// }
/// ```
pub fn split_connected_components_with_origins<M, C, FI, VI>(
    mesh: &M,
    params: &Params<C, FI, VI>,
) -> Vec<(M, DenseMap<VertexHandle, VertexHandle>)>
where
    M: HalfEdgeGraph + MeshMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
{
    let labeling = connected_components(mesh, params);

    let mut parts = (0..labeling.num_components)
        .map(|_| (M::empty(), DenseMap::new()))
        .collect::<Vec<_>>();

    // For each component: from old vertex to new vertex.
    let mut copies = (0..labeling.num_components)
        .map(|_| SparseMap::<VertexHandle, VertexHandle>::new())
        .collect::<Vec<_>>();

    for f in mesh.face_handles() {
        let id = labeling.component_of(f);
        let (part, origins) = &mut parts[id];
        let copy_of = &mut copies[id];

        let mut vertices = SmallVec::<[VertexHandle; 4]>::new();
        // Sources of the half edges starting at the face anchor give back
        // the order the face was added with.
        for old in mesh.halfedges_around_face(f).map(|he| mesh.source(he)) {
            let existing = copy_of.get(old).map(|new| *new);
            let new = match existing {
                Some(new) => new,
                None => {
                    let new = part.add_vertex();
                    copy_of.insert(old, new);
                    origins.insert(new, old);
                    new
                }
            };
            vertices.push(new);
        }

        part.add_face(&vertices);
    }

    debug!(num_parts = parts.len(), "split mesh into connected components");
    parts
}
