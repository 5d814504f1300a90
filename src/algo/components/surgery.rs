use std::collections::HashSet;

use tracing::debug;

use crate::{
    hsize,
    core::HalfEdgeGraphMut,
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
    map::{DenseMap, DenseSet, PropMap},
};
use super::params::{index_of, side_table_len};


/// Whether the listed components are the ones to keep or the ones to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Keep,
    Remove,
}

/// Removes all faces that are not selected, together with all edges and
/// vertices that are not adjacent to a selected face.
///
/// With `Mode::Keep`, the selected faces are those whose component id (as
/// given by `face_components`) is in `ids`. With `Mode::Remove`, all other
/// faces are selected. Isolated vertices are removed in both cases.
///
/// The `next`/`prev` links around the removed parts are repaired: where a
/// kept face was adjacent to a removed one, there is a border now. Vertex
/// anchors of remaining vertices are fixed, too. The `vertex_index` is used
/// for a temporary per-vertex side table.
///
/// This is the low level building block for the front ends in this module,
/// like [`keep_connected_components`][super::keep_connected_components].
///
/// # Non-manifold results
///
/// If the remaining faces would form a non-manifold mesh (e.g. two kept
/// faces only connected via a removed face that shared an edge with both),
/// the result is unspecified. This is not detected.
///
/// # Panics
///
/// Panics if `face_components` has no value for a face of the mesh or if
/// `vertex_index` has no value for a vertex.
pub fn keep_or_remove<M, VI>(
    mesh: &mut M,
    ids: &[usize],
    face_components: &DenseMap<FaceHandle, usize>,
    mode: Mode,
    vertex_index: &VI,
)
where
    M: HalfEdgeGraphMut,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    let ids = ids.iter().cloned().collect::<HashSet<_, ahash::RandomState>>();

    // ===================================================================
    // ===== Decide which faces and vertices to keep
    // ===================================================================
    let mut keep_face = DenseSet::with_capacity(mesh.num_faces());
    for f in mesh.face_handles() {
        let id = match face_components.get(f) {
            Some(id) => *id,
            None => panic!("face component map has no value for {:?}", f),
        };

        if ids.contains(&id) == (mode == Mode::Keep) {
            keep_face.insert(f);
        }
    }

    let mut keep_vertex = vec![false; side_table_len(vertex_index, mesh.vertex_handles())];
    for f in keep_face.handles() {
        for v in mesh.vertices_around_face(f) {
            keep_vertex[index_of(vertex_index, v)] = true;
        }
    }
    let is_kept = |v: VertexHandle| keep_vertex[index_of(vertex_index, v)];


    // ===================================================================
    // ===== Relink and remove edges
    // ===================================================================
    let mut removed_edges = 0;
    let mut detached = 0;
    let mut it = mesh.edge_handles_mut();
    while let Some(e) = it.next() {
        let mesh = it.mesh();
        let h = mesh.halfedge_of_edge(e);
        let oh = mesh.opposite(h);
        let v = mesh.source(h);
        let w = mesh.target(h);

        match (is_kept(v), is_kept(w)) {
            // Both vertices will be removed, so we don't care about the
            // connectivity around them.
            (false, false) => {
                mesh.remove_edge(e);
                removed_edges += 1;
            }

            (true, true) => {
                // `None` for border half edges, otherwise the keep flag of
                // the face.
                let fh = mesh.face(h).map(|f| keep_face.contains_handle(f));
                let ofh = mesh.face(oh).map(|f| keep_face.contains_handle(f));

                match (fh, ofh) {
                    // An isolated edge or the edge is still adjacent to the
                    // faces it should be adjacent to.
                    (None, None)
                    | (Some(true), None)
                    | (None, Some(true))
                    | (Some(true), Some(true)) => {}

                    (Some(true), Some(false)) => {
                        mesh.set_face(oh, None);
                        detached += 1;
                    }
                    (Some(false), Some(true)) => {
                        mesh.set_face(h, None);
                        detached += 1;
                    }

                    // No adjacent face is kept.
                    _ => {
                        debug_assert!(fh != Some(true) && ofh != Some(true));

                        if mesh.halfedge_of_vertex(v) == Some(oh) {
                            redirect_anchor(mesh, v, h);
                        }
                        if mesh.halfedge_of_vertex(w) == Some(h) {
                            redirect_anchor(mesh, w, oh);
                        }

                        let (prev_h, next_h) = (mesh.prev(h), mesh.next(h));
                        let (prev_oh, next_oh) = (mesh.prev(oh), mesh.next(oh));
                        mesh.set_next(prev_h, next_oh);
                        mesh.set_next(prev_oh, next_h);
                        mesh.remove_edge(e);
                        removed_edges += 1;
                    }
                }
            }

            // Only one vertex is kept: only the cycle around that vertex
            // needs to be repaired.
            (true, false) => {
                if mesh.halfedge_of_vertex(v) == Some(oh) {
                    redirect_anchor(mesh, v, h);
                }

                let (prev_h, next_oh) = (mesh.prev(h), mesh.next(oh));
                mesh.set_next(prev_h, next_oh);
                mesh.remove_edge(e);
                removed_edges += 1;
            }
            (false, true) => {
                if mesh.halfedge_of_vertex(w) == Some(h) {
                    redirect_anchor(mesh, w, oh);
                }

                let (prev_oh, next_h) = (mesh.prev(oh), mesh.next(h));
                mesh.set_next(prev_oh, next_h);
                mesh.remove_edge(e);
                removed_edges += 1;
            }
        }
    }


    // ===================================================================
    // ===== Remove faces and vertices
    // ===================================================================
    let mut removed_faces = 0;
    let mut it = mesh.face_handles_mut();
    while let Some(f) = it.next() {
        if keep_face.contains_handle(f) {
            debug_assert!({
                let mesh = it.mesh();
                mesh.contains_edge(mesh.edge_of(mesh.halfedge_of_face(f)))
            });
        } else {
            it.mesh().remove_face(f);
            removed_faces += 1;
        }
    }

    let mut removed_vertices = 0;
    let mut it = mesh.vertex_handles_mut();
    while let Some(v) = it.next() {
        if is_kept(v) {
            // Faces next to the vertex might have been removed, so its
            // anchor might not be a border half edge anymore.
            it.mesh().adjust_vertex_anchor(v);
        } else {
            it.mesh().remove_vertex(v);
            removed_vertices += 1;
        }
    }

    debug!(
        ?mode,
        num_ids = ids.len(),
        removed_faces,
        removed_edges,
        removed_vertices,
        detached_half_edges = detached,
        "removed faces by component"
    );
}

/// Sets the anchor of `vertex` to `prev(outgoing)`, because the edge of
/// `outgoing` is about to be removed.
fn redirect_anchor<M: HalfEdgeGraphMut>(
    mesh: &mut M,
    vertex: VertexHandle,
    outgoing: HalfEdgeHandle,
) {
    let new_anchor = mesh.prev(outgoing);
    debug_assert_ne!(
        new_anchor,
        mesh.opposite(outgoing),
        "kept vertex {:?} would lose its only edge",
        vertex,
    );
    mesh.set_halfedge_of_vertex(vertex, Some(new_anchor));
}
