use tracing::debug;

use crate::{
    hsize,
    core::HalfEdgeGraphMut,
    handle::{EdgeHandle, FaceHandle, VertexHandle},
    map::PropMap,
};
use super::{
    ComponentSizes, Labeling, Mode, Params,
    connected_components, keep_or_remove,
};


/// Removes all connected components except the `n` largest ones (by number
/// of faces) and returns the number of removed components.
///
/// Components with the same number of faces are ranked by their id, i.e. the
/// one containing the face with the lower handle wins.
///
/// - If `n` is 0, the mesh is cleared completely (including isolated
///   vertices) and the number of components it had is returned.
/// - If `n` is at least the number of components, the mesh is not changed
///   and 0 is returned.
pub fn keep_largest_connected_components<M, C, FI, VI>(
    mesh: &mut M,
    n: usize,
    params: &Params<C, FI, VI>,
) -> usize
where
    M: HalfEdgeGraphMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    let labeling = connected_components(&*mesh, params);
    let total = labeling.num_components;

    if n == 0 {
        debug!(total, "keeping no component, clearing mesh");
        mesh.clear();
        return total;
    }

    if n >= total {
        debug!(n, total, "keeping all components");
        return 0;
    }

    let ids = ComponentSizes::count(&labeling).largest(n);
    debug!(?ids, total, "keeping largest components");
    keep_or_remove(mesh, &ids, &labeling.face_components, Mode::Keep, &params.vertex_index);

    total - n
}

/// Removes all connected components with fewer than `min_faces` faces and
/// returns the number of removed components.
///
/// Like every function here except the no-op cases of
/// [`keep_largest_connected_components`], this removes isolated vertices,
/// even if no component is removed (e.g. with `min_faces <= 1`).
pub fn keep_large_connected_components<M, C, FI, VI>(
    mesh: &mut M,
    min_faces: usize,
    params: &Params<C, FI, VI>,
) -> usize
where
    M: HalfEdgeGraphMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    let labeling = connected_components(&*mesh, params);
    let ids = ComponentSizes::count(&labeling).at_least(min_faces);
    let removed = labeling.num_components - ids.len();

    debug!(min_faces, kept = ids.len(), removed, "keeping large components");
    keep_or_remove(mesh, &ids, &labeling.face_components, Mode::Keep, &params.vertex_index);

    removed
}

/// Removes all connected components except the ones listed in `ids`.
///
/// `labeling` has to be the result of [`connected_components`] on this
/// very mesh; it is invalid as soon as the mesh is modified. Ids that do not
/// exist in the labeling are ignored. Only `params.vertex_index` is used.
pub fn keep_connected_components<M, C, FI, VI>(
    mesh: &mut M,
    ids: &[usize],
    labeling: &Labeling,
    params: &Params<C, FI, VI>,
)
where
    M: HalfEdgeGraphMut,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    keep_or_remove(mesh, ids, &labeling.face_components, Mode::Keep, &params.vertex_index);
}

/// Removes the connected components listed in `ids`. Isolated vertices are
/// removed as well, even if `ids` is empty.
///
/// See [`keep_connected_components`] for the requirements on `labeling`.
pub fn remove_connected_components<M, C, FI, VI>(
    mesh: &mut M,
    ids: &[usize],
    labeling: &Labeling,
    params: &Params<C, FI, VI>,
)
where
    M: HalfEdgeGraphMut,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    keep_or_remove(mesh, ids, &labeling.face_components, Mode::Remove, &params.vertex_index);
}

/// Removes all connected components that do not contain any of the given
/// faces. Multiple faces of the same component are fine.
///
/// # Panics
///
/// Panics if one of the faces is not part of the mesh.
pub fn keep_connected_components_of<M, C, FI, VI>(
    mesh: &mut M,
    faces: &[FaceHandle],
    params: &Params<C, FI, VI>,
)
where
    M: HalfEdgeGraphMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    let labeling = connected_components(&*mesh, params);
    let ids = components_of(&labeling, faces);
    keep_or_remove(mesh, &ids, &labeling.face_components, Mode::Keep, &params.vertex_index);
}

/// Removes all connected components that contain at least one of the given
/// faces. Isolated vertices are removed as well, even if `faces` is empty.
///
/// # Panics
///
/// Panics if one of the faces is not part of the mesh.
pub fn remove_connected_components_of<M, C, FI, VI>(
    mesh: &mut M,
    faces: &[FaceHandle],
    params: &Params<C, FI, VI>,
)
where
    M: HalfEdgeGraphMut,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
    VI: PropMap<VertexHandle, Target = hsize>,
{
    let labeling = connected_components(&*mesh, params);
    let ids = components_of(&labeling, faces);
    keep_or_remove(mesh, &ids, &labeling.face_components, Mode::Remove, &params.vertex_index);
}

/// Returns the sorted, deduplicated component ids of the given faces.
fn components_of(labeling: &Labeling, faces: &[FaceHandle]) -> Vec<usize> {
    let mut ids = faces.iter().map(|&f| labeling.component_of(f)).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    ids
}
