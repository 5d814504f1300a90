use std::fmt::Debug;

use crate::{
    hsize,
    handle::{Handle, EdgeHandle, FaceHandle, VertexHandle},
    map::{HandleIndexMap, NoConstraint, PropMap},
};


/// Optional parameters shared by all component algorithms.
///
/// Every field has a default that is fine for most uses, so usually you start
/// with `Params::default()` and change single fields via the `with_*`
/// methods:
///
/// ```
/// use isle::{
///     prelude::*,
///     algo::components::Params,
///     map::SparseMap,
///     EdgeHandle,
/// };
///
/// let mut creases = SparseMap::new();
/// creases.insert(EdgeHandle::new(3), true);
///
/// let params = Params::default().with_edge_constraints(creases);
/// assert_eq!(params.edge_is_constrained.num_props(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Params<C = NoConstraint, FI = HandleIndexMap, VI = HandleIndexMap> {
    /// Edges mapped to `true` are never crossed when exploring components,
    /// as if they were border edges. Edges without value are not
    /// constrained. *Default*: [`NoConstraint`].
    pub edge_is_constrained: C,

    /// Maps every face to an index. The indices don't have to be contiguous,
    /// but they are used to index into a temporary array, so they should be
    /// reasonably small. The map has to be complete regarding the mesh.
    /// *Default*: [`HandleIndexMap`].
    pub face_index: FI,

    /// Like `face_index`, but for vertices. Only used by algorithms that
    /// remove components. *Default*: [`HandleIndexMap`].
    pub vertex_index: VI,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            edge_is_constrained: NoConstraint,
            face_index: HandleIndexMap,
            vertex_index: HandleIndexMap,
        }
    }
}

impl<C, FI, VI> Params<C, FI, VI> {
    /// Replaces the edge constraint map.
    pub fn with_edge_constraints<C2>(self, edge_is_constrained: C2) -> Params<C2, FI, VI>
    where
        C2: PropMap<EdgeHandle, Target = bool>,
    {
        Params {
            edge_is_constrained,
            face_index: self.face_index,
            vertex_index: self.vertex_index,
        }
    }

    /// Replaces the face index map.
    pub fn with_face_index<FI2>(self, face_index: FI2) -> Params<C, FI2, VI>
    where
        FI2: PropMap<FaceHandle, Target = hsize>,
    {
        Params {
            edge_is_constrained: self.edge_is_constrained,
            face_index,
            vertex_index: self.vertex_index,
        }
    }

    /// Replaces the vertex index map.
    pub fn with_vertex_index<VI2>(self, vertex_index: VI2) -> Params<C, FI, VI2>
    where
        VI2: PropMap<VertexHandle, Target = hsize>,
    {
        Params {
            edge_is_constrained: self.edge_is_constrained,
            face_index: self.face_index,
            vertex_index,
        }
    }
}

/// Returns `true` if `edge` is mapped to `true`. A missing value means
/// unconstrained.
pub(crate) fn is_constrained<C>(edge_is_constrained: &C, edge: EdgeHandle) -> bool
where
    C: PropMap<EdgeHandle, Target = bool>,
{
    edge_is_constrained.get(edge).map_or(false, |v| *v)
}

/// Looks up the index of `handle` in an index map.
///
/// # Panics
///
/// Panics if the map has no value for `handle`.
pub(crate) fn index_of<H, M>(index_map: &M, handle: H) -> usize
where
    H: Handle + Debug,
    M: PropMap<H, Target = hsize>,
{
    match index_map.get(handle) {
        Some(idx) => *idx as usize,
        None => panic!("index map is not complete: no index for {:?}", handle),
    }
}

/// Returns one more than the largest index of the given handles, i.e. the
/// length of a side table that can be indexed with all of them.
pub(crate) fn side_table_len<H, M>(index_map: &M, handles: impl Iterator<Item = H>) -> usize
where
    H: Handle + Debug,
    M: PropMap<H, Target = hsize>,
{
    handles.map(|h| index_of(index_map, h) + 1).max().unwrap_or(0)
}
