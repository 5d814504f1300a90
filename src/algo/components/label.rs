use tracing::{debug, trace};

use crate::{
    hsize,
    core::HalfEdgeGraph,
    handle::{EdgeHandle, FaceHandle},
    map::{DenseMap, DenseSet, PropMap, PropStoreMut},
    util::Empty,
};
use super::{
    DualGraph, Params,
    params::{index_of, side_table_len},
};


/// The result of [`connected_components`]: a component id for every face.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeling {
    /// The number of components. All ids are in `0..num_components`.
    pub num_components: usize,

    /// The component id of each face.
    pub face_components: DenseMap<FaceHandle, usize>,
}

impl Labeling {
    /// Returns the component id of `face`.
    ///
    /// # Panics
    ///
    /// Panics if `face` was not part of the labeled mesh.
    pub fn component_of(&self, face: FaceHandle) -> usize {
        match self.face_components.get(face) {
            Some(id) => *id,
            None => panic!("{:?} is not part of this labeling", face),
        }
    }
}

/// Returns all faces in the same connected component as `seed`.
///
/// The faces are returned in the order they are discovered by a depth first
/// search, starting with `seed` itself. Faces are connected via edges that
/// are not border edges and not mapped to `true` by `edge_is_constrained`.
///
/// # Panics
///
/// Panics if `seed` is not a face of `mesh`.
pub fn connected_component<M, C>(
    seed: FaceHandle,
    mesh: &M,
    edge_is_constrained: &C,
) -> Vec<FaceHandle>
where
    M: HalfEdgeGraph + ?Sized,
    C: PropMap<EdgeHandle, Target = bool>,
{
    assert!(mesh.contains_face(seed), "{:?} is not a face of the given mesh", seed);

    let dual = DualGraph::new(mesh, edge_is_constrained);
    let mut visited = DenseSet::empty();
    let mut out = Vec::new();
    let mut stack = vec![seed];

    while let Some(face) = stack.pop() {
        // `insert` returns `true` if the face was already visited.
        if visited.insert(face) {
            continue;
        }

        out.push(face);
        stack.extend(dual.neighbors(face).filter(|&n| !visited.contains_handle(n)));
    }

    out
}

/// Assigns a component id to every face of `mesh`.
///
/// Faces are visited in the order of [`Mesh::face_handles`][crate::core::Mesh];
/// each face not yet reached starts a new component with the next unused
/// id. Thus, the component containing the face with the lowest handle has id
/// 0, and so on. The result only depends on the mesh and the params, so
/// calling this twice on an unchanged mesh gives the same labeling.
///
/// Uses `params.edge_is_constrained` and `params.face_index`.
pub fn connected_components<M, C, FI, VI>(mesh: &M, params: &Params<C, FI, VI>) -> Labeling
where
    M: HalfEdgeGraph + ?Sized,
    C: PropMap<EdgeHandle, Target = bool>,
    FI: PropMap<FaceHandle, Target = hsize>,
{
    let dual = DualGraph::new(mesh, &params.edge_is_constrained);

    // Side table from face index to component id.
    let len = side_table_len(&params.face_index, mesh.face_handles());
    let mut component_of = vec![None; len];

    let mut face_components = DenseMap::with_capacity(mesh.num_faces());
    let mut num_components = 0;
    let mut stack = Vec::new();

    for start in mesh.face_handles() {
        if component_of[index_of(&params.face_index, start)].is_some() {
            continue;
        }

        let id = num_components;
        num_components += 1;
        trace!(id, ?start, "new component");

        stack.push(start);
        while let Some(face) = stack.pop() {
            let slot = &mut component_of[index_of(&params.face_index, face)];
            if slot.is_some() {
                continue;
            }

            *slot = Some(id);
            face_components.insert(face, id);
            stack.extend(dual.neighbors(face));
        }
    }

    debug!(
        num_faces = mesh.num_faces(),
        num_components,
        "labeled connected components"
    );

    Labeling { num_components, face_components }
}


#[cfg(test)]
mod tests {
    use crate::{
        prelude::*,
        map::{ConstMap, FnMap, SparseMap},
        test_utils::{find_edge, quad_strip, two_triangles},
    };
    use super::*;

    #[test]
    fn seed_comes_first() {
        let (mesh, _, faces) = quad_strip(4);
        let component = connected_component(faces[2], &mesh, &crate::map::NoConstraint);

        assert_eq!(component[0], faces[2]);
        assert_eq!(component.len(), 4);
        assert_eq_set!(component.into_iter(), [faces[0], faces[1], faces[2], faces[3]]);
    }

    #[test]
    fn seed_is_stopped_by_constraint() {
        let (mesh, vs, faces) = quad_strip(4);

        // The strip has vertices 0..=4 at the bottom and 5..=9 at the top.
        // Cut between the second and third quad.
        let mut constraints = SparseMap::new();
        constraints.insert(find_edge(&mesh, vs[2], vs[7]), true);

        let left = connected_component(faces[0], &mesh, &constraints);
        assert_eq_set!(left.into_iter(), [faces[0], faces[1]]);
        let right = connected_component(faces[3], &mesh, &constraints);
        assert_eq_set!(right.into_iter(), [faces[2], faces[3]]);
    }

    #[test]
    fn one_component() {
        let (mesh, _, faces) = crate::test_utils::tetrahedron();
        let labeling = connected_components(&mesh, &Params::default());

        assert_eq!(labeling.num_components, 1);
        for &f in &faces {
            assert_eq!(labeling.component_of(f), 0);
        }
    }

    #[test]
    fn numbered_in_face_order() {
        let mut mesh = crate::ds::HalfEdgeMesh::empty();
        let vs = (0..10).map(|_| mesh.add_vertex()).collect::<Vec<_>>();
        let f0 = mesh.add_triangle([vs[0], vs[1], vs[2]]);
        let f1 = mesh.add_triangle([vs[3], vs[4], vs[5]]);
        let f2 = mesh.add_triangle([vs[0], vs[2], vs[6]]);
        let f3 = mesh.add_triangle([vs[7], vs[8], vs[9]]);
        let f4 = mesh.add_triangle([vs[4], vs[3], vs[9]]);

        let labeling = connected_components(&mesh, &Params::default());
        assert_eq!(labeling.num_components, 3);
        assert_eq!(labeling.component_of(f0), 0);
        assert_eq!(labeling.component_of(f1), 1);
        assert_eq!(labeling.component_of(f2), 0);
        assert_eq!(labeling.component_of(f3), 2);
        assert_eq!(labeling.component_of(f4), 1);
    }

    #[test]
    fn constrained_diagonal() {
        let (mesh, [a, _, c, _], [x, y]) = two_triangles();
        let diagonal = find_edge(&mesh, a, c);
        let params = Params::default()
            .with_edge_constraints(FnMap(|e: EdgeHandle| Some(e == diagonal)));

        let labeling = connected_components(&mesh, &params);
        assert_eq!(labeling.num_components, 2);
        assert_ne!(labeling.component_of(x), labeling.component_of(y));

        // Labeling does not change the mesh.
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_faces(), 2);
    }

    #[test]
    fn all_edges_constrained() {
        let (mesh, _, _) = quad_strip(5);
        let params = Params::default().with_edge_constraints(ConstMap(true));

        let labeling = connected_components(&mesh, &params);
        assert_eq!(labeling.num_components, mesh.num_faces() as usize);
    }

    #[test]
    fn deterministic() {
        let (mesh, _, _) = quad_strip(3);
        let params = Params::default()
            .with_edge_constraints(FnMap(|e: EdgeHandle| Some(e.idx() % 3 == 0)));

        let a = connected_components(&mesh, &params);
        let b = connected_components(&mesh, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn custom_face_index() {
        let (mesh, _, faces) = quad_strip(3);

        // Reversed, sparse indices.
        let params = Params::default()
            .with_face_index(FnMap(|f: FaceHandle| Some(10 * (5 - f.idx()))));
        let labeling = connected_components(&mesh, &params);
        assert_eq!(labeling.num_components, 1);
        assert_eq!(labeling.face_components.num_elements(), 3);
        assert_eq!(labeling.component_of(faces[2]), 0);
    }

    #[test]
    fn empty_mesh() {
        let mesh = crate::ds::HalfEdgeMesh::empty();
        let labeling = connected_components(&mesh, &Params::default());
        assert_eq!(labeling.num_components, 0);
        assert!(labeling.face_components.is_empty());
    }

    #[test]
    #[should_panic]
    fn incomplete_face_index() {
        let (mesh, _, _) = quad_strip(2);
        let params = Params::default().with_face_index(crate::map::EmptyMap::new());
        connected_components(&mesh, &params);
    }
}
