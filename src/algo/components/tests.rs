use crate::{
    prelude::*,
    EdgeHandle, FaceHandle, VertexHandle,
    ds::HalfEdgeMesh,
    map::{ConstMap, DenseSet, FnMap, NoConstraint, SparseMap},
    shape::Grid,
    test_utils::{bowtie, find_edge, quad_strip, tetrahedron, two_triangles},
};
use super::*;


/// Two triangles that don't share anything.
fn disjoint_triangles() -> (HalfEdgeMesh, [FaceHandle; 2]) {
    let mut mesh = HalfEdgeMesh::empty();
    let vs = (0..6).map(|_| mesh.add_vertex()).collect::<Vec<_>>();
    let x = mesh.add_triangle([vs[0], vs[1], vs[2]]);
    let y = mesh.add_triangle([vs[3], vs[4], vs[5]]);

    (mesh, [x, y])
}

/// Constrains all vertical edges between the quads of a strip created by
/// `quad_strip(n)`, so that every quad is its own component.
fn cut_strip(mesh: &HalfEdgeMesh, vertices: &[VertexHandle]) -> SparseMap<EdgeHandle, bool> {
    let n = vertices.len() / 2 - 1;
    let mut constraints = SparseMap::new();
    for i in 1..n {
        constraints.insert(find_edge(mesh, vertices[i], vertices[n + 1 + i]), true);
    }
    constraints
}


// ===========================================================================
// ===== Labeling
// ===========================================================================

#[test]
fn seeds_partition_faces() {
    let mut mesh = HalfEdgeMesh::empty();
    Grid { cols: 3, rows: 2, triangulate: true }.add_to(&mut mesh);
    Grid { cols: 1, rows: 1, triangulate: false }.add_to(&mut mesh);

    let constraints = FnMap(|e: EdgeHandle| Some(e.idx() % 4 == 1));
    let params = Params::default().with_edge_constraints(constraints);
    let labeling = connected_components(&mesh, &params);
    assert!(labeling.num_components >= 2);

    // One representative per component.
    let mut seeds = vec![None; labeling.num_components];
    for f in mesh.face_handles() {
        seeds[labeling.component_of(f)].get_or_insert(f);
    }

    let mut seen = DenseSet::empty();
    for (id, seed) in seeds.into_iter().enumerate() {
        let seed = seed.expect("component without face");
        for f in connected_component(seed, &mesh, &params.edge_is_constrained) {
            assert_eq!(labeling.component_of(f), id);
            assert!(!seen.insert(f), "{:?} found in two components", f);
        }
    }
    assert_eq!(seen.num_elements(), mesh.num_faces());
}

#[test]
fn two_disjoint_triangles() {
    let (mut mesh, [x, y]) = disjoint_triangles();
    let params = Params::default();

    let labeling = connected_components(&mesh, &params);
    assert_eq!(labeling.num_components, 2);
    assert_eq!(labeling.component_of(x), 0);
    assert_eq!(labeling.component_of(y), 1);

    assert_eq!(keep_largest_connected_components(&mut mesh, 1, &params), 1);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_vertices(), 3);
    assert_eq!(mesh.num_edges(), 3);
    assert_eq!(mesh.num_faces(), 1);

    // On a tie, the component with the lower id wins.
    assert!(mesh.contains_face(x));
}

#[test]
fn constrained_diagonal_does_not_duplicate_vertices() {
    let (mesh, [a, _, c, _], _) = two_triangles();
    let mut constraints = SparseMap::new();
    constraints.insert(find_edge(&mesh, a, c), true);
    let params = Params::default().with_edge_constraints(constraints);

    let labeling = connected_components(&mesh, &params);
    assert_eq!(labeling.num_components, 2);
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_edges(), 5);
}


// ===========================================================================
// ===== Largest / large
// ===========================================================================

#[test]
fn keep_zero_clears_mesh() {
    let (mut mesh, _) = disjoint_triangles();
    mesh.add_vertex();

    assert_eq!(keep_largest_connected_components(&mut mesh, 0, &Params::default()), 2);
    assert!(mesh.is_empty());
    assert_eq!(mesh.num_faces(), 0);
    assert_eq!(mesh.num_edges(), 0);
}

#[test]
fn keep_more_than_exist() {
    let (mut mesh, _) = disjoint_triangles();
    mesh.add_vertex();
    let before = mesh.clone();

    assert_eq!(keep_largest_connected_components(&mut mesh, 2, &Params::default()), 0);
    assert_eq!(keep_largest_connected_components(&mut mesh, 7, &Params::default()), 0);
    assert_eq!(mesh, before);
}

#[test]
fn keep_largest_of_cut_grid() {
    let mut mesh = HalfEdgeMesh::empty();
    let grid = Grid { cols: 4, rows: 3, triangulate: true }.add_to(&mut mesh);

    // Cut off the first column.
    let mut constraints = SparseMap::new();
    for row in 0..3 {
        constraints.insert(find_edge(&mesh, grid.vertex(1, row), grid.vertex(1, row + 1)), true);
    }
    let params = Params::default().with_edge_constraints(constraints);

    assert_eq!(keep_largest_connected_components(&mut mesh, 1, &params), 1);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 3 * 3 * 2);
    assert_eq!(mesh.num_vertices(), 4 * 4);
    for row in 0..=3 {
        assert!(!mesh.contains_vertex(grid.vertex(0, row)));
        assert!(mesh.contains_vertex(grid.vertex(1, row)));
    }
}

#[test]
fn keep_large() {
    let mut mesh = HalfEdgeMesh::empty();
    Grid { cols: 3, rows: 3, triangulate: false }.add_to(&mut mesh);
    Grid { cols: 2, rows: 1, triangulate: false }.add_to(&mut mesh);
    let single = Grid { cols: 1, rows: 1, triangulate: false }.add_to(&mut mesh);
    let params = Params::default();

    assert_eq!(keep_large_connected_components(&mut mesh, 2, &params), 1);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 9 + 2);
    assert!(!mesh.contains_face(single.faces[0]));

    assert_eq!(keep_large_connected_components(&mut mesh, 3, &params), 1);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 9);
    assert_eq!(mesh.num_vertices(), 16);
}

#[test]
fn keep_large_zero_threshold() {
    let (mut mesh, [x, y]) = disjoint_triangles();
    let lonely = mesh.add_vertex();

    assert_eq!(keep_large_connected_components(&mut mesh, 0, &Params::default()), 0);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_vertices(), 6);
    assert!(mesh.contains_face(x) && mesh.contains_face(y));
    assert!(!mesh.contains_vertex(lonely));
}

#[test]
fn keep_large_drops_isolated_vertex() {
    //  3 --- 4 --- 5
    //  |     |     |     6
    //  0 --- 1 --- 2
    let mut mesh = HalfEdgeMesh::empty();
    let grid = Grid { cols: 2, rows: 1, triangulate: false }.add_to(&mut mesh);
    let lonely = mesh.add_vertex();
    assert_eq!(mesh.num_vertices(), 7);

    assert_eq!(keep_large_connected_components(&mut mesh, 1, &Params::default()), 0);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_edges(), 7);
    assert_eq!(mesh.num_vertices(), 6);
    assert!(!mesh.contains_vertex(lonely));
    assert!(grid.vertices.iter().all(|&v| mesh.contains_vertex(v)));
}


// ===========================================================================
// ===== By id and by face
// ===========================================================================

#[test]
fn remove_one_side_of_diagonal() {
    let (mut mesh, [a, b, c, d], [x, y]) = two_triangles();
    let mut constraints = SparseMap::new();
    constraints.insert(find_edge(&mesh, a, c), true);
    let params = Params::default().with_edge_constraints(constraints);

    remove_connected_components_of(&mut mesh, &[y], &params);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.num_edges(), 3);
    assert_eq_set!(mesh.vertex_handles(), [a, b, c]);
    assert!(mesh.contains_face(x));
    assert!(!mesh.contains_vertex(d));

    // The former diagonal is a border edge now and the mesh can be extended
    // again.
    let ac = find_edge(&mesh, a, c);
    assert!(mesh.is_border_edge(ac));
    let d2 = mesh.add_vertex();
    mesh.add_triangle([a, c, d2]);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_edges(), 5);
}

#[test]
fn remove_middle_of_strip() {
    let (mut mesh, vs, faces) = quad_strip(3);
    let params = Params::default().with_edge_constraints(cut_strip(&mesh, &vs));

    let labeling = connected_components(&mesh, &params);
    assert_eq!(labeling.num_components, 3);

    let middle = labeling.component_of(faces[1]);
    remove_connected_components(&mut mesh, &[middle], &labeling, &params);
    assert_integrity!(mesh);

    // All vertices are still used by the two remaining quads.
    assert_eq!(mesh.num_vertices(), 8);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_edges(), 8);
    assert_eq_set!(mesh.face_handles(), [faces[0], faces[2]]);

    // The former cuts are border edges now.
    assert!(mesh.is_border_edge(find_edge(&mesh, vs[1], vs[5])));
    assert!(mesh.is_border_edge(find_edge(&mesh, vs[2], vs[6])));
    for &v in &vs {
        assert!(mesh.is_border(mesh.halfedge_of_vertex(v).unwrap()));
    }

    // And the two quads are really disconnected now.
    assert_eq!(connected_components(&mesh, &Params::default()).num_components, 2);
}

#[test]
fn keep_middle_of_strip() {
    let (mut mesh, vs, faces) = quad_strip(3);
    let params = Params::default().with_edge_constraints(cut_strip(&mesh, &vs));

    keep_connected_components_of(&mut mesh, &[faces[1]], &params);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.num_edges(), 4);
    assert_eq_set!(mesh.vertex_handles(), [vs[1], vs[2], vs[5], vs[6]]);
}

#[test]
fn keep_by_ids() {
    let (mut mesh, vs, faces) = quad_strip(4);
    let params = Params::default().with_edge_constraints(cut_strip(&mesh, &vs));

    let labeling = connected_components(&mesh, &params);
    let ids = [labeling.component_of(faces[0]), labeling.component_of(faces[2])];
    keep_connected_components(&mut mesh, &ids, &labeling, &params);
    assert_integrity!(mesh);
    assert_eq_set!(mesh.face_handles(), [faces[0], faces[2]]);
    assert_eq!(mesh.num_vertices(), 8);
    assert_eq!(mesh.num_edges(), 8);
}

#[test]
fn hole_in_grid() {
    let mut mesh = HalfEdgeMesh::empty();
    let grid = Grid { cols: 3, rows: 3, triangulate: false }.add_to(&mut mesh);
    let center = grid.faces[4];

    let params = Params::default().with_edge_constraints(ConstMap(true));
    remove_connected_components_of(&mut mesh, &[center], &params);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 8);
    assert_eq!(mesh.num_vertices(), 16);
    assert_eq!(mesh.num_edges(), 24);

    // The inner vertices are border vertices now.
    for &(col, row) in &[(1, 1), (2, 1), (2, 2), (1, 2)] {
        let v = grid.vertex(col, row);
        assert!(mesh.is_border(mesh.halfedge_of_vertex(v).unwrap()));
    }

    // Closing the hole again works.
    mesh.add_face(&[grid.vertex(1, 1), grid.vertex(2, 1), grid.vertex(2, 2), grid.vertex(1, 2)]);
    assert_integrity!(mesh);
    assert_eq!(connected_components(&mesh, &Params::default()).num_components, 1);
}

#[test]
fn only_keep_center_of_grid() {
    let mut mesh = HalfEdgeMesh::empty();
    let grid = Grid { cols: 3, rows: 3, triangulate: false }.add_to(&mut mesh);
    let center = grid.faces[4];

    let params = Params::default().with_edge_constraints(ConstMap(true));
    let labeling = connected_components(&mesh, &params);
    keep_or_remove(
        &mut mesh,
        &[labeling.component_of(center)],
        &labeling.face_components,
        Mode::Keep,
        &params.vertex_index,
    );
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 1);
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_edges(), 4);
    assert_eq!(mesh.halfedges_around_face(center).count(), 4);
}

#[test]
fn bowtie_vertex_survives() {
    let (mut mesh, s, [x, y]) = bowtie();
    let params = Params::default();
    assert_eq!(connected_components(&mesh, &params).num_components, 2);

    remove_connected_components_of(&mut mesh, &[y], &params);
    assert_integrity!(mesh);
    assert!(mesh.contains_vertex(s));
    assert!(mesh.contains_face(x));
    assert_eq!(mesh.num_vertices(), 3);
    assert_eq!(mesh.num_edges(), 3);
    assert_eq!(mesh.incoming_halfedges(s).count(), 2);
}

#[test]
fn remove_everything_from_closed_mesh() {
    let (mut mesh, _, faces) = tetrahedron();
    remove_connected_components_of(&mut mesh, &[faces[3], faces[0]], &Params::default());
    assert_integrity!(mesh);
    assert!(mesh.is_empty());
    assert_eq!(mesh.num_edges(), 0);
    assert_eq!(mesh.num_faces(), 0);
}

#[test]
fn duplicate_representatives() {
    let (mut mesh, vs, faces) = quad_strip(3);
    let params = Params::default().with_edge_constraints(cut_strip(&mesh, &vs));

    keep_connected_components_of(&mut mesh, &[faces[2], faces[0], faces[2]], &params);
    assert_integrity!(mesh);
    assert_eq_set!(mesh.face_handles(), [faces[0], faces[2]]);
}

#[test]
fn remove_no_ids_drops_isolated_vertex() {
    let (mut mesh, [x, y]) = disjoint_triangles();
    let lonely = mesh.add_vertex();
    let params = Params::default();

    let labeling = connected_components(&mesh, &params);
    remove_connected_components(&mut mesh, &[], &labeling, &params);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_vertices(), 6);
    assert!(!mesh.contains_vertex(lonely));

    // Nothing is left to remove now.
    remove_connected_components_of(&mut mesh, &[], &params);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_vertices(), 6);
    assert!(mesh.contains_face(x) && mesh.contains_face(y));
}

#[test]
fn remove_no_faces_drops_isolated_vertex() {
    let (mut mesh, _) = disjoint_triangles();
    let lonely = mesh.add_vertex();

    remove_connected_components_of(&mut mesh, &[], &Params::default());
    assert_integrity!(mesh);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_vertices(), 6);
    assert!(!mesh.contains_vertex(lonely));
}

#[test]
fn custom_vertex_index() {
    let (mut mesh, _) = disjoint_triangles();
    let params = Params::default()
        .with_vertex_index(FnMap(|v: VertexHandle| Some(5 - v.idx())));

    assert_eq!(keep_largest_connected_components(&mut mesh, 1, &params), 1);
    assert_integrity!(mesh);
    assert_eq!(mesh.num_vertices(), 3);
}

#[test]
#[should_panic]
fn incomplete_face_components() {
    let (mut mesh, [x, _]) = disjoint_triangles();
    let mut face_components = crate::map::DenseMap::<FaceHandle, usize>::new();
    face_components.insert(x, 0);

    keep_or_remove(&mut mesh, &[0], &face_components, Mode::Keep, &crate::map::HandleIndexMap);
}


// ===========================================================================
// ===== Split
// ===========================================================================

#[test]
fn split_disjoint_triangles() {
    let (mesh, _) = disjoint_triangles();
    let before = mesh.clone();

    let parts = split_connected_components(&mesh, &Params::default());
    assert_eq!(parts.len(), 2);
    for part in &parts {
        assert_integrity!(part);
        assert_eq!(part.num_vertices(), 3);
        assert_eq!(part.num_faces(), 1);
        assert_eq!(part.num_edges(), 3);
    }
    assert_eq!(mesh, before);
}

#[test]
fn split_with_origins() {
    let (mesh, vs, faces) = quad_strip(3);
    let params = Params::default().with_edge_constraints(cut_strip(&mesh, &vs));

    let parts = split_connected_components_with_origins(&mesh, &params);
    assert_eq!(parts.len(), 3);

    // The middle quad shares all its vertices with the outer two, so they
    // are copied.
    let (middle, origins) = &parts[1];
    assert_integrity!(middle);
    assert_eq!(middle.num_vertices(), 4);
    assert_eq!(middle.num_faces(), 1);
    assert_eq_set!(
        middle.vertex_handles().map(|v| origins[v]),
        [vs[1], vs[2], vs[5], vs[6]],
    );

    // Vertex order of the face is preserved, including the starting vertex.
    let f = middle.face_handles().next().unwrap();
    let copied = middle.vertices_around_face(f).map(|v| origins[v]).collect::<Vec<_>>();
    let original = mesh.vertices_around_face(faces[1]).collect::<Vec<_>>();
    assert_eq!(copied, original);
}

#[test]
fn split_copies_faces_in_insertion_order() {
    //  3 --- 2     5 --- 4
    //  |  x  |     |  y  |
    //  0 --- 1     6 --- 7
    let mut mesh = HalfEdgeMesh::empty();
    let vs = (0..8).map(|_| mesh.add_vertex()).collect::<Vec<_>>();
    let x = mesh.add_face(&[vs[0], vs[1], vs[2], vs[3]]);
    let y = mesh.add_face(&[vs[5], vs[6], vs[7], vs[4]]);

    let parts = split_connected_components_with_origins(&mesh, &Params::default());
    assert_eq!(parts.len(), 2);

    for ((part, origins), old) in parts.iter().zip(&[x, y]) {
        assert_integrity!(part);
        let f = part.face_handles().next().unwrap();
        assert_eq!(
            part.vertices_around_face(f).map(|v| origins[v]).collect::<Vec<_>>(),
            mesh.vertices_around_face(*old).collect::<Vec<_>>(),
        );

        // New vertices are created in the order the face lists them.
        let listed = mesh.halfedges_around_face(*old).map(|he| mesh.source(he));
        assert!(part.vertex_handles().map(|v| origins[v]).eq(listed));
    }
}

#[test]
fn split_single_component() {
    let mut mesh = HalfEdgeMesh::empty();
    Grid { cols: 2, rows: 2, triangulate: true }.add_to(&mut mesh);

    let parts = split_connected_components(&mesh, &Params::default());
    assert_eq!(parts.len(), 1);
    assert_integrity!(parts[0]);
    assert_eq!(parts[0].num_faces(), mesh.num_faces());
    assert_eq!(parts[0].num_vertices(), mesh.num_vertices());
    assert_eq!(parts[0].num_edges(), mesh.num_edges());
}

#[test]
fn split_empty() {
    let mesh = HalfEdgeMesh::empty();
    let parts = split_connected_components(&mesh, &Params {
        edge_is_constrained: NoConstraint,
        ..Params::default()
    });
    assert!(parts.is_empty());
}
