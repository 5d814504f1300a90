//! Builds a mesh made of a few grids ("islands"), cuts one of them with
//! constrained edges and then removes small islands.
//!
//! Usage: `cargo run --example islands -- [min_faces]`

use std::env;
use failure::{Error, ResultExt};

use isle::{
    prelude::*,
    algo::components::{self, ComponentSizes, Params},
    ds::HalfEdgeMesh,
    map::SparseMap,
    shape::Grid,
};


fn main() -> Result<(), Error> {
    color_backtrace::install();

    // Quick and dirty CLI argument parsing (not isle related)
    let min_faces = match env::args().nth(1) {
        Some(arg) => arg.parse::<usize>().context("first argument has to be a number")?,
        None => 5,
    };

    let mut mesh = HalfEdgeMesh::empty();
    let big = Grid { cols: 6, rows: 4, triangulate: true }.add_to(&mut mesh);
    Grid { cols: 2, rows: 1, triangulate: false }.add_to(&mut mesh);
    Grid { cols: 1, rows: 1, triangulate: true }.add_to(&mut mesh);

    // Cut the big grid along its third column of vertices.
    let mut creases = SparseMap::new();
    for row in 0..4 {
        let a = big.vertex(3, row);
        let b = big.vertex(3, row + 1);
        if let Some(he) = mesh.incoming_halfedges(a).find(|&he| mesh.source(he) == b) {
            creases.insert(mesh.edge_of(he), true);
        }
    }
    let params = Params::default().with_edge_constraints(creases);

    let labeling = components::connected_components(&mesh, &params);
    println!("{} faces in {} components:", mesh.num_faces(), labeling.num_components);
    for (id, size) in ComponentSizes::count(&labeling).ranked() {
        println!("  component {}: {} faces", id, size);
    }

    let removed = components::keep_large_connected_components(&mut mesh, min_faces, &params);
    println!(
        "removed {} components with fewer than {} faces, {} faces and {} vertices left",
        removed,
        min_faces,
        mesh.num_faces(),
        mesh.num_vertices(),
    );

    let parts = components::split_connected_components(&mesh, &params);
    for (i, part) in parts.iter().enumerate() {
        println!("  part {}: {} faces, {} edges", i, part.num_faces(), part.num_edges());
    }

    Ok(())
}
