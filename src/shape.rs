//! Generators for simple meshes.
//!
//! Meshes only store connectivity, so the shapes in this module only create
//! vertices and faces and return their handles. The layout of the returned
//! handles is documented per shape, which is enough to attach positions or
//! other properties via [prop maps][crate::map].

use crate::{
    core::MeshMut,
    handle::{FaceHandle, VertexHandle},
};


/// A flat rectangular grid of `cols × rows` cells.
///
/// Vertices are created row by row: the vertex at column `c` and row `r`
/// (with `0 <= c <= cols` and `0 <= r <= rows`) would sit at the position
/// `(c, r)`. Faces are created row by row as well, each cell counter
/// clockwise when looking from +z.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    /// Number of cells in x direction. Has to be at least 1. *Default*: 4.
    pub cols: u32,

    /// Number of cells in y direction. Has to be at least 1. *Default*: 4.
    pub rows: u32,

    /// If `true`, each cell is split into two triangles along its diagonal
    /// from `(c, r)` to `(c + 1, r + 1)`. Otherwise each cell is a quad.
    /// *Default*: `false`.
    pub triangulate: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 4,
            triangulate: false,
        }
    }
}

/// The handles of the elements created by [`Grid::add_to`].
#[derive(Debug, Clone)]
pub struct GridHandles {
    cols: u32,

    /// All vertices, row by row.
    pub vertices: Vec<VertexHandle>,

    /// All faces, row by row. With `triangulate`, the two triangles of a cell
    /// follow each other (lower right one first).
    pub faces: Vec<FaceHandle>,
}

impl GridHandles {
    /// Returns the vertex at column `col` and row `row`.
    pub fn vertex(&self, col: u32, row: u32) -> VertexHandle {
        self.vertices[(row * (self.cols + 1) + col) as usize]
    }
}

impl Grid {
    /// Adds the grid to the given mesh and returns the handles of all new
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if `cols` or `rows` is 0.
    pub fn add_to<M: MeshMut>(&self, mesh: &mut M) -> GridHandles {
        assert!(
            self.cols >= 1 && self.rows >= 1,
            "trying to build a grid with {}×{} cells (minimum is 1×1)",
            self.cols,
            self.rows,
        );

        let num_vertices = (self.cols + 1) * (self.rows + 1);
        let faces_per_cell = if self.triangulate { 2 } else { 1 };
        let num_faces = self.cols * self.rows * faces_per_cell;
        mesh.reserve_for_vertices(num_vertices);
        mesh.reserve_for_faces(num_faces);

        let vertices = (0..num_vertices).map(|_| mesh.add_vertex()).collect();
        let mut out = GridHandles {
            cols: self.cols,
            vertices,
            faces: Vec::with_capacity(num_faces as usize),
        };

        for row in 0..self.rows {
            for col in 0..self.cols {
                //
                //   (c, r+1) ---- (c+1, r+1)
                //      |         ⋰    |
                //      |   B   ⋰      |
                //      |     ⋰    A   |
                //      |   ⋰          |
                //    (c, r) ------ (c+1, r)
                //
                let v00 = out.vertex(col, row);
                let v10 = out.vertex(col + 1, row);
                let v11 = out.vertex(col + 1, row + 1);
                let v01 = out.vertex(col, row + 1);

                if self.triangulate {
                    out.faces.push(mesh.add_triangle([v00, v10, v11]));
                    out.faces.push(mesh.add_triangle([v00, v11, v01]));
                } else {
                    out.faces.push(mesh.add_face(&[v00, v10, v11, v01]));
                }
            }
        }

        out
    }
}
