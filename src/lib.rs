//! Connected component labeling and component removal on half edge meshes.
//!
//! The faces of a mesh are partitioned into *connected components*: two faces
//! belong to the same component if you can walk from one to the other by
//! crossing edges that are shared by two faces. Edges can additionally be
//! marked as *constrained*, in which case they act as a cut that cannot be
//! crossed. Once components are labeled, whole components can be kept or
//! removed while the mesh stays topologically consistent.
//!
//! ```
//! use isle::{
//!     prelude::*,
//!     algo::components::{self, Params},
//!     ds::HalfEdgeMesh,
//!     shape::Grid,
//! };
//!
//! let mut mesh = HalfEdgeMesh::empty();
//! Grid { cols: 3, rows: 3, ..Grid::default() }.add_to(&mut mesh);
//! Grid { cols: 1, rows: 1, ..Grid::default() }.add_to(&mut mesh);
//!
//! let params = Params::default();
//! let labeling = components::connected_components(&mesh, &params);
//! assert_eq!(labeling.num_components, 2);
//!
//! // Only keep the big grid.
//! let removed = components::keep_largest_connected_components(&mut mesh, 1, &params);
//! assert_eq!(removed, 1);
//! assert_eq!(mesh.num_faces(), 9);
//! ```
//!
//! The crate is organized like this:
//!
//! - [`handle`]: handles to refer to mesh elements.
//! - [`map`]: property maps to associate data with handles.
//! - [`core`]: the mesh traits.
//! - [`ds`]: the [`HalfEdgeMesh`][ds::HalfEdgeMesh] data structure.
//! - [`algo`]: algorithms, most importantly [`algo::components`].
//! - [`shape`]: generators for simple meshes.

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod algo;
pub mod core;
pub mod ds;
pub mod handle;
pub mod map;
pub mod prelude;
pub mod shape;
pub mod util;

pub use self::handle::{
    hsize, Handle, EdgeHandle, FaceHandle, HalfEdgeHandle, VertexHandle,
};
