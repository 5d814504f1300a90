//! Connected components of the faces of a mesh.
//!
//! Two faces are in the same component if there is a path of faces between
//! them where each two consecutive faces share an edge. Edges can be
//! *constrained* via [`Params::edge_is_constrained`]: a constrained edge is
//! never crossed, as if it was a border edge. Note that the mesh is not
//! actually cut at constrained edges, so components separated by constraints
//! still share vertices and edges.
//!
//! The central function is [`connected_components`], which assigns a
//! component id to every face. Ids are dense and stable for a given mesh
//! (see there). Based on that, whole components can be removed:
//!
//! - [`keep_largest_connected_components`]: by face count ranking.
//! - [`keep_large_connected_components`]: by minimum face count.
//! - [`keep_connected_components`], [`remove_connected_components`]: by
//!   component id.
//! - [`keep_connected_components_of`], [`remove_connected_components_of`]:
//!   by representative faces.
//! - [`keep_or_remove`]: the low level operation all of the above use.
//!
//! Removing components modifies the mesh in place and invalidates all
//! previously computed labelings. [`split_connected_components`] instead
//! copies each component into a new mesh.
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
//! let grid = Grid { cols: 4, rows: 1, ..Grid::default() }.add_to(&mut mesh);
//! let small = Grid { cols: 1, rows: 1, ..Grid::default() }.add_to(&mut mesh);
//!
//! // Remove the component the small grid's face is in.
//! components::remove_connected_components_of(&mut mesh, &small.faces, &Params::default());
//!
//! assert_eq!(mesh.num_faces(), 4);
//! assert!(grid.faces.iter().all(|&f| mesh.contains_face(f)));
//! ```

mod dual;
mod label;
mod params;
mod rank;
mod select;
mod split;
mod surgery;

#[cfg(test)]
mod tests;

pub use self::{
    dual::DualGraph,
    label::{connected_component, connected_components, Labeling},
    params::Params,
    rank::ComponentSizes,
    select::{
        keep_connected_components, keep_connected_components_of,
        keep_large_connected_components, keep_largest_connected_components,
        remove_connected_components, remove_connected_components_of,
    },
    split::{split_connected_components, split_connected_components_with_origins},
    surgery::{keep_or_remove, Mode},
};
