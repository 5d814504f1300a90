//! Mesh algorithms.
//!
//! All algorithms are written against the traits in [`core`][crate::core] and
//! store per-element data in [prop maps][crate::map], never inside the mesh.

pub mod components;
