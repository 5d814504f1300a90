//! Polygon mesh **d**ata **s**tructures.
//!
//! This module contains the implementations of the [mesh traits][crate::core]
//! in this library. Currently, that's only the [`HalfEdgeMesh`].

pub mod half_edge;

pub use self::half_edge::{HalfEdgeMesh, IntegrityError};
