//! Reexports of all important traits of this library for convenience.
//!
//! As with every prelude, the main usage is to glob import everything from
//! this module:
//!
//! ```
//! use isle::prelude::*;
//! ```
//!
//! Now you have all important traits in scope.

pub use crate::{
    Handle,
    core::{Mesh, MeshMut, HalfEdgeGraph, HalfEdgeGraphMut},
    map::{PropMap, PropStore, PropStoreMut},
    util::Empty,
};
