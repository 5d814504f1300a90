//! Handles to refer to mesh elements.
//!
//! Handles are small, copyable IDs. A handle is only meaningful together with
//! the mesh that created it. Handles are *stable*: removing an element from a
//! mesh never changes the handles of other elements. This is what makes it
//! possible to associate data with elements via [prop maps][crate::map].

use std::{
    fmt,
    hash::Hash,
};

use static_assertions::assert_eq_size;


/// The integer type used for handles.
///
/// By default this is `u32`, which is enough for most meshes and saves a lot
/// of memory compared to `usize`. With the feature `large-handle`, this is
/// `u64`.
#[cfg(not(feature = "large-handle"))]
#[allow(non_camel_case_types)]
pub type hsize = u32;

/// The integer type used for handles.
#[cfg(feature = "large-handle")]
#[allow(non_camel_case_types)]
pub type hsize = u64;

/// An optional handle with the same size as the handle itself.
///
/// The index `hsize::max_value()` is never handed out by any data structure
/// in this library and is used to represent `None`.
pub type Opt<H> = optional::Optioned<H>;


/// Extension trait for `hsize` with a few helper methods.
pub trait HSizeExt {
    /// Returns `self + 1`. Panics if the result would be the reserved "none"
    /// index (or would overflow).
    fn next(self) -> Self;
}

impl HSizeExt for hsize {
    #[inline(always)]
    fn next(self) -> Self {
        assert!(self < hsize::max_value() - 1, "handle index overflow");
        self + 1
    }
}


/// Types that can be used as handle to refer to some mesh element.
///
/// All handle types are just a newtype around an `hsize`.
pub trait Handle: 'static + Copy + fmt::Debug + Eq + Ord + Hash {
    /// Creates a handle from the given index.
    fn new(idx: hsize) -> Self;

    /// Returns the index of this handle.
    fn idx(&self) -> hsize;

    /// Creates a handle from a `usize` index.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not fit into `hsize`.
    #[inline(always)]
    fn from_usize(raw: usize) -> Self {
        assert!(
            raw < hsize::max_value() as usize,
            "handle index {} does not fit into `hsize`",
            raw,
        );
        Self::new(raw as hsize)
    }

    /// Returns the index of this handle as `usize`.
    #[inline(always)]
    fn to_usize(&self) -> usize {
        self.idx() as usize
    }
}


macro_rules! make_handle_type {
    ($(#[$attr:meta])* $name:ident = $short:expr;) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(hsize);

        impl Handle for $name {
            #[inline(always)]
            fn new(idx: hsize) -> Self {
                $name(idx)
            }

            #[inline(always)]
            fn idx(&self) -> hsize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", $short, self.0)
            }
        }

        impl optional::Noned for $name {
            #[inline(always)]
            fn is_none(&self) -> bool {
                self.0 == hsize::max_value()
            }

            #[inline(always)]
            fn get_none() -> Self {
                $name(hsize::max_value())
            }
        }

        impl optional::OptEq for $name {
            #[inline(always)]
            fn opt_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        assert_eq_size!($name, Opt<$name>);
    };
}

make_handle_type! {
    /// A handle referring to a face.
    FaceHandle = "F";
}
make_handle_type! {
    /// A handle referring to a full edge (a pair of half edges).
    EdgeHandle = "E";
}
make_handle_type! {
    /// A handle referring to a vertex.
    VertexHandle = "V";
}
make_handle_type! {
    /// A handle referring to a half edge.
    ///
    /// In [`HalfEdgeMesh`][crate::ds::HalfEdgeMesh], the two half edges of
    /// one edge are stored next to each other: the edge `k` consists of the
    /// half edges `2k` and `2k + 1`. The methods of this type rely on that
    /// layout.
    HalfEdgeHandle = "HE";
}

impl HalfEdgeHandle {
    /// Returns the half edge of the given edge with the lower index.
    #[inline(always)]
    pub fn lower_half_of(edge: EdgeHandle) -> Self {
        Self(edge.idx() * 2)
    }

    /// Returns the half edge pointing in the opposite direction. The lowest
    /// bit of the index is simply flipped.
    #[inline(always)]
    pub fn twin(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Returns the full edge this half edge belongs to.
    #[inline(always)]
    pub fn full_edge(self) -> EdgeHandle {
        EdgeHandle::new(self.0 / 2)
    }
}
