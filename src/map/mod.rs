//! Associating data with handles (property maps).
//!
//! Algorithms in this library never store per-element data inside the mesh.
//! Instead, they read and write *property maps*: a vertex position map, an
//! edge constraint map, a face-to-component map and so on. The traits in this
//! module abstract over the different ways to store such data.
//!
//! - [`PropMap`]: the minimal trait. Can return owned or borrowed values.
//! - [`PropStore`]: a map that actually stores its values and can iterate
//!   over them.
//! - [`PropStoreMut`]: a `PropStore` that can be modified.


use std::{
    ops, marker::PhantomData, fmt, borrow::Borrow,
};

use crate::{
    hsize,
    handle::Handle,
    util::Empty,
};



mod dense;
mod fn_map;
pub mod set;
mod sparse;
mod special_maps;

pub use self::{
    dense::DenseMap,
    fn_map::FnMap,
    set::{DenseSet, Set, SparseSet},
    sparse::SparseMap,
    special_maps::{ConstMap, EmptyMap, HandleIndexMap, NoConstraint},
};


// ===========================================================================
// ===== Main traits
// ===========================================================================

/// A mapping from a handle to some data (property).
///
/// This is a bare minimal trait representing all types that can map a handle
/// to optional data, called property. The returned property can be owned or
/// borrowed from `self`. To abstract over that, the value is wrapped in a
/// [`Value`] which implements `Deref<Target = Self::Target>`.
///
/// # Completeness
///
/// In many contexts, a `PropMap` is required to return `Some(_)` values for
/// a specific set of handles. For example, the face index map passed to
/// [`connected_components`][crate::algo::components::connected_components]
/// has to return a value for every face of the mesh. This is stated as: "the
/// map needs to be complete regarding the mesh". Some algorithms are more
/// lenient and treat a missing value as a default (e.g. an edge constraint
/// map without a value for an edge treats that edge as unconstrained).
pub trait PropMap<H: Handle> {
    /// The owned prop type that this map maps to.
    ///
    /// `SparseMap<H, T>` sets this to `T`, but its `get` method returns `&T`.
    /// This is the associated type that should be used for trait bounds,
    /// e.g. `M: PropMap<EdgeHandle, Target = bool>`.
    type Target;

    /// Return type of [`Self::get`]: either `Self::Target` or `&Self::Target`.
    type Ret<'s>: Borrow<Self::Target> where Self: 's;

    /// Returns the property associated with `handle` or `None` if no such
    /// property exists.
    fn get(&self, handle: H) -> Option<Value<Self::Ret<'_>, Self::Target>>;

    /// Returns `true` if there is a property associated with `handle`, `false`
    /// otherwise.
    fn contains_handle(&self, handle: H) -> bool {
        self.get(handle).is_some()
    }
}


/// A type that stores data associated with handles.
///
/// In contrast to `PropMap::get`, `PropStore::get_ref` always returns a
/// borrowed value. Additionally, a store can iterate over all of its data.
pub trait PropStore<H: Handle>:
    PropMap<H> + ops::Index<H, Output = <Self as PropMap<H>>::Target>
{
    /// Returns a reference to the property associated with `handle` or `None`
    /// if no such property exists.
    fn get_ref(&self, handle: H) -> Option<&Self::Output>;

    /// Returns the number of properties stored in this map.
    fn num_props(&self) -> hsize;

    /// Returns an iterator over immutable references to the values and their
    /// associated handles. The order of this iterator is not specified.
    fn iter(&self) -> Box<dyn Iterator<Item = (H, &Self::Output)> + '_>;

    /// Returns an iterator over all handles that have a value associated with
    /// them. The order of the handles is not specified.
    fn handles(&self) -> Box<dyn Iterator<Item = H> + '_> {
        Box::new(self.iter().map(|(h, _)| h))
    }

    /// Returns an iterator over immutable references to the values.
    fn values(&self) -> Box<dyn Iterator<Item = &Self::Output> + '_> {
        Box::new(self.iter().map(|(_, v)| v))
    }

    fn is_empty(&self) -> bool {
        self.num_props() == 0
    }
}

/// A [`PropStore`] that can be modified.
pub trait PropStoreMut<H: Handle>: Empty + PropStore<H> + ops::IndexMut<H> {
    /// Returns a mutable reference to the property associated with `handle` or
    /// `None` if no such property exists.
    fn get_mut(&mut self, handle: H) -> Option<&mut Self::Output>;

    /// Inserts the given property associated with `handle`. If there was
    /// already a property associated with `handle`, this property is returned.
    fn insert(&mut self, handle: H, prop: Self::Output) -> Option<Self::Output>
    where
        Self::Output: Sized;

    /// Removes the property associated with `handle` and returns it. If no
    /// property was associated with `handle`, nothing is removed and `None` is
    /// returned.
    fn remove(&mut self, handle: H) -> Option<Self::Output>
    where
        Self::Output: Sized;

    /// Removes all properties so that `contains_handle()` returns `false`
    /// for all handles.
    fn clear(&mut self);

    /// Reserves memory for at least `additional` new properties.
    fn reserve(&mut self, additional: hsize);

    /// Creates an empty store with memory for `cap` properties.
    fn with_capacity(cap: hsize) -> Self
    where
        Self: Sized,
    {
        let mut out = Self::empty();
        out.reserve(cap);
        out
    }
}


// ===========================================================================
// ===== `Value` helper
// ===========================================================================

/// Wrapper for the value returned by [`PropMap::get`].
pub struct Value<R, T>(R, PhantomData<T>);

impl<R: Borrow<T>, T> From<R> for Value<R, T> {
    fn from(value: R) -> Self {
        Self(value, PhantomData)
    }
}

impl<R: Borrow<T>, T> ops::Deref for Value<R, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<R: Borrow<T>, T: fmt::Debug> fmt::Debug for Value<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.borrow().fmt(f)
    }
}

impl<R: Borrow<T>, T: PartialEq> PartialEq for Value<R, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.borrow().eq(other.0.borrow())
    }
}

impl<R: Borrow<T>, T: Eq> Eq for Value<R, T> {}
