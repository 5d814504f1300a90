use std::{
    collections::HashMap,
    iter::FromIterator,
    ops::{Index, IndexMut},
};

use crate::{
    handle::{hsize, Handle},
    util::Empty,
};
use super::{PropMap, PropStore, PropStoreMut, Value};


/// A property map using a hashmap to store the properties.
///
/// Useful when only few handles of a mesh have a value associated with them.
/// Lookup is a bit slower than for `DenseMap`, but memory usage only depends
/// on the number of inserted values and *not* on the highest handle index.
/// Sparse edge constraint maps ("these few edges are creases") are the
/// typical use case.
///
/// This is a wrapper around `std::collections::HashMap` with `ahash` as hash
/// function. We cannot implement the map traits for `HashMap` directly,
/// because it implements `Index<&Q>` and not `Index<H>`.
#[derive(Clone, Debug)]
pub struct SparseMap<H: Handle, T>(HashMap<H, T, ahash::RandomState>);

impl<H: Handle, T> SparseMap<H, T> {
    /// Creates an empty `SparseMap`.
    pub fn new() -> Self {
        SparseMap(HashMap::default())
    }
}

impl<H: Handle, T> Default for SparseMap<H, T> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H: Handle, T> PropMap<H> for SparseMap<H, T> {
    type Target = T;
    type Ret<'s> = &'s Self::Target where Self: 's;

    fn get(&self, handle: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        self.get_ref(handle).map(Into::into)
    }

    fn contains_handle(&self, handle: H) -> bool {
        self.0.contains_key(&handle)
    }
}

impl<H: Handle, T> Index<H> for SparseMap<H, T> {
    type Output = T;
    fn index(&self, handle: H) -> &Self::Output {
        match self.get_ref(handle) {
            None => panic!("no property found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T> PropStore<H> for SparseMap<H, T> {
    fn get_ref(&self, handle: H) -> Option<&Self::Output> {
        self.0.get(&handle)
    }

    fn num_props(&self) -> hsize {
        self.0.len() as hsize
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (H, &Self::Output)> + '_> {
        Box::new(self.0.iter().map(|(k, v)| (*k, v)))
    }
}

impl<H: Handle, T> IndexMut<H> for SparseMap<H, T> {
    fn index_mut(&mut self, handle: H) -> &mut Self::Output {
        match self.get_mut(handle) {
            None => panic!("no property found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T> Empty for SparseMap<H, T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> PropStoreMut<H> for SparseMap<H, T> {
    fn get_mut(&mut self, handle: H) -> Option<&mut Self::Output> {
        self.0.get_mut(&handle)
    }

    fn insert(&mut self, handle: H, elem: Self::Output) -> Option<Self::Output> {
        self.0.insert(handle, elem)
    }

    fn remove(&mut self, handle: H) -> Option<Self::Output> {
        self.0.remove(&handle)
    }

    fn clear(&mut self) {
        self.0.clear()
    }

    fn reserve(&mut self, additional: hsize) {
        self.0.reserve(additional as usize);
    }
}

impl<H: Handle, T> Extend<(H, T)> for SparseMap<H, T> {
    fn extend<I: IntoIterator<Item = (H, T)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<H: Handle, T> FromIterator<(H, T)> for SparseMap<H, T> {
    fn from_iter<I: IntoIterator<Item = (H, T)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}
