use std::{
    fmt,
    iter::FromIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use stable_vec::StableVec;

use crate::{
    handle::{hsize, Handle},
    util::Empty,
};
use super::{PropMap, PropStore, PropStoreMut, Value};


/// A property map backed by a [`StableVec`], indexed by handle.
///
/// Memory usage grows with the highest handle index, not with the number of
/// stored values. Meshes in this library hand out dense handles, so this is
/// the map to use for data on (almost) every element: the component id of
/// each face, for example. For data on only a few elements, use
/// [`SparseMap`][crate::map::SparseMap].
///
/// Removing a value leaves a hole and never moves other values.
/// [`HalfEdgeMesh`][crate::ds::HalfEdgeMesh] stores its elements in
/// `DenseMap`s, which is why its handles stay valid across removals.
///
/// ```
/// use isle::{
///     FaceHandle,
///     handle::Handle,
///     map::{PropStore, PropStoreMut, DenseMap},
/// };
///
/// let mut component = DenseMap::new();
/// let f0 = FaceHandle::from_usize(0);
/// let f5 = FaceHandle::from_usize(5);
///
/// component.insert(f0, 0);
/// component.insert(f5, 1);
/// assert_eq!(component.get_ref(f5), Some(&1));
/// assert_eq!(component.get_ref(FaceHandle::from_usize(3)), None);
/// assert_eq!(component.num_props(), 2);
/// ```
#[derive(Clone)]
pub struct DenseMap<H: Handle, T> {
    vec: StableVec<T>,
    _dummy: PhantomData<H>,
}

impl<H: Handle, T> DenseMap<H, T> {
    /// Creates an empty `DenseMap`.
    pub fn new() -> Self {
        Self {
            vec: StableVec::new(),
            _dummy: PhantomData,
        }
    }

    /// Adds the element at the next free index and returns its handle.
    pub fn push(&mut self, elem: T) -> H {
        H::from_usize(self.vec.push(elem))
    }

    /// Returns the handle the next `push` will return.
    pub fn next_push_handle(&self) -> H {
        H::from_usize(self.vec.next_push_index())
    }

    /// Returns the handle of the first element with an index `>= start`.
    pub fn first_handle_from(&self, start: H) -> Option<H> {
        (start.to_usize()..self.vec.next_push_index())
            .find(|&idx| self.vec.has_element_at(idx))
            .map(H::from_usize)
    }

    /// Returns the handle of the element with the highest index.
    pub fn last_handle(&self) -> Option<H> {
        self.vec.find_last_index().map(H::from_usize)
    }

    pub fn num_elements(&self) -> hsize {
        self.vec.num_elements() as hsize
    }

    /// Iterates over all handles and values in increasing handle order.
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.vec.iter().map(|(i, e)| (H::from_usize(i), e))
    }

    /// Iterates over all handles in increasing order.
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.vec.indices().map(H::from_usize)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.vec.values()
    }
}

impl<H: Handle, T> PropMap<H> for DenseMap<H, T> {
    type Target = T;
    type Ret<'s> = &'s Self::Target where Self: 's;

    fn get(&self, handle: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        self.get_ref(handle).map(Into::into)
    }

    fn contains_handle(&self, handle: H) -> bool {
        self.vec.has_element_at(handle.to_usize())
    }
}

impl<H: Handle, T> Index<H> for DenseMap<H, T> {
    type Output = T;
    fn index(&self, handle: H) -> &Self::Output {
        match self.get_ref(handle) {
            None => panic!("no property found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T> PropStore<H> for DenseMap<H, T> {
    fn get_ref(&self, handle: H) -> Option<&Self::Output> {
        self.vec.get(handle.to_usize())
    }

    fn num_props(&self) -> hsize {
        self.vec.num_elements() as hsize
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (H, &Self::Output)> + '_> {
        Box::new(DenseMap::iter(self))
    }
}

impl<H: Handle, T> IndexMut<H> for DenseMap<H, T> {
    fn index_mut(&mut self, handle: H) -> &mut Self::Output {
        match self.get_mut(handle) {
            None => panic!("no property found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T> Empty for DenseMap<H, T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> Default for DenseMap<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> PropStoreMut<H> for DenseMap<H, T> {
    fn get_mut(&mut self, handle: H) -> Option<&mut Self::Output> {
        self.vec.get_mut(handle.to_usize())
    }

    fn insert(&mut self, handle: H, elem: Self::Output) -> Option<Self::Output> {
        let idx = handle.to_usize();
        self.vec.reserve_for(idx);
        self.vec.insert(idx, elem)
    }

    fn remove(&mut self, handle: H) -> Option<Self::Output> {
        let idx = handle.to_usize();
        if idx >= self.vec.capacity() {
            return None;
        }

        self.vec.remove(idx)
    }

    fn clear(&mut self) {
        self.vec.clear()
    }

    fn reserve(&mut self, additional: hsize) {
        self.vec.reserve(additional as usize);
    }
}

impl<H: Handle, T: fmt::Debug> fmt::Debug for DenseMap<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(DenseMap::iter(self))
            .finish()
    }
}

impl<H: Handle, T: PartialEq> PartialEq for DenseMap<H, T> {
    fn eq(&self, other: &Self) -> bool {
        self.num_elements() == other.num_elements()
            && DenseMap::iter(self).all(|(h, v)| other.get_ref(h) == Some(v))
    }
}

impl<H: Handle, T> Extend<(H, T)> for DenseMap<H, T> {
    fn extend<I: IntoIterator<Item = (H, T)>>(&mut self, iter: I) {
        // Same strategy as the std `HashMap`: keys may already be present or
        // show up multiple times, so don't reserve too much.
        let iter = iter.into_iter();
        let cap = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        PropStoreMut::reserve(self, cap as hsize);

        for (handle, value) in iter {
            self.insert(handle, value);
        }
    }
}

impl<H: Handle, T> FromIterator<(H, T)> for DenseMap<H, T> {
    fn from_iter<I: IntoIterator<Item = (H, T)>>(iter: I) -> Self {
        let mut out = Self::empty();
        out.extend(iter);
        out
    }
}
