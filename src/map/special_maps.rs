use std::marker::PhantomData;

use crate::handle::{hsize, Handle};
use super::{PropMap, Value};


/// A map that always returns the same value for all handles (always `Some()`).
///
/// # Example
///
/// ```
/// use isle::{
///     VertexHandle,
///     map::{ConstMap, PropMap},
/// };
///
/// fn foo(map: &impl PropMap<VertexHandle>) {}
///
/// foo(&ConstMap(27));  // always returns `&27`
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConstMap<T>(pub T);

impl<T, H: Handle> PropMap<H> for ConstMap<T> {
    type Target = T;
    type Ret<'s> = &'s Self::Target where Self: 's;

    fn get(&self, _: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        Some((&self.0).into())
    }
}


/// A map that always returns `None`. It is also generic over the type it
/// returns, so as far as the type system is concerned, it can return any type.
///
/// # Example
///
/// ```
/// use isle::{
///     VertexHandle,
///     map::{EmptyMap, PropMap},
/// };
///
/// fn foo(map: &impl PropMap<VertexHandle, Target = f32>) {}
/// foo(&EmptyMap::new());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EmptyMap<T>(PhantomData<T>);

impl<T> EmptyMap<T> {
    pub fn new() -> Self {
        EmptyMap(PhantomData)
    }
}

impl<T> Default for EmptyMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: Handle> PropMap<H> for EmptyMap<T> {
    type Target = T;
    type Ret<'s> = Self::Target where Self: 's;

    fn get(&self, _: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        None
    }
}


/// Maps every handle to its own index.
///
/// This is the default index map of all algorithms that need one. It is
/// complete regarding every mesh in this library, as they hand out handles
/// with dense, sequentially increasing indices.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleIndexMap;

impl<H: Handle> PropMap<H> for HandleIndexMap {
    type Target = hsize;
    type Ret<'s> = hsize;

    fn get(&self, handle: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        Some(handle.idx().into())
    }
}


/// An edge constraint map that does not constrain any edge (always returns
/// `Some(false)`).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConstraint;

impl<H: Handle> PropMap<H> for NoConstraint {
    type Target = bool;
    type Ret<'s> = bool;

    fn get(&self, _: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        Some(false.into())
    }
}
