use crate::handle::Handle;
use super::{PropMap, Value};


/// A simple wrapper for property maps defined by functions (usually closures).
///
/// In principle it is possible to `impl PropMap for F` where `F: Fn(H) ->
/// Option<T>`. But such a general impl would overlap with every other impl of
/// `PropMap`, so maps defined by functions have to use this wrapper type.
///
/// # Example
///
/// ```
/// use isle::{
///     EdgeHandle,
///     handle::Handle,
///     map::{FnMap, PropMap},
/// };
///
/// // Every edge with an even index is a crease.
/// let creases = FnMap(|e: EdgeHandle| Some(e.idx() % 2 == 0));
/// assert_eq!(creases.get(EdgeHandle::from_usize(4)).map(|b| *b), Some(true));
/// assert_eq!(creases.get(EdgeHandle::from_usize(5)).map(|b| *b), Some(false));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnMap<F>(pub F);

impl<H, F, OutT> PropMap<H> for FnMap<F>
where
    H: Handle,
    F: Fn(H) -> Option<OutT>,
{
    type Target = OutT;
    type Ret<'s> = Self::Target where Self: 's;

    fn get(&self, handle: H) -> Option<Value<Self::Ret<'_>, Self::Target>> {
        (self.0)(handle).map(Into::into)
    }
}
