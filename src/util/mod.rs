//! Small helpers that don't belong anywhere else.

/// Types that can create an instance without any elements.
///
/// Meshes, property stores and handle sets implement this. It is similar to
/// `Default`, but guarantees that the value is *empty*, so generic code can
/// use it to start fresh meshes (e.g. when splitting a mesh into its
/// components) and side tables.
pub trait Empty {
    /// Returns an empty value of this type.
    fn empty() -> Self;
}
