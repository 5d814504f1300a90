use super::Labeling;


/// The number of faces of each component of a [`Labeling`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSizes {
    sizes: Vec<usize>,
}

impl ComponentSizes {
    /// Counts the faces of each component.
    ///
    /// # Panics
    ///
    /// Panics if the labeling contains an id `>= labeling.num_components`.
    pub fn count(labeling: &Labeling) -> Self {
        let mut sizes = vec![0; labeling.num_components];
        for &id in labeling.face_components.values() {
            sizes[id] += 1;
        }

        Self { sizes }
    }

    pub fn num_components(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the number of faces in the component `id`.
    pub fn size_of(&self, id: usize) -> usize {
        self.sizes[id]
    }

    /// Returns `(id, size)` pairs sorted by size, largest first. Components
    /// of the same size are ordered by their id.
    pub fn ranked(&self) -> Vec<(usize, usize)> {
        let mut out = self.sizes.iter().cloned().enumerate().collect::<Vec<_>>();

        // The sort is stable and `out` is sorted by id already.
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Returns the ids of the `n` largest components (or all, if there are
    /// fewer), in the order of [`ComponentSizes::ranked`].
    pub fn largest(&self, n: usize) -> Vec<usize> {
        self.ranked().into_iter().take(n).map(|(id, _)| id).collect()
    }

    /// Returns the ids of all components with at least `threshold` faces, in
    /// increasing order.
    pub fn at_least(&self, threshold: usize) -> Vec<usize> {
        self.sizes.iter()
            .enumerate()
            .filter(|(_, &size)| size >= threshold)
            .map(|(id, _)| id)
            .collect()
    }
}
