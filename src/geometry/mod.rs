use num_traits::Float;

pub mod planar;

/// Types implementing this trait can decide whether `Rhs` lies within them.
pub trait Containing<Rhs> {
    /// Returns `true` if `other` lies inside the confines of this shape.
    ///
    /// Whether the boundary counts as inside is up to the implementation.
    fn contains(&self, other: &Rhs) -> bool;
}

pub trait Bounding: Sized {
    type Scalar: Float;

    /// Calculate the axis-aligned rectangle that contains all `entries`
    ///
    /// Returns `None` if there are no entries to bound.
    fn bound_all<'a>(
        entries: impl Iterator<Item = &'a Self>,
    ) -> Option<planar::BoundingBox<Self::Scalar>>
    where
        Self: 'a;
}
