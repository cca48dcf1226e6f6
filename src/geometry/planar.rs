use super::*;
use crate::{InvalidArgumentSnafu, Result};
use approx::{AbsDiffEq, RelativeEq};
use snafu::ensure;
use std::fmt;

/// Minimum number of vertices a [Polygon] must have.
pub const MIN_POLYGON_VERTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

pub type Point32 = Point<f32>;
pub type Point64 = Point<f64>;

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "・({},{})", self.x, self.y)
    }
}

impl<T> AbsDiffEq for Point<T>
where
    T: AbsDiffEq<Epsilon = T> + Copy,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T> RelativeEq for Point<T>
where
    T: RelativeEq<Epsilon = T> + Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T: Float> Bounding for Point<T> {
    type Scalar = T;

    fn bound_all<'a>(mut entries: impl Iterator<Item = &'a Self>) -> Option<BoundingBox<T>>
    where
        Self: 'a,
    {
        let first = entries.next()?;
        Some(bound_from(first, entries))
    }
}

/// Seeds the extent with `first`, so boxes away from the origin come out right.
fn bound_from<'a, T: Float + 'a>(
    first: &Point<T>,
    rest: impl Iterator<Item = &'a Point<T>>,
) -> BoundingBox<T> {
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;
    for p in rest {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }
    let bbox = BoundingBox {
        bottom_left: Point::new(min_x, min_y),
        top_right: Point::new(max_x, max_y),
    };
    if cfg!(test) {
        bbox.assert_legal();
    }
    bbox
}

/// Axis-aligned rectangle spanned by its lowest and highest corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T> {
    /// Minimal x and minimal y.
    pub bottom_left: Point<T>,
    /// Maximal x and maximal y.
    pub top_right: Point<T>,
}

impl<T: Float> BoundingBox<T> {
    pub fn width(&self) -> T {
        self.top_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> T {
        self.top_right.y - self.bottom_left.y
    }

    pub fn assert_legal(&self) {
        assert!(
            self.bottom_left.x <= self.top_right.x && self.bottom_left.y <= self.top_right.y,
            "Bounding box has its corners swapped!"
        );
    }
}

impl<T: fmt::Display> fmt::Display for BoundingBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.bottom_left, self.top_right)
    }
}

/// Strict containment: points on the border of the box are outside.
impl<T: Float> Containing<Point<T>> for BoundingBox<T> {
    fn contains(&self, other: &Point<T>) -> bool {
        other.x > self.bottom_left.x
            && other.x < self.top_right.x
            && other.y > self.bottom_left.y
            && other.y < self.top_right.y
    }
}

/// A simple polygon given by its vertices in order.
///
/// The ring is implicitly closed: there is always an edge from the last vertex
/// back to the first. Repeating the first vertex at the end is allowed and does
/// not change which points are inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
    vertices: Vec<Point<T>>,
}

pub type Polygon32 = Polygon<f32>;
pub type Polygon64 = Polygon<f64>;

impl<T: Float> Polygon<T> {
    /// Fails with `InvalidArgument` for fewer than [MIN_POLYGON_VERTICES] distinct
    /// ring vertices, or for any vertex with a NaN or infinite coordinate.
    ///
    /// A repeated first vertex at the end does not count towards the minimum.
    pub fn new(vertices: Vec<Point<T>>) -> Result<Self> {
        let repeats_first = vertices.len() > 1 && vertices.first() == vertices.last();
        let ring_len = vertices.len() - usize::from(repeats_first);
        ensure!(
            ring_len >= MIN_POLYGON_VERTICES,
            InvalidArgumentSnafu {
                description: format!(
                    "A polygon needs at least {MIN_POLYGON_VERTICES} vertices, but got {ring_len}"
                ),
            }
        );
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return InvalidArgumentSnafu {
                description: format!("Polygon vertex {index} has a non-finite coordinate"),
            }
            .fail();
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`, since construction rejects degenerate rings.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `true` if the last vertex repeats the first one.
    pub fn is_explicitly_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// All edges of the ring, starting with the closing edge `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let previous = self
            .vertices
            .last()
            .into_iter()
            .chain(self.vertices.iter());
        previous.zip(self.vertices.iter()).map(|(j, i)| (*j, *i))
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        // non-empty by construction
        bound_from(&self.vertices[0], self.vertices[1..].iter())
    }

    /// Even-odd ray cast towards +x, without any bounding box pre-check.
    ///
    /// Points exactly on the border are not treated specially. One on a sloped
    /// or vertical edge counts as inside when the interior lies to its right,
    /// one on a horizontal edge when the interior lies above it.
    pub(crate) fn crossing_parity(&self, pt: &Point<T>) -> bool {
        let mut inside = false;
        for (vj, vi) in self.edges() {
            if (vi.y > pt.y) != (vj.y > pt.y) {
                let x_cross = (vj.x - vi.x) * (pt.y - vi.y) / (vj.y - vi.y) + vi.x;
                if pt.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Containment test using a precomputed bounding box of `self`.
    pub(crate) fn contains_with_box(&self, bbox: &BoundingBox<T>, pt: &Point<T>) -> bool {
        bbox.contains(pt) && self.crossing_parity(pt)
    }
}

impl<T: Float> TryFrom<Vec<Point<T>>> for Polygon<T> {
    type Error = crate::PipError;

    fn try_from(vertices: Vec<Point<T>>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

impl<T: Float> Containing<Point<T>> for Polygon<T> {
    fn contains(&self, other: &Point<T>) -> bool {
        self.contains_with_box(&self.bounding_box(), other)
    }
}
