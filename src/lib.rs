//! Point-in-polygon tests for simple 2D polygons.
//!
//! Every test first rejects points outside the polygon's bounding box and then
//! applies the even-odd ray casting rule. Coordinates are generic over
//! [num_traits::Float], so `f32` and `f64` both work.
//!
//! Large point sets can be checked on the rayon pool with
//! [points_in_polygon_parallel].

use num_traits::Float;
use snafu::{prelude::*, Backtrace};

pub mod geometry;
pub mod parallel;

pub use geometry::{
    planar::{
        BoundingBox,
        Point,
        Point32,
        Point64,
        Polygon,
        Polygon32,
        Polygon64,
        MIN_POLYGON_VERTICES,
    },
    Bounding,
    Containing,
};
pub use parallel::{max_available_parallelism, points_in_polygon, points_in_polygon_parallel};

pub type Result<T> = std::result::Result<T, PipError>;

#[derive(Debug, Snafu)]
pub enum PipError {
    #[snafu(display("Invalid argument: {description}"))]
    InvalidArgument {
        description: String,
        backtrace: Backtrace,
    },
}

/// `true` if `point` is inside `polygon` by the even-odd rule.
///
/// Points outside or on the border of the polygon's bounding box are always outside.
pub fn point_in_polygon<T: Float>(point: &Point<T>, polygon: &Polygon<T>) -> bool {
    polygon.contains(point)
}

/// `true` if `point` lies strictly inside `bbox` on both axes.
pub fn point_in_bounding_box<T: Float>(point: &Point<T>, bbox: &BoundingBox<T>) -> bool {
    bbox.contains(point)
}

/// The smallest axis-aligned rectangle containing every vertex of `polygon`.
pub fn bounding_box_of<T: Float>(polygon: &Polygon<T>) -> BoundingBox<T> {
    polygon.bounding_box()
}
