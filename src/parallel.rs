//! Batch containment tests, sequential and spread over the rayon pool.
//!
//! The parallel runner splits the input into contiguous partitions, one task
//! per partition, and collects matches into a single lock-protected vector.
//! Output order is unspecified.

use crate::{
    geometry::planar::{Point, Polygon},
    InvalidArgumentSnafu,
    Result,
};
use num_traits::Float;
use snafu::ensure;
use std::{
    ops::Range,
    sync::{Mutex, PoisonError},
};

/// The number of tasks that can actually run at the same time right now.
///
/// This is the smaller of the current rayon pool size (the global pool, or the
/// one installed around the caller) and the number of logical CPUs.
/// It only reads the environment and never reconfigures any pool.
pub fn max_available_parallelism() -> usize {
    let pool_threads = rayon::current_num_threads();
    let cpus = num_cpus::get();
    pool_threads.min(cpus).max(1)
}

/// Returns all `points` inside `polygon`, in input order.
pub fn points_in_polygon<T>(points: &[Point<T>], polygon: &Polygon<T>) -> Vec<Point<T>>
where
    T: Float,
{
    let bbox = polygon.bounding_box();
    points
        .iter()
        .filter(|pt| polygon.contains_with_box(&bbox, pt))
        .copied()
        .collect()
}

/// Returns all `points` inside `polygon`, using up to `workers` concurrent tasks.
///
/// `workers` is clamped to [max_available_parallelism]. The result holds the
/// same points as [points_in_polygon] but in no particular order.
///
/// Fails with `InvalidArgument` if `workers` is zero.
/// A panic in any of the tasks is propagated once all of them have finished.
pub fn points_in_polygon_parallel<T>(
    points: &[Point<T>],
    polygon: &Polygon<T>,
    workers: usize,
) -> Result<Vec<Point<T>>>
where
    T: Float + Send + Sync,
{
    let workers = effective_workers(workers)?;
    log::debug!(
        "Checking {} points against a polygon with {} vertices on {} workers",
        points.len(),
        polygon.len(),
        workers
    );
    let bbox = polygon.bounding_box();
    let inside: Mutex<Vec<Point<T>>> = Mutex::new(Vec::new());
    rayon::scope(|s| {
        for (index, range) in partition_ranges(points.len(), workers)
            .into_iter()
            .enumerate()
        {
            let batch = &points[range];
            let bbox = &bbox;
            let inside = &inside;
            s.spawn(move |_| {
                log::trace!("Worker {index} got {} points", batch.len());
                for pt in batch {
                    if polygon.contains_with_box(bbox, pt) {
                        // a push can't leave the vector half-written, so poison is harmless
                        inside
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(*pt);
                    }
                }
            });
        }
    });
    let inside = inside.into_inner().unwrap_or_else(PoisonError::into_inner);
    log::debug!("Found {} of {} points inside", inside.len(), points.len());
    Ok(inside)
}

/// Validate the requested worker count and clamp it to the available parallelism.
pub(crate) fn effective_workers(requested: usize) -> Result<usize> {
    ensure!(
        requested > 0,
        InvalidArgumentSnafu {
            description: "At least one worker is required",
        }
    );
    let ceiling = max_available_parallelism();
    if requested > ceiling {
        log::debug!("Requested {requested} workers, but only {ceiling} are available");
        Ok(ceiling)
    } else {
        Ok(requested)
    }
}

/// Split `0..len` into `parts` contiguous ranges of `len / parts` indices.
///
/// The last range also takes the remainder, so every index is covered exactly once.
pub(crate) fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    if parts == 0 {
        return Vec::new();
    }
    let chunk = len / parts;
    (0..parts)
        .map(|i| {
            let start = chunk * i;
            let end = if i + 1 == parts { len } else { start + chunk };
            start..end
        })
        .collect()
}
