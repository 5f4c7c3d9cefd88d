//! Ray-shape intersection algorithms.
//!
//! Each shape has a dedicated intersector. Misses are `None`, never errors.

mod plane;
mod polygon;

pub use plane::intersect_plane;
pub use polygon::intersect_polygon;

use facet_math::Point3;

/// A ray crossing a planar shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Parameter along the ray (always positive).
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
}
