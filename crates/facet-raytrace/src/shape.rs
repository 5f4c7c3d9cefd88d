//! The intersectable-shape capability.

use facet_geom::{Plane, Polygon};
use facet_math::{Dir3, Point3, Tolerance};

use crate::intersect::{intersect_plane, intersect_polygon};
use crate::Ray;

/// A shape that rays can be traced against.
///
/// Implementations are immutable, so queries are pure and may run
/// concurrently on the same shape.
pub trait Intersectable: Send + Sync + std::fmt::Debug {
    /// Surface normal at `point`, which is assumed to lie on the shape.
    ///
    /// Flat shapes ignore the point and return their fixed normal.
    fn normal(&self, point: &Point3) -> Dir3;

    /// All points where `ray` meets the shape, nearest first.
    ///
    /// An empty vector means the ray misses.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point3>;
}

impl Intersectable for Polygon {
    fn normal(&self, _point: &Point3) -> Dir3 {
        self.normal_dir()
    }

    fn find_intersections(&self, ray: &Ray) -> Vec<Point3> {
        intersect_polygon(ray, self).map(|hit| hit.point).into_iter().collect()
    }
}

impl Intersectable for Plane {
    fn normal(&self, _point: &Point3) -> Dir3 {
        self.normal
    }

    fn find_intersections(&self, ray: &Ray) -> Vec<Point3> {
        intersect_plane(ray, self, &Tolerance::DEFAULT)
            .map(|hit| hit.point)
            .into_iter()
            .collect()
    }
}
