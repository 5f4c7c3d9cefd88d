//! Convex planar polygons.

use facet_math::{Dir3, Point3, Tolerance};

use crate::validate::validate_polygon;
use crate::{Plane, PolygonError};

/// A simple convex planar polygon.
///
/// Vertex order is the winding order: the normal follows the right-hand rule
/// over the first three vertices. Every invariant (vertex count, coplanarity,
/// no duplicate or collinear vertices, convexity) is checked once by the
/// constructors, so a `Polygon` value is always valid and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
    tolerance: Tolerance,
}

impl Polygon {
    /// Build a polygon from its vertices using [`Tolerance::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns a [`PolygonError`] describing the first defect found:
    /// - fewer than three vertices
    /// - collinear first three vertices
    /// - a vertex off the plane of the first three
    /// - a duplicate vertex or one lying on the line through its neighbours
    /// - inconsistent winding, or a loop that winds around more than once
    ///   (concave or self-intersecting)
    pub fn new(vertices: Vec<Point3>) -> Result<Self, PolygonError> {
        Self::with_tolerance(vertices, Tolerance::DEFAULT)
    }

    /// Build a polygon with an explicit tolerance.
    ///
    /// The tolerance is kept and reused by intersection queries against this
    /// polygon.
    pub fn with_tolerance(
        vertices: Vec<Point3>,
        tolerance: Tolerance,
    ) -> Result<Self, PolygonError> {
        match validate_polygon(&vertices, &tolerance) {
            Ok(plane) => Ok(Self {
                vertices,
                plane,
                tolerance,
            }),
            Err(err) => {
                log::debug!("rejected polygon with {} vertices: {}", vertices.len(), err);
                Err(err)
            }
        }
    }

    /// Build a triangle.
    pub fn triangle(a: Point3, b: Point3, c: Point3) -> Result<Self, PolygonError> {
        Self::new(vec![a, b, c])
    }

    /// The vertices in winding order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of vertices (always at least 3).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a polygon has at least three vertices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The supporting plane, anchored at the first vertex.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The unit normal of the supporting plane.
    pub fn normal_dir(&self) -> Dir3 {
        self.plane.normal
    }

    /// The tolerance this polygon was validated with.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Iterate over the edges as `(start, end)` pairs, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}
