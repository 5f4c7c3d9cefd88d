//! Ray representation.

use facet_math::{Dir3, Point3, Tolerance, Vec3};

/// A half-line in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a ray from an origin and a unit direction.
    pub fn new(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from an origin and any direction vector.
    ///
    /// The direction is normalized. Returns `None` for a zero vector.
    pub fn from_vec(origin: Point3, direction: Vec3) -> Option<Self> {
        Tolerance::DEFAULT
            .direction(direction)
            .map(|direction| Self::new(origin, direction))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}
