#![warn(missing_docs)]

//! Math types for the facet ray-tracing primitives.
//!
//! Thin wrappers around nalgebra providing the point, vector and
//! direction types shared by every facet crate, plus the tolerance
//! configuration that decides every "is this zero?" question.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
///
/// Directions are never the zero vector; build them with
/// [`Tolerance::direction`] when the input may be degenerate.
pub type Dir3 = Unit<Vector3<f64>>;

/// Tolerance constants for geometric comparisons.
///
/// Both values are absolute. `linear` is compared against lengths only and
/// `angular` against sines and cosines only, so the decisions do not depend
/// on the size of the geometry. They directly decide boundary behaviour:
/// a ray hitting within `linear` of a polygon edge's line counts as "on the
/// edge" and is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear tolerance for distances, ray parameters and sign tests.
    pub linear: f64,
    /// Tolerance on the cosine between two unit vectors, used for
    /// parallelism tests.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-10 linear, 1e-10 on cosines).
    pub const DEFAULT: Self = Self {
        linear: 1e-10,
        angular: 1e-10,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if the cosine between two unit vectors is effectively zero,
    /// i.e. the vectors are perpendicular.
    pub fn is_perpendicular(&self, cos: f64) -> bool {
        cos.abs() < self.angular
    }

    /// Check if the sine of the angle between two vectors is effectively
    /// zero, i.e. the vectors are parallel or anti-parallel.
    ///
    /// Pass `|a × b| / (|a| |b|)` or a signed component of it; the test is
    /// independent of the vectors' lengths.
    pub fn is_collinear(&self, sin: f64) -> bool {
        sin.abs() < self.angular
    }

    /// Normalize `v`, or return `None` if it is the zero vector.
    pub fn direction(&self, v: Vec3) -> Option<Dir3> {
        Dir3::try_new(v, self.linear)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
