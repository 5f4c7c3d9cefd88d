//! Infinite planes.

use facet_math::{Dir3, Point3, Tolerance};

use crate::GeomError;

/// An infinite plane defined by a reference point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Reference point on the plane.
    pub origin: Point3,
    /// Unit normal.
    pub normal: Dir3,
}

impl Plane {
    /// Create a plane from a point on it and its normal.
    pub fn new(origin: Point3, normal: Dir3) -> Self {
        Self { origin, normal }
    }

    /// Derive the plane through three points.
    ///
    /// The normal is `normalize((p2 - p1) × (p3 - p1))`, so its orientation
    /// follows the right-hand rule over the order `p1, p2, p3`. The plane is
    /// anchored at `p1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::CollinearPoints`] if `p2` or `p3` coincides with
    /// `p1` (within `tol.linear`) or the sine of the angle at `p1` is within
    /// `tol.angular` of zero. Both tests are independent of scale.
    pub fn from_points(
        p1: &Point3,
        p2: &Point3,
        p3: &Point3,
        tol: &Tolerance,
    ) -> Result<Self, GeomError> {
        let u = p2 - p1;
        let v = p3 - p1;
        let (lu, lv) = (u.norm(), v.norm());
        if lu < tol.linear || lv < tol.linear {
            return Err(GeomError::CollinearPoints);
        }

        let cross = u.cross(&v);
        if tol.is_collinear(cross.norm() / (lu * lv)) {
            return Err(GeomError::CollinearPoints);
        }

        let normal = Dir3::try_new(cross, 0.0).ok_or(GeomError::CollinearPoints)?;
        Ok(Self::new(*p1, normal))
    }

    /// XY plane at the origin, normal +Z.
    pub fn xy() -> Self {
        Self::new(Point3::origin(), facet_math::Vec3::z_axis())
    }

    /// Signed distance from a point to this plane, positive on the normal side.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.origin).dot(self.normal.as_ref())
    }
}
