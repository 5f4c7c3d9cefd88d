//! Ray-plane intersection (closed-form).

use facet_geom::Plane;
use facet_math::Tolerance;

use super::PlaneHit;
use crate::Ray;

/// Intersect a ray with a plane.
///
/// Returns `Some(hit)` if the ray crosses the plane strictly after its
/// origin, or `None` if the ray is parallel to the plane (including a ray
/// lying in it) or the crossing is at or behind the origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane, tol: &Tolerance) -> Option<PlaneHit> {
    let normal = plane.normal.as_ref();
    let denom = ray.direction.as_ref().dot(normal);

    // Ray is parallel to plane
    if tol.is_perpendicular(denom) {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(normal) / denom;

    // Rays start strictly after their origin
    if t <= tol.linear {
        return None;
    }

    Some(PlaneHit { t, point: ray.at(t) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_math::{Point3, Vec3};

    fn ray(origin: [f64; 3], dir: [f64; 3]) -> Ray {
        Ray::from_vec(
            Point3::new(origin[0], origin[1], origin[2]),
            Vec3::new(dir[0], dir[1], dir[2]),
        )
        .unwrap()
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let r = ray([0.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT);
        let hit = hit.unwrap();
        assert!((hit.t - 5.0).abs() < 1e-10);
        assert!(hit.point.coords.norm() < 1e-10);
    }

    #[test]
    fn test_ray_plane_offset() {
        let r = ray([3.0, 4.0, 10.0], [0.0, 0.0, -1.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT).unwrap();
        assert!((hit.t - 10.0).abs() < 1e-10);
        assert_eq!(hit.point, Point3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_ray_plane_parallel() {
        let r = ray([0.0, 0.0, 5.0], [1.0, 0.0, 0.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_in_plane() {
        let r = ray([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let r = ray([0.0, 0.0, -5.0], [0.0, 0.0, -1.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_origin_on_plane() {
        let r = ray([1.0, 2.0, 0.0], [0.0, 0.0, 1.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT);
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_plane_angled() {
        let r = ray([0.0, 0.0, 10.0], [1.0, 0.0, -1.0]);
        let hit = intersect_plane(&r, &Plane::xy(), &Tolerance::DEFAULT).unwrap();
        // Diagonal travel: 10 units down is 10 * sqrt(2) along the ray
        let expected_t = 10.0 * 2.0_f64.sqrt();
        assert!((hit.t - expected_t).abs() < 1e-10);
        assert!((hit.point.x - 10.0).abs() < 1e-10);
        assert!(hit.point.z.abs() < 1e-10);
    }
}
