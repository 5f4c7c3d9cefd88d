//! Ray-polygon intersection (plane hit plus edge half-space test).

use facet_geom::Polygon;

use super::{intersect_plane, PlaneHit};
use crate::Ray;

/// Intersect a ray with a convex polygon.
///
/// The ray is first intersected with the polygon's plane. The hit point `P`
/// is then classified against every edge `e = v[i+1] - v[i]` by its signed
/// distance `((e × (P - v[i])) · n) / |e|` from the edge's line. `P` is
/// inside only when all distances share a sign and none is within
/// `tol.linear` of zero.
///
/// Points on the boundary are never reported: a zero distance means `P` is
/// on the infinite line through an edge, so hits on an edge, on a vertex or
/// on an edge's extension all return `None`. Tolerances come from the polygon.
pub fn intersect_polygon(ray: &Ray, polygon: &Polygon) -> Option<PlaneHit> {
    let tol = polygon.tolerance();
    let hit = intersect_plane(ray, polygon.plane(), tol)?;
    let normal = polygon.normal_dir();

    let mut first_positive = None;
    for (start, end) in polygon.edges() {
        let edge = end - start;
        let side = edge.cross(&(hit.point - *start)).dot(normal.as_ref()) / edge.norm();
        if tol.is_zero(side) {
            return None;
        }

        let positive = side > 0.0;
        match first_positive {
            None => first_positive = Some(positive),
            Some(expected) if expected != positive => return None,
            Some(_) => {}
        }
    }

    Some(hit)
}
