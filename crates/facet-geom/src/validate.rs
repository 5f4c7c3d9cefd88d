//! Construction-time validation of polygon vertex loops.

use std::f64::consts::PI;

use facet_math::{Point3, Tolerance};

use crate::{Plane, PolygonError};

/// Validate an ordered vertex loop and derive its supporting plane.
///
/// The plane comes from the first three vertices. Every later vertex must lie
/// on it. Then a single pass looks at each vertex `i` (indices modulo the
/// vertex count) with incoming edge `a = v[i] - v[i-1]` and outgoing edge
/// `b = v[i+1] - v[i]`:
///
/// - a zero-length edge, or a turn sine `((a × b) · n) / (|a| |b|)` within
///   `tol.angular` of zero, means a duplicate vertex or a vertex on the line
///   through its neighbours;
/// - a turn sine whose sign differs from the first vertex's means the loop is
///   concave or reverses its winding;
/// - a running total of signed turn angles past 3π means the loop winds
///   around more than once (a star such as a pentagram), which the sign test
///   alone cannot see. A simple convex loop totals exactly 2π.
///
/// Errors name the first offending vertex.
pub(crate) fn validate_polygon(
    vertices: &[Point3],
    tol: &Tolerance,
) -> Result<Plane, PolygonError> {
    let n = vertices.len();
    if n < 3 {
        return Err(PolygonError::InvalidVertexCount(n));
    }

    let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2], tol)?;

    for (index, v) in vertices.iter().enumerate().skip(3) {
        let distance = plane.signed_distance(v);
        if distance.abs() > tol.linear {
            return Err(PolygonError::NonCoplanar { index, distance });
        }
    }

    let normal = plane.normal.as_ref();
    let mut first_positive = None;
    let mut total_turn = 0.0;
    for i in 0..n {
        let prev = &vertices[(i + n - 1) % n];
        let cur = &vertices[i];
        let next = &vertices[(i + 1) % n];

        let a = cur - prev;
        let b = next - cur;
        let (la, lb) = (a.norm(), b.norm());
        if la < tol.linear || lb < tol.linear {
            return Err(PolygonError::DuplicateOrCollinearVertex(i));
        }

        let sin = a.cross(&b).dot(normal) / (la * lb);
        if tol.is_collinear(sin) {
            return Err(PolygonError::DuplicateOrCollinearVertex(i));
        }

        let positive = sin > 0.0;
        match first_positive {
            None => first_positive = Some(positive),
            Some(expected) if expected != positive => {
                return Err(PolygonError::NonConvex(i));
            }
            Some(_) => {}
        }

        let cos = a.dot(&b) / (la * lb);
        total_turn += sin.atan2(cos).abs();
        if total_turn > 3.0 * PI {
            return Err(PolygonError::NonConvex(i));
        }
    }

    Ok(plane)
}
