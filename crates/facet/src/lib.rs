#![warn(missing_docs)]

//! facet — convex planar polygons for ray tracing.
//!
//! Re-exports the math, geometry and ray-tracing crates behind one
//! dependency.
//!
//! # Example
//!
//! ```
//! use facet::{Geometries, Point3, Polygon, Ray, Vec3};
//!
//! let mut scene = Geometries::new();
//! scene.add(
//!     Polygon::new(vec![
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(0.0, 3.0, 0.0),
//!         Point3::new(1.0, 3.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!     ])
//!     .unwrap(),
//! );
//!
//! let ray = Ray::from_vec(Point3::new(0.5, 2.0, 2.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
//! assert_eq!(scene.find_intersections(&ray), vec![Point3::new(0.5, 2.0, 0.0)]);
//! ```

pub use facet_geom;
pub use facet_math;
pub use facet_raytrace;

pub use facet_geom::{GeomError, Plane, Polygon, PolygonError};
pub use facet_math::{Dir3, Point3, Tolerance, Vec3};
pub use facet_raytrace::{Geometries, Intersectable, Ray};
