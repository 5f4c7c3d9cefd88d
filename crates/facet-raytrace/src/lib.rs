#![warn(missing_docs)]

//! Ray tracing against facet shapes.
//!
//! # Architecture
//!
//! - [`Ray`] - Half-line with origin and unit direction
//! - [`Intersectable`] - Capability shared by every traceable shape
//! - [`intersect`] - Ray-plane and ray-polygon intersection algorithms
//! - [`Geometries`] - Composite that queries many shapes at once
//!
//! # Example
//!
//! ```
//! use facet_geom::Polygon;
//! use facet_math::{Point3, Vec3};
//! use facet_raytrace::{Intersectable, Ray};
//!
//! let triangle = Polygon::triangle(
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 3.0, 0.0),
//!     Point3::new(1.0, 2.0, 0.0),
//! )
//! .unwrap();
//!
//! let ray = Ray::from_vec(Point3::new(0.5, 2.0, 2.0), Vec3::new(0.0, 0.0, -3.0)).unwrap();
//! assert_eq!(triangle.find_intersections(&ray), vec![Point3::new(0.5, 2.0, 0.0)]);
//! ```

mod geometries;
mod ray;
mod shape;
pub mod intersect;

pub use geometries::Geometries;
pub use ray::Ray;
pub use shape::Intersectable;
