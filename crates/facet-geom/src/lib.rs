#![warn(missing_docs)]

//! Planar geometry for the facet ray-tracing primitives.
//!
//! Provides the infinite [`Plane`] and the validated convex [`Polygon`].
//! A polygon is checked once when it is built; after that it is an
//! immutable value that can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use facet_geom::{Polygon, PolygonError};
//! use facet_math::Point3;
//!
//! let square = Polygon::new(vec![
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 3.0, 0.0),
//!     Point3::new(1.0, 3.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//! ])
//! .unwrap();
//! assert_eq!(square.len(), 4);
//!
//! let bowtie = Polygon::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//! assert!(matches!(bowtie, Err(PolygonError::NonConvex(_))));
//! ```

mod plane;
mod polygon;
mod validate;

pub use plane::Plane;
pub use polygon::Polygon;

use thiserror::Error;

/// Errors from deriving planar geometry.
#[derive(Debug, Clone, Error)]
pub enum GeomError {
    /// The points do not span a plane (coincident or collinear).
    #[error("points are collinear")]
    CollinearPoints,
}

/// Errors from building a [`Polygon`].
#[derive(Debug, Clone, Error)]
pub enum PolygonError {
    /// Fewer than three vertices were supplied.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    InvalidVertexCount(usize),

    /// The first three vertices are collinear so no plane is defined.
    #[error("first three vertices are collinear")]
    DegenerateGeometry,

    /// A vertex lies off the plane of the first three.
    #[error("vertex {index} is {distance:.3e} off the polygon plane")]
    NonCoplanar {
        /// Index of the offending vertex.
        index: usize,
        /// Its signed distance from the plane.
        distance: f64,
    },

    /// A vertex coincides with a neighbour or lies on the line through its neighbours.
    #[error("vertex {0} is duplicated or collinear with its neighbours")]
    DuplicateOrCollinearVertex(usize),

    /// The winding direction changes at a vertex.
    #[error("polygon is not convex at vertex {0}")]
    NonConvex(usize),
}

impl From<GeomError> for PolygonError {
    fn from(err: GeomError) -> Self {
        match err {
            GeomError::CollinearPoints => PolygonError::DegenerateGeometry,
        }
    }
}
