//! Composite of intersectable shapes.

use facet_math::Point3;
use rayon::prelude::*;

use crate::{Intersectable, Ray};

/// A collection of shapes queried as one.
///
/// The composite only depends on [`Intersectable`], never on concrete
/// shape types.
#[derive(Debug, Default)]
pub struct Geometries {
    shapes: Vec<Box<dyn Intersectable>>,
}

impl Geometries {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from boxed shapes.
    pub fn from_shapes(shapes: Vec<Box<dyn Intersectable>>) -> Self {
        Self { shapes }
    }

    /// Add a shape.
    pub fn add(&mut self, shape: impl Intersectable + 'static) {
        self.shapes.push(Box::new(shape));
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the collection has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Intersect `ray` with every shape and merge the results.
    ///
    /// Points are grouped by shape in insertion order. An empty vector means
    /// no shape was hit.
    pub fn find_intersections(&self, ray: &Ray) -> Vec<Point3> {
        let hits: Vec<Point3> = self
            .shapes
            .iter()
            .flat_map(|shape| shape.find_intersections(ray))
            .collect();
        log::trace!("ray hit {} points across {} shapes", hits.len(), self.shapes.len());
        hits
    }

    /// Same as [`find_intersections`](Self::find_intersections), querying
    /// the shapes in parallel.
    pub fn par_find_intersections(&self, ray: &Ray) -> Vec<Point3> {
        let per_shape: Vec<Vec<Point3>> = self
            .shapes
            .par_iter()
            .map(|shape| shape.find_intersections(ray))
            .collect();
        per_shape.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_geom::{Plane, Polygon};
    use facet_math::Vec3;

    fn square_at(z: f64) -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    fn down_ray(x: f64, y: f64) -> Ray {
        Ray::from_vec(Point3::new(x, y, 10.0), Vec3::new(0.0, 0.0, -1.0)).unwrap()
    }

    #[test]
    fn test_empty_collection() {
        let geometries = Geometries::new();
        assert!(geometries.is_empty());
        assert!(geometries.find_intersections(&down_ray(0.5, 0.5)).is_empty());
    }

    #[test]
    fn test_merges_in_insertion_order() {
        let mut geometries = Geometries::new();
        geometries.add(square_at(1.0));
        geometries.add(square_at(3.0));
        geometries.add(square_at(2.0));
        assert_eq!(geometries.len(), 3);

        let hits = geometries.find_intersections(&down_ray(0.5, 0.5));
        assert_eq!(
            hits,
            vec![
                Point3::new(0.5, 0.5, 1.0),
                Point3::new(0.5, 0.5, 3.0),
                Point3::new(0.5, 0.5, 2.0),
            ]
        );
    }

    #[test]
    fn test_partial_miss() {
        let mut geometries = Geometries::new();
        geometries.add(square_at(1.0));
        geometries.add(Plane::xy());
        // Outside the square but still over the plane.
        let hits = geometries.find_intersections(&down_ray(2.0, 2.0));
        assert_eq!(hits, vec![Point3::new(2.0, 2.0, 0.0)]);
    }

    #[test]
    fn test_edge_hits_are_dropped() {
        let shapes: Vec<Box<dyn Intersectable>> =
            vec![Box::new(square_at(1.0)), Box::new(square_at(2.0))];
        let geometries = Geometries::from_shapes(shapes);
        assert!(geometries.find_intersections(&down_ray(0.0, 0.5)).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let shapes: Vec<Box<dyn Intersectable>> = (0..64)
            .map(|i| Box::new(square_at(i as f64 * 0.25 - 4.0)) as Box<dyn Intersectable>)
            .collect();
        let geometries = Geometries::from_shapes(shapes);
        let ray = down_ray(0.25, 0.75);
        let sequential = geometries.find_intersections(&ray);
        let parallel = geometries.par_find_intersections(&ray);
        assert_eq!(sequential.len(), 56);
        assert_eq!(sequential, parallel);
    }
}
