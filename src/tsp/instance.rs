//! Point sets to tour.

use rand::Rng;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An immutable set of points for the demo to tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    points: Vec<Point>,
}

impl Instance {
    /// Builds an instance from explicit points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Samples `n` points uniformly from the unit square.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Euclidean distance between points `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.points[i].distance(&self.points[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_points_in_unit_square() {
        let mut rng = StdRng::seed_from_u64(42);
        let instance = Instance::random(100, &mut rng);

        assert_eq!(instance.len(), 100);
        for p in instance.points() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_distance_symmetric() {
        let instance = Instance::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(1.0, 1.0),
        ]);

        assert!((instance.distance(0, 1) - 5.0).abs() < 1e-12);
        assert_eq!(instance.distance(0, 2), instance.distance(2, 0));
        assert_eq!(instance.distance(1, 1), 0.0);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::from_points(Vec::new());
        assert!(instance.is_empty());
        assert_eq!(instance.len(), 0);
    }
}
