//! Aggregation of shape areas.
//!
//! The engine is written only against [`Shape`]. It works for slices of
//! concrete variants, of `Box<dyn Shape>`, or of borrowed trait objects.

use rayon::prelude::*;

use crate::shape::Shape;

/// Sums the area of every shape, in slice order.
///
/// The fold starts at `0.0`, so an empty slice yields positive zero and a
/// single shape yields exactly its own area.
pub fn total_area<S: Shape>(shapes: &[S]) -> f64 {
    shapes.iter().fold(0.0, |total, shape| total + shape.area())
}

/// Map-reduce variant of [`total_area`] over the rayon pool.
///
/// Partial sums are combined in whatever grouping the pool chooses, so the
/// result can differ from the sequential total by rounding error.
pub fn par_total_area<S: Shape + Sync>(shapes: &[S]) -> f64 {
    shapes
        .par_iter()
        .map(|shape| shape.area())
        .reduce(|| 0.0, |a, b| a + b)
}

/// Value form of the engine, for callers that hold the calculator as a
/// collaborator rather than calling a free function.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator {
    parallel: bool,
}

impl AreaCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn calculate<S: Shape + Sync>(&self, shapes: &[S]) -> f64 {
        if self.parallel {
            par_total_area(shapes)
        } else {
            total_area(shapes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, Rectangle, Triangle};

    const EPS: f64 = 1e-6;

    fn mixed() -> Vec<Box<dyn Shape + Send + Sync>> {
        vec![
            Box::new(Rectangle::new(10.0, 20.0)),
            Box::new(Circle::new(5.0)),
            Box::new(Triangle::new(10.0, 20.0)),
        ]
    }

    #[test]
    fn test_mixed_sequence() {
        let total = total_area(&mixed());
        assert!((total - 378.539_816_3).abs() < EPS, "got {total}");
    }

    #[test]
    fn test_empty_is_exactly_zero() {
        let shapes: Vec<Box<dyn Shape>> = Vec::new();
        let total = total_area(&shapes);
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn test_single_shape_identity() {
        let circle = Circle::new(3.3);
        assert_eq!(total_area(&[circle]), circle.area());
    }

    #[test]
    fn test_degenerate_rectangle() {
        assert_eq!(total_area(&[Rectangle::new(0.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_concatenation_is_additive_and_commutative() {
        let rect = Rectangle::new(1.5, 2.0);
        let circle = Circle::new(2.0);
        let triangle = Triangle::new(7.0, 3.0);

        let a: Vec<&dyn Shape> = vec![&rect, &circle];
        let b: Vec<&dyn Shape> = vec![&triangle];

        let ab: Vec<&dyn Shape> = a.iter().chain(b.iter()).copied().collect();
        let ba: Vec<&dyn Shape> = b.iter().chain(a.iter()).copied().collect();

        let expected = total_area(&a) + total_area(&b);
        assert!((total_area(&ab) - expected).abs() < 1e-9);
        assert!((total_area(&ba) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_homogeneous_slice() {
        let squares = [Rectangle::new(2.0, 2.0); 4];
        assert_eq!(total_area(&squares), 16.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let shapes: Vec<Circle> = (0..1_000).map(|r| Circle::new(r as f64 * 0.01)).collect();
        let seq = total_area(&shapes);
        let par = par_total_area(&shapes);
        assert!((seq - par).abs() < 1e-6 * seq.abs().max(1.0));
    }

    #[test]
    fn test_parallel_empty_is_zero() {
        let shapes: [Rectangle; 0] = [];
        assert_eq!(par_total_area(&shapes), 0.0);
    }

    #[test]
    fn test_calculator_modes_agree() {
        let shapes = mixed();
        let seq = AreaCalculator::new().calculate(&shapes);
        let par = AreaCalculator::parallel().calculate(&shapes);
        assert!(!AreaCalculator::new().is_parallel());
        assert!((seq - par).abs() < EPS);
    }
}
