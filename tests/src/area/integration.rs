#![cfg(test)]
use solid_core::registry::{ParsedShape, ShapeRegistry};
use solid_core::{AreaCalculator, Circle, Rectangle, Shape, Triangle, par_total_area, total_area};

const EPS: f64 = 1e-6;

/// A variant that exists only here. Nothing in `solid-core` knows about it.
struct Trapezoid {
    top: f64,
    bottom: f64,
    height: f64,
}

impl Shape for Trapezoid {
    fn area(&self) -> f64 {
        0.5 * (self.top + self.bottom) * self.height
    }
}

fn reference_shapes() -> Vec<Box<dyn Shape + Send + Sync>> {
    vec![
        Box::new(Rectangle { width: 10.0, height: 20.0 }),
        Box::new(Circle { radius: 5.0 }),
        Box::new(Triangle { base: 10.0, height: 20.0 }),
    ]
}

#[test]
fn reference_scenario_total() {
    let total = total_area(&reference_shapes());
    let expected = 200.0 + std::f64::consts::PI * 25.0 + 100.0;
    assert!((total - expected).abs() < EPS, "got {total}");
    assert!((total - 378.539_816_3).abs() < EPS);
}

#[test]
fn empty_and_degenerate_scenarios() {
    let none: Vec<Box<dyn Shape>> = vec![];
    assert_eq!(total_area(&none), 0.0);
    assert_eq!(total_area(&[Rectangle::new(0.0, 5.0)]), 0.0);
}

#[test]
fn new_variant_adds_exactly_its_own_area() {
    let mut shapes = reference_shapes();
    let before = total_area(&shapes);

    let trapezoid = Trapezoid { top: 2.0, bottom: 4.0, height: 3.0 };
    let own = trapezoid.area();
    shapes.push(Box::new(trapezoid));

    assert_eq!(own, 9.0);
    assert!((total_area(&shapes) - (before + own)).abs() < 1e-9);
}

#[test]
fn registered_variant_flows_through_the_engine() {
    let mut registry = ShapeRegistry::with_builtin();
    registry.register("trapezoid", &["Top", "Bottom", "Height"], |d| {
        Box::new(Trapezoid { top: d[0], bottom: d[1], height: d[2] })
    });

    let shapes: Vec<ParsedShape> = registry
        .parse_all(["rect:10,20", "circle:5", "tri:10x20", "trapezoid:2,4,3"])
        .unwrap();

    let total = AreaCalculator::new().calculate(&shapes);
    assert!((total - 387.539_816_3).abs() < EPS, "got {total}");
}

#[test]
fn parallel_engine_agrees_on_large_input() {
    let shapes: Vec<Box<dyn Shape + Send + Sync>> = (0..10_000)
        .map(|i| -> Box<dyn Shape + Send + Sync> {
            match i % 3 {
                0 => Box::new(Rectangle::new(i as f64, 0.5)),
                1 => Box::new(Circle::new(0.1)),
                _ => Box::new(Triangle::new(2.0, i as f64)),
            }
        })
        .collect();

    let seq = total_area(&shapes);
    let par = par_total_area(&shapes);
    assert!((seq - par).abs() <= 1e-9 * seq.abs());
}

#[test]
fn split_sequences_sum_to_the_whole() {
    let shapes = reference_shapes();
    for split in 0..=shapes.len() {
        let (left, right) = shapes.split_at(split);
        let sum = total_area(left) + total_area(right);
        assert!((sum - total_area(&shapes)).abs() < 1e-9);
    }
}
