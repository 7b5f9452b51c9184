use std::time::{Duration, Instant};

use colored::*;
use tracing::warn;

use crate::{mprint, terminal::{colors, format, print}};
use solid_common::config::Config;
use solid_core::area::AreaCalculator;
use solid_core::registry::{ParsedShape, ShapeRegistry};

pub fn area(inputs: &[String], cfg: &Config) -> anyhow::Result<()> {
    let registry: ShapeRegistry = ShapeRegistry::with_builtin();
    let shapes: Vec<ParsedShape> = registry.parse_all(inputs)?;

    let calculator: AreaCalculator = if cfg.parallel {
        AreaCalculator::parallel()
    } else {
        AreaCalculator::new()
    };

    let start_time: Instant = Instant::now();
    let total: f64 = calculator.calculate(&shapes);

    if shapes.is_empty() {
        warn!("No shapes given, the total area is zero");
    } else {
        print::header("shapes", cfg.quiet);
        print_shapes(&shapes, cfg);
    }

    print_summary(shapes.len(), total, start_time.elapsed(), calculator, cfg);
    Ok(())
}

fn print_shapes(shapes: &[ParsedShape], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, shape) in shapes.iter().enumerate() {
        print::tree_head(idx, &shape.to_string());
        print::as_tree_one_level(format::shape_to_details(shape));
        if idx + 1 != shapes.len() {
            mprint!();
        }
    }
}

fn print_summary(count: usize, total: f64, elapsed: Duration, calculator: AreaCalculator, cfg: &Config) {
    let mode: &str = if calculator.is_parallel() { "parallel" } else { "sequential" };
    let summary: String = format!(
        "Total area of {count} shape(s): {total:.6} ({mode}, {}µs)",
        elapsed.as_micros()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary.color(colors::TEXT_DEFAULT).bold());
        }
        _ => {
            mprint!(&format!("{}", format::area_value(total)));
        }
    }
}
