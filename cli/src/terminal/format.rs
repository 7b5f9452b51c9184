use colored::*;

use crate::terminal::colors;
use solid_core::registry::ParsedShape;
use solid_core::shape::Shape;

pub type Detail = (String, ColoredString);

pub fn area_value(area: f64) -> ColoredString {
    format!("{area:.6}").color(colors::AREA)
}

/// One line per labelled dimension, then the area.
pub fn shape_to_details(shape: &ParsedShape) -> Vec<Detail> {
    let mut details: Vec<Detail> = shape
        .labelled_dims()
        .map(|(label, dim)| (label.to_string(), dim.to_string().normal()))
        .collect();
    details.push(("Area".to_string(), area_value(shape.area())));
    details
}
