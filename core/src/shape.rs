//! The area capability and the built-in variants that carry it.
//!
//! Every variant owns its own computation. Nothing outside a variant branches
//! on which concrete type it is looking at, so a new variant is a new type
//! with one `impl Shape` and no edits anywhere else.
//!
//! Dimensions are not validated. Negative or zero inputs give the value the
//! formula produces.

use std::f64::consts::PI;
use std::rc::Rc;
use std::sync::Arc;

/// Anything that can report its own area.
pub trait Shape {
    fn area(&self) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}
