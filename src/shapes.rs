//! Shape types and the area capability.

use std::f64::consts::PI;
use std::fmt::{self, Display};

/// Capability: the type can report its area.
///
/// The area is recomputed from the current dimensions on every call; nothing
/// is cached. Dimensions are not validated, so a negative side or radius is
/// accepted and squared into a non-negative area.
pub trait HasArea {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square { side }
    }
}

impl HasArea for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side = {}, area = {})", self.side, self.area())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl HasArea for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(radius = {}, area = {})", self.radius, self.area())
    }
}
