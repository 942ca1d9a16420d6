//! # Class Hierarchy
//!
//! Shapes arranged as a capability graph:
//!
//! ```text
//! Shape ── Circle
//!   ├── Polygon ── Rectangle ── Square
//!   ├── ColoredShape<C>            (wraps any Box<dyn Shape>)
//!   └── Drawable ─┐
//!       Polygon ──┴── ColoredPolygon   (one Shape impl shared by both)
//! ```
//!
//! `Polygon` adds sides but no geometry, so every concrete polygon still has to
//! supply `area` and `perimeter`. `ColoredPolygon` gets both `Polygon` and
//! `Drawable` on top of a single `Shape` implementation: there is exactly one
//! shape identity, whichever capability a caller sees it through.

use crate::error::FixtureError;
use print_support::Decimal;
use std::fmt;
use std::io::Write;
use tracing::debug;

// Five digits; printed areas and perimeters depend on this exact value.
#[allow(clippy::approx_constant)]
const PI: f64 = 3.14159;

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    fn draw(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Drawing a shape")
    }

    fn name(&self) -> String {
        "Shape".to_string()
    }
}

/// Intermediate layer: knows its sides, leaves geometry to the implementor.
pub trait Polygon: Shape {
    fn base(&self) -> &PolygonBase;

    fn sides(&self) -> u32 {
        self.base().sides
    }
}

/// State shared by every polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonBase {
    sides: u32,
}

impl PolygonBase {
    pub fn new(sides: u32) -> Self {
        Self { sides }
    }

    pub fn name(&self) -> String {
        "Polygon".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn name(&self) -> String {
        "Circle".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Rectangle {
    base: PolygonBase,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            base: PolygonBase::new(4),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn name(&self) -> String {
        "Rectangle".to_string()
    }
}

impl Polygon for Rectangle {
    fn base(&self) -> &PolygonBase {
        &self.base
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle[{}x{}]",
            Decimal(self.width),
            Decimal(self.height)
        )
    }
}

/// Third level: a rectangle with equal sides. Only the name changes.
#[derive(Debug, Clone)]
pub struct Square(Rectangle);

impl Square {
    pub fn new(side: f64) -> Self {
        Self(Rectangle::new(side, side))
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0.area()
    }

    fn perimeter(&self) -> f64 {
        self.0.perimeter()
    }

    fn name(&self) -> String {
        "Square".to_string()
    }
}

impl Polygon for Square {
    fn base(&self) -> &PolygonBase {
        self.0.base()
    }
}

/// Decorates any shape with a color of caller-chosen type.
pub struct ColoredShape<C> {
    inner: Box<dyn Shape>,
    color: C,
}

impl<C: Clone> ColoredShape<C> {
    pub fn new(inner: Box<dyn Shape>, color: C) -> Self {
        Self { inner, color }
    }

    pub fn color(&self) -> C {
        self.color.clone()
    }
}

impl<C> Shape for ColoredShape<C> {
    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn perimeter(&self) -> f64 {
        self.inner.perimeter()
    }

    fn name(&self) -> String {
        format!("Colored{}", self.inner.name())
    }
}

/// Mix-in capability: a shape that draws with a style.
pub trait Drawable: Shape {
    fn style(&self) -> &str;
}

pub struct ColoredPolygon {
    base: PolygonBase,
    style: String,
    color: String,
}

impl ColoredPolygon {
    pub fn new(sides: u32, style: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            base: PolygonBase::new(sides),
            style: style.into(),
            color: color.into(),
        }
    }
}

impl Shape for ColoredPolygon {
    // Placeholder geometry.
    fn area(&self) -> f64 {
        0.0
    }

    fn perimeter(&self) -> f64 {
        0.0
    }

    fn draw(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Drawing with style: {}", self.style())
    }

    fn name(&self) -> String {
        format!("{} {} with {}", self.color, self.base.name(), self.style)
    }
}

impl Polygon for ColoredPolygon {
    fn base(&self) -> &PolygonBase {
        &self.base
    }
}

impl Drawable for ColoredPolygon {
    fn style(&self) -> &str {
        &self.style
    }
}

/// The shapes the driver walks, in print order.
pub fn sample_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Circle::new(5.0)),
        Box::new(Square::new(4.0)),
        Box::new(ColoredShape::new(
            Box::new(Circle::new(3.0)),
            "red".to_string(),
        )),
        Box::new(ColoredPolygon::new(6, "dashed", "blue")),
    ]
}

pub fn run(out: &mut dyn Write) -> Result<(), FixtureError> {
    let shapes = sample_shapes();
    debug!(count = shapes.len(), "Walking shapes");

    for shape in &shapes {
        writeln!(out, "Shape: {}", shape.name())?;
        writeln!(out, "Area: {}", Decimal(shape.area()))?;
        writeln!(out, "Perimeter: {}", Decimal(shape.perimeter()))?;
        shape.draw(out)?;
        writeln!(out, "-------------------")?;
    }

    let r1 = Rectangle::new(3.0, 4.0);
    let r2 = Rectangle::new(3.0, 4.0);
    let r3 = Rectangle::new(5.0, 6.0);

    writeln!(out, "r1 == r2: {}", r1 == r2)?;
    writeln!(out, "r1 == r3: {}", r1 == r3)?;
    writeln!(out, "r1: {r1}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> String {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_shape_blocks() {
        let text = output();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Shape: Circle");
        assert_eq!(lines[5], "Shape: Square");
        assert_eq!(lines[6], "Area: 16");
        assert_eq!(lines[7], "Perimeter: 16");
        assert_eq!(lines[8], "Drawing a shape");
        assert_eq!(lines[10], "Shape: ColoredCircle");
        assert_eq!(lines[15], "Shape: blue Polygon with dashed");
        assert_eq!(lines[16], "Area: 0");
        assert_eq!(lines[18], "Drawing with style: dashed");
        assert_eq!(lines.iter().filter(|l| **l == "-------------------").count(), 4);
    }

    #[test]
    fn test_rectangle_operators() {
        let text = output();
        assert!(text.ends_with("r1 == r2: true\nr1 == r3: false\nr1: Rectangle[3x4]\n"));
    }

    #[test]
    fn test_square_is_a_polygon_with_four_sides() {
        let square = Square::new(2.0);
        assert_eq!(square.sides(), 4);
        assert_eq!(square.area(), 4.0);
    }

    #[test]
    fn test_colored_polygon_capabilities_share_one_shape() {
        let shape = ColoredPolygon::new(6, "dashed", "blue");
        let as_polygon: &dyn Polygon = &shape;
        let as_drawable: &dyn Drawable = &shape;

        assert_eq!(as_polygon.sides(), 6);
        assert_eq!(as_drawable.style(), "dashed");
        assert_eq!(as_polygon.name(), as_drawable.name());
    }

    #[test]
    fn test_colored_shape_delegates() {
        let colored = ColoredShape::new(Box::new(Circle::new(1.0)), 0xff0000_u32);
        assert_eq!(colored.color(), 0xff0000);
        assert_eq!(colored.area(), Circle::new(1.0).area());
        assert_eq!(Circle::new(1.0).radius(), 1.0);
    }
}
