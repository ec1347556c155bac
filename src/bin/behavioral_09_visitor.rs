// Visitor pattern: shapes accept a visitor via double dispatch, so new
// operations can be added without touching the shape types.
//
// Script: a count n, then n shapes (`Circle r` or `Rectangle w h`). An
// area-calculating visitor walks the drawing in input order; circle areas
// use 3.14 and print as floats, rectangle areas are integers. An invalid
// shape prints `Invalid input` and aborts.

use std::io::{self, Read};
use std::process;

// =============================================================================
// Elements
// =============================================================================

struct Circle {
    radius: i64,
}

struct Rectangle {
    width: i64,
    height: i64,
}

trait Shape {
    fn accept(&self, visitor: &mut dyn Visitor);
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_circle(self);
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_rectangle(self);
    }
}

// =============================================================================
// Visitors
// =============================================================================

trait Visitor {
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
}

#[derive(Default)]
struct AreaCalculator {
    lines: Vec<String>,
}

impl Visitor for AreaCalculator {
    fn visit_circle(&mut self, circle: &Circle) {
        let area = 3.14 * (circle.radius as f64).powi(2);
        self.lines.push(area.to_string());
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        let area = rectangle.width * rectangle.height;
        self.lines.push(area.to_string());
    }
}

// =============================================================================
// Object structure
// =============================================================================

struct Drawing {
    shapes: Vec<Box<dyn Shape>>,
}

impl Drawing {
    fn accept(&self, visitor: &mut dyn Visitor) {
        for shape in &self.shapes {
            shape.accept(visitor);
        }
    }
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    let mut tokens = input.split_whitespace();
    let Some(count) = tokens.next().and_then(|t| t.parse::<usize>().ok()) else {
        return;
    };

    let mut shapes: Vec<Box<dyn Shape>> = Vec::with_capacity(count);
    for _ in 0..count {
        let shape: Option<Box<dyn Shape>> = match tokens.next() {
            Some("Circle") => tokens
                .next()
                .and_then(|t| t.parse::<i64>().ok())
                .map(|radius| Box::new(Circle { radius }) as Box<dyn Shape>),
            Some("Rectangle") => {
                match (
                    tokens.next().and_then(|t| t.parse::<i64>().ok()),
                    tokens.next().and_then(|t| t.parse::<i64>().ok()),
                ) {
                    (Some(width), Some(height)) => {
                        Some(Box::new(Rectangle { width, height }) as Box<dyn Shape>)
                    }
                    _ => None,
                }
            }
            _ => None,
        };
        let Some(shape) = shape else {
            println!("Invalid input");
            process::exit(1);
        };
        shapes.push(shape);
    }

    let drawing = Drawing { shapes };
    let mut calculator = AreaCalculator::default();
    drawing.accept(&mut calculator);
    for line in calculator.lines {
        println!("{line}");
    }
}
