// Factory method pattern: one concrete factory per product, so adding a
// product means adding a factory rather than editing a switch.
//
// Script: a count N, then N lines of `Circle|Square quantity`; each
// produced block prints one line.

use std::io::{self, Read};

// =============================================================================
// Products
// =============================================================================

trait Product {
    fn show(&self) -> &'static str;
}

struct Circle;
struct Square;

impl Product for Circle {
    fn show(&self) -> &'static str {
        "Circle Block"
    }
}

impl Product for Square {
    fn show(&self) -> &'static str {
        "Square Block"
    }
}

// =============================================================================
// Factories
// =============================================================================

trait Factory {
    fn create_product(&self) -> Box<dyn Product>;
}

struct CircleFactory;
struct SquareFactory;

impl Factory for CircleFactory {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(Circle)
    }
}

impl Factory for SquareFactory {
    fn create_product(&self) -> Box<dyn Product> {
        Box::new(Square)
    }
}

/// Unrecognized shapes have no factory and produce nothing.
fn factory_for(shape: &str) -> Option<Box<dyn Factory>> {
    match shape {
        "Circle" => Some(Box::new(CircleFactory)),
        "Square" => Some(Box::new(SquareFactory)),
        _ => None,
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

    for _ in 0..count {
        let (Some(shape), Some(quantity)) = (tokens.next(), tokens.next()) else {
            return;
        };
        let Ok(quantity) = quantity.parse::<usize>() else {
            return;
        };
        if let Some(factory) = factory_for(shape) {
            for _ in 0..quantity {
                println!("{}", factory.create_product().show());
            }
        }
    }
}
