// Flyweight pattern: one shared shape object per shape kind; the drawing
// position is extrinsic state passed in at call time.
//
// Script: lines of `CIRCLE|RECTANGLE|TRIANGLE x y` until end of input.
// The first draw of a kind prints `drawn`, every later draw of that kind
// prints `shared`.

use std::io::{self, BufRead};
use std::process;

use colored::Colorize;
use rustc_hash::FxHashMap;

// =============================================================================
// Shape kinds and the shared flyweight
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw {
            "CIRCLE" => Ok(ShapeKind::Circle),
            "RECTANGLE" => Ok(ShapeKind::Rectangle),
            "TRIANGLE" => Ok(ShapeKind::Triangle),
            _ => Err(format!("Invalid shape type: {raw}")),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Triangle => "TRIANGLE",
        }
    }
}

/// Intrinsic state: the kind, plus whether this flyweight has been drawn
/// before. Position is extrinsic and supplied per call.
struct SharedShape {
    kind: ShapeKind,
    first_use: bool,
}

impl SharedShape {
    fn new(kind: ShapeKind) -> Self {
        SharedShape {
            kind,
            first_use: true,
        }
    }

    fn draw(&mut self, x: i64, y: i64) -> String {
        let verb = if self.first_use { "drawn" } else { "shared" };
        self.first_use = false;
        format!("{} {} at ({}, {})", self.kind.name(), verb, x, y)
    }
}

// =============================================================================
// Flyweight factory
// =============================================================================

#[derive(Default)]
struct ShapeFactory {
    shapes: FxHashMap<ShapeKind, SharedShape>,
}

impl ShapeFactory {
    /// Hands out the one shared instance per kind, creating it on first
    /// request.
    fn shape(&mut self, kind: ShapeKind) -> &mut SharedShape {
        self.shapes
            .entry(kind)
            .or_insert_with(|| SharedShape::new(kind))
    }
}

fn run_command(factory: &mut ShapeFactory, line: &str) -> Result<String, String> {
    let mut tokens = line.split_whitespace();
    let (Some(kind), Some(x), Some(y)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(format!("Invalid draw command: {line}"));
    };
    let kind = ShapeKind::parse(kind)?;
    let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
        return Err(format!("Invalid draw command: {line}"));
    };
    Ok(factory.shape(kind).draw(x, y))
}

fn main() {
    let stdin = io::stdin();
    let mut factory = ShapeFactory::default();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match run_command(&mut factory, &line) {
            Ok(output) => println!("{output}"),
            Err(message) => {
                eprintln!("{}", message.red());
                process::exit(0);
            }
        }
    }
}
