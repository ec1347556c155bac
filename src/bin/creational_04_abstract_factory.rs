// Abstract factory pattern: each factory creates a whole family of
// related products (a chair and a sofa in a matching style).
//
// Script: a count N, then N style names (`modern` or `classical`); each
// order prints the chair line then the sofa line.

use std::io::{self, Read};
use std::process;

use colored::Colorize;

// =============================================================================
// Product families
// =============================================================================

trait Chair {
    fn show(&self) -> &'static str;
}

trait Sofa {
    fn show(&self) -> &'static str;
}

struct ModernChair;
struct ClassicalChair;
struct ModernSofa;
struct ClassicalSofa;

impl Chair for ModernChair {
    fn show(&self) -> &'static str {
        "modern chair"
    }
}

impl Chair for ClassicalChair {
    fn show(&self) -> &'static str {
        "classical chair"
    }
}

impl Sofa for ModernSofa {
    fn show(&self) -> &'static str {
        "modern sofa"
    }
}

impl Sofa for ClassicalSofa {
    fn show(&self) -> &'static str {
        "classical sofa"
    }
}

// =============================================================================
// Factories
// =============================================================================

trait Factory: std::fmt::Debug {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
}

#[derive(Debug)]
struct ModernFactory;
#[derive(Debug)]
struct ClassicalFactory;

impl Factory for ModernFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

impl Factory for ClassicalFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ClassicalChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ClassicalSofa)
    }
}

fn factory_for(style: &str) -> Result<Box<dyn Factory>, String> {
    match style {
        "modern" => Ok(Box::new(ModernFactory)),
        "classical" => Ok(Box::new(ClassicalFactory)),
        _ => Err(format!("Invalid furniture type: {style}")),
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
        let Some(style) = tokens.next() else {
            return;
        };
        let factory = match factory_for(style) {
            Ok(factory) => factory,
            Err(message) => {
                eprintln!("{}", message.red());
                process::exit(1);
            }
        };
        println!("{}", factory.create_chair().show());
        println!("{}", factory.create_sofa().show());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_create_matching_families() {
        let factory = factory_for("modern").unwrap();
        assert_eq!(factory.create_chair().show(), "modern chair");
        assert_eq!(factory.create_sofa().show(), "modern sofa");

        let factory = factory_for("classical").unwrap();
        assert_eq!(factory.create_chair().show(), "classical chair");
        assert_eq!(factory.create_sofa().show(), "classical sofa");
    }

    #[test]
    fn unknown_styles_are_rejected() {
        assert_eq!(
            factory_for("baroque").unwrap_err(),
            "Invalid furniture type: baroque"
        );
    }
}
