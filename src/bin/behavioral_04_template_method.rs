// Template method pattern: the brewing skeleton is fixed; subtypes fill
// in (or override) individual steps.
//
// Script: one coffee type per line until end of input (`1` American,
// `2` Latte). Each order prints the full step list followed by a blank
// line; unknown types print `Invalid coffee type` and processing
// continues.

use std::io::{self, Read};

// =============================================================================
// The template
// =============================================================================

trait CoffeeMaker {
    fn name(&self) -> &'static str;

    fn grind_coffee_beans(&self) -> &'static str {
        "Grinding coffee beans"
    }

    fn brew_coffee(&self) -> &'static str {
        "Brewing coffee"
    }

    /// Hook with a default; Latte overrides it.
    fn add_condiments(&self) -> Vec<String> {
        vec!["Adding condiments".to_string()]
    }

    /// The template method: fixed order, blank line at the end.
    fn make_coffee(&self) -> Vec<String> {
        let mut steps = vec![format!("Making {}:", self.name())];
        steps.push(self.grind_coffee_beans().to_string());
        steps.push(self.brew_coffee().to_string());
        steps.extend(self.add_condiments());
        steps.push(String::new());
        steps
    }
}

// =============================================================================
// Concrete makers
// =============================================================================

struct AmericanCoffee;

impl CoffeeMaker for AmericanCoffee {
    fn name(&self) -> &'static str {
        "American Coffee"
    }
}

struct Latte;

impl CoffeeMaker for Latte {
    fn name(&self) -> &'static str {
        "Latte"
    }

    fn add_condiments(&self) -> Vec<String> {
        vec!["Adding milk".to_string(), "Adding condiments".to_string()]
    }
}

fn maker_for(coffee_type: &str) -> Option<Box<dyn CoffeeMaker>> {
    match coffee_type {
        "1" => Some(Box::new(AmericanCoffee)),
        "2" => Some(Box::new(Latte)),
        _ => None,
    }
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    for coffee_type in input.split_whitespace() {
        match maker_for(coffee_type) {
            Some(maker) => {
                for step in maker.make_coffee() {
                    println!("{step}");
                }
            }
            None => println!("Invalid coffee type"),
        }
    }
}
