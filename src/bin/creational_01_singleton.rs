// Singleton pattern: one process-wide shopping cart.
//
// Script: `item quantity` pairs until end of input. Items keep their
// first-insertion order and quantities accumulate; the final cart is
// printed after the script ends.

use std::io::{self, Read};
use std::sync::Mutex;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

// =============================================================================
// Cart state
// =============================================================================

#[derive(Default)]
struct CartManager {
    /// First-insertion order of item names.
    order: Vec<String>,
    quantities: FxHashMap<String, i64>,
}

impl CartManager {
    fn add_to_cart(&mut self, item: &str, quantity: i64) {
        if !self.quantities.contains_key(item) {
            self.order.push(item.to_string());
        }
        *self.quantities.entry(item.to_string()).or_insert(0) += quantity;
    }

    fn show(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|item| format!("{} {}", item, self.quantities[item]))
            .collect()
    }
}

// =============================================================================
// The singleton instance
// =============================================================================

lazy_static! {
    /// The only cart in the process. Every access goes through this cell,
    /// so separate call sites always observe the same contents.
    static ref CART: Mutex<CartManager> = Mutex::new(CartManager::default());
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    let mut tokens = input.split_whitespace();
    let mut cart = CART.lock().expect("cart lock poisoned");
    while let (Some(item), Some(quantity)) = (tokens.next(), tokens.next()) {
        let Ok(quantity) = quantity.parse::<i64>() else {
            break;
        };
        cart.add_to_cart(item, quantity);
    }

    for line in cart.show() {
        println!("{line}");
    }
}
