// Adapter pattern: a computer that charges over TypeC natively and over
// USB through an adapter.
//
// Script: a count N, then N charge types. `1` charges natively, `2`
// charges through the adapter; anything else is reported on its own
// line and processing continues.

use std::io::{self, Read};

// =============================================================================
// The incompatible interface and its adapter
// =============================================================================

trait Usb {
    fn charge_with_usb(&self) -> &'static str;
}

struct UsbAdapter;

impl Usb for UsbAdapter {
    fn charge_with_usb(&self) -> &'static str {
        "USB Adapter"
    }
}

trait TypeC {
    fn charge_with_type_c(&self) -> &'static str;
}

struct Computer {
    adapter: UsbAdapter,
}

impl Computer {
    fn new() -> Self {
        Computer {
            adapter: UsbAdapter,
        }
    }

    /// USB charging is delegated to the adapter.
    fn charge_with_usb(&self) -> &'static str {
        self.adapter.charge_with_usb()
    }
}

impl TypeC for Computer {
    fn charge_with_type_c(&self) -> &'static str {
        "TypeC"
    }
}

/// Per-request boundary: unknown charge types become one error line, and
/// the run continues with the next request.
fn charge(computer: &Computer, charge_type: &str) -> String {
    match charge_type {
        "1" => computer.charge_with_type_c().to_string(),
        "2" => computer.charge_with_usb().to_string(),
        other => format!("Error-Invalid charging type: {other}"),
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

    let computer = Computer::new();
    for _ in 0..count {
        let Some(charge_type) = tokens.next() else {
            return;
        };
        println!("{}", charge(&computer, charge_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_and_adapted_charging() {
        let computer = Computer::new();
        assert_eq!(charge(&computer, "1"), "TypeC");
        assert_eq!(charge(&computer, "2"), "USB Adapter");
    }

    #[test]
    fn unknown_types_error_without_stopping() {
        let computer = Computer::new();
        assert_eq!(charge(&computer, "3"), "Error-Invalid charging type: 3");
        assert_eq!(charge(&computer, "1"), "TypeC");
    }
}
