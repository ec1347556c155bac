// State pattern: a desk light whose behavior depends on which state
// object currently backs it.
//
// Script: a count N, then N commands (`ON`, `OFF`, `BLINK`). Each valid
// command switches the state and prints its report; anything else prints
// `Invalid command:<cmd>`.

use std::io::{self, Read};

// =============================================================================
// States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LightState {
    On,
    Off,
    Blink,
}

impl LightState {
    fn parse(command: &str) -> Option<Self> {
        match command {
            "ON" => Some(LightState::On),
            "OFF" => Some(LightState::Off),
            "BLINK" => Some(LightState::Blink),
            _ => None,
        }
    }

    fn report(self) -> &'static str {
        match self {
            LightState::On => "Light is ON",
            LightState::Off => "Light is OFF",
            LightState::Blink => "Light is Blinking",
        }
    }
}

// =============================================================================
// Context
// =============================================================================

struct Light {
    state: LightState,
}

impl Light {
    /// Starts switched off.
    fn new() -> Self {
        Light {
            state: LightState::Off,
        }
    }

    fn operate(&mut self, command: &str) -> String {
        match LightState::parse(command) {
            Some(state) => {
                self.state = state;
                self.state.report().to_string()
            }
            // no space after the colon
            None => format!("Invalid command:{command}"),
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

    let mut light = Light::new();
    for _ in 0..count {
        let Some(command) = tokens.next() else { return };
        println!("{}", light.operate(command));
    }
}
