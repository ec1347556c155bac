// Observer pattern: students subscribe to a clock; every tick notifies
// all of them in subscription order.
//
// Script: a count N, then N student names, then a number of updates.
// Each tick advances the hour modulo 24 and every observer prints
// `<name> <hour>`.

use std::io::{self, Read};

// =============================================================================
// Observer and subject
// =============================================================================

trait Observer {
    fn update(&self, hour: u32) -> String;
}

struct Student {
    name: String,
}

impl Observer for Student {
    fn update(&self, hour: u32) -> String {
        format!("{} {}", self.name, hour)
    }
}

/// The subject owns its observers and notifies them in subscription order.
#[derive(Default)]
struct Clock {
    observers: Vec<Box<dyn Observer>>,
    hour: u32,
}

impl Clock {
    fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn notify_observers(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|observer| observer.update(self.hour))
            .collect()
    }

    fn tick(&mut self) -> Vec<String> {
        self.hour = (self.hour + 1) % 24;
        self.notify_observers()
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

    let mut clock = Clock::default();
    for _ in 0..count {
        let Some(name) = tokens.next() else { return };
        clock.add_observer(Box::new(Student {
            name: name.to_string(),
        }));
    }

    let Some(updates) = tokens.next().and_then(|t| t.parse::<u64>().ok()) else {
        return;
    };
    for _ in 0..updates {
        for line in clock.tick() {
            println!("{line}");
        }
    }
}
