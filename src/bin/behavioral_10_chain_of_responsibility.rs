// Chain-of-responsibility pattern: a leave request climbs the approval
// chain until someone can rule on it.
//
// Script: a count N, then N lines of `name days`. The supervisor approves
// up to 3 days, the manager up to 7, the director up to 10; anything
// longer is denied by the director.

use std::io::{self, Read};

// =============================================================================
// Handlers
// =============================================================================

trait Handler {
    fn request(&self, name: &str, days: i64) -> String;
}

struct Supervisor {
    next: Option<Box<dyn Handler>>,
}

const MAX_SUPERVISOR_HANDLE_DAYS: i64 = 3;

impl Handler for Supervisor {
    fn request(&self, name: &str, days: i64) -> String {
        if days <= MAX_SUPERVISOR_HANDLE_DAYS {
            format!("{name} Approved by Supervisor.")
        } else if let Some(next) = &self.next {
            next.request(name, days)
        } else {
            format!("{name} Denied by Supervisor.")
        }
    }
}

struct Manager {
    next: Option<Box<dyn Handler>>,
}

const MAX_MANAGER_HANDLE_DAYS: i64 = 7;

impl Handler for Manager {
    fn request(&self, name: &str, days: i64) -> String {
        if days <= MAX_MANAGER_HANDLE_DAYS {
            format!("{name} Approved by Manager.")
        } else if let Some(next) = &self.next {
            next.request(name, days)
        } else {
            format!("{name} Denied by Manager.")
        }
    }
}

/// End of the chain: the director rules either way.
struct Director;

const MAX_DIRECTOR_HANDLE_DAYS: i64 = 10;

impl Handler for Director {
    fn request(&self, name: &str, days: i64) -> String {
        if days <= MAX_DIRECTOR_HANDLE_DAYS {
            format!("{name} Approved by Director.")
        } else {
            format!("{name} Denied by Director.")
        }
    }
}

fn approval_chain() -> Box<dyn Handler> {
    Box::new(Supervisor {
        next: Some(Box::new(Manager {
            next: Some(Box::new(Director)),
        })),
    })
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

    let chain = approval_chain();
    for _ in 0..count {
        let (Some(name), Some(days)) = (tokens.next(), tokens.next()) else {
            return;
        };
        let Ok(days) = days.parse::<i64>() else {
            return;
        };
        println!("{}", chain.request(name, days));
    }
}
