// Command pattern: an order is wrapped as a command object and handed to
// an invoker that knows nothing about cooking.
//
// Script: a count N, then N dish names; each executed order prints
// `<dish> is ready!`.

use std::io::{self, Read};

// =============================================================================
// Receiver
// =============================================================================

struct FoodMaker;

impl FoodMaker {
    fn make_food(&self, dish: &str) -> String {
        format!("{dish} is ready!")
    }
}

// =============================================================================
// Command and invoker
// =============================================================================

trait Command {
    fn execute(&self) -> String;
}

struct OrderFood<'a> {
    dish: String,
    receiver: &'a FoodMaker,
}

impl Command for OrderFood<'_> {
    fn execute(&self) -> String {
        self.receiver.make_food(&self.dish)
    }
}

/// The invoker only ever sees the command interface.
#[derive(Default)]
struct OrderMachine<'a> {
    command: Option<Box<dyn Command + 'a>>,
}

impl<'a> OrderMachine<'a> {
    fn set_command(&mut self, command: Box<dyn Command + 'a>) {
        self.command = Some(command);
    }

    fn execute_order(&self) -> Option<String> {
        self.command.as_ref().map(|command| command.execute())
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

    let food_maker = FoodMaker;
    for _ in 0..count {
        let Some(dish) = tokens.next() else { return };
        let mut machine = OrderMachine::default();
        machine.set_command(Box::new(OrderFood {
            dish: dish.to_string(),
            receiver: &food_maker,
        }));
        if let Some(line) = machine.execute_order() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executing_an_order_reaches_the_receiver() {
        let food_maker = FoodMaker;
        let mut machine = OrderMachine::default();
        machine.set_command(Box::new(OrderFood {
            dish: "dumplings".to_string(),
            receiver: &food_maker,
        }));
        assert_eq!(machine.execute_order().unwrap(), "dumplings is ready!");
    }

    #[test]
    fn an_idle_invoker_does_nothing() {
        let machine = OrderMachine::default();
        assert!(machine.execute_order().is_none());
    }
}
