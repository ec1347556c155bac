// Mediator pattern: chat users never talk to each other directly; the
// chat room routes every message.
//
// Script: a count N, then N user names, then `sender message` pairs until
// end of input. Each delivery prints `<user> received: <message>` for
// every user except the sender, in lexicographic user order.

use std::collections::BTreeMap;
use std::io::{self, Read};

// =============================================================================
// Colleagues
// =============================================================================

struct ChatUser {
    name: String,
    received: Vec<String>,
}

impl ChatUser {
    fn new(name: &str) -> Self {
        ChatUser {
            name: name.to_string(),
            received: Vec::new(),
        }
    }

    fn receive(&mut self, message: &str) -> String {
        let line = format!("{} received: {}", self.name, message);
        self.received.push(line.clone());
        line
    }
}

// =============================================================================
// Mediator
// =============================================================================

/// The room owns every user; BTreeMap keeps delivery in name order.
#[derive(Default)]
struct ChatRoom {
    users: BTreeMap<String, ChatUser>,
}

impl ChatRoom {
    fn add_user(&mut self, name: &str) {
        self.users.insert(name.to_string(), ChatUser::new(name));
    }

    /// Routes one message; unknown senders deliver nothing.
    fn send_message(&mut self, sender: &str, message: &str) -> Vec<String> {
        if !self.users.contains_key(sender) {
            return Vec::new();
        }
        self.users
            .iter_mut()
            .filter(|(name, _)| name.as_str() != sender)
            .map(|(_, user)| user.receive(message))
            .collect()
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

    let mut room = ChatRoom::default();
    for _ in 0..count {
        let Some(name) = tokens.next() else { return };
        room.add_user(name);
    }

    while let (Some(sender), Some(message)) = (tokens.next(), tokens.next()) {
        for line in room.send_message(sender, message) {
            println!("{line}");
        }
    }
}
