// Prototype pattern: new objects are produced by cloning an existing one
// instead of being constructed from scratch.
//
// Script: `color width height`, then a clone count N. Each clone prints
// its details on one line.

use std::io::{self, Read};

// =============================================================================
// Prototype interface and concrete prototype
// =============================================================================

trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn details(&self) -> String;
}

#[derive(Clone)]
struct Rectangle {
    color: String,
    width: i64,
    height: i64,
}

impl Prototype for Rectangle {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn details(&self) -> String {
        format!(
            "Color: {}, Width: {}, Height: {}",
            self.color, self.width, self.height
        )
    }
}

fn main() {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        return;
    }

    let mut tokens = input.split_whitespace();
    let (Some(color), Some(width), Some(height), Some(count)) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return;
    };
    let (Ok(width), Ok(height), Ok(count)) =
        (width.parse::<i64>(), height.parse::<i64>(), count.parse::<usize>())
    else {
        return;
    };

    let prototype = Rectangle {
        color: color.to_string(),
        width,
        height,
    };
    for _ in 0..count {
        let clone = prototype.clone_box();
        println!("{}", clone.details());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rectangle {
        Rectangle {
            color: "red".to_string(),
            width: 3,
            height: 4,
        }
    }

    #[test]
    fn clone_reports_the_same_details_as_the_prototype() {
        let prototype = sample();
        let clone = prototype.clone_box();
        assert_eq!(clone.details(), prototype.details());
    }

    #[test]
    fn details_format() {
        assert_eq!(sample().details(), "Color: red, Width: 3, Height: 4");
    }
}
