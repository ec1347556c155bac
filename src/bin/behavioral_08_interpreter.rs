// Interpreter pattern: a grammar of integer literals and two operators,
// interpreted over an expression tree built by stack reduction.
//
// One expression per line on stdin, terminated by an empty line or EOF.
// Valid lines print their integer result; invalid lines print a single
// Error- line and processing continues with the next line.

use std::io::{self, BufRead};

use design_patterns::interpreter::evaluate_line;

/// The per-line recovery boundary: every outcome becomes one output line.
fn respond(line: &str) -> String {
    match evaluate_line(line) {
        Ok(value) => value.to_string(),
        Err(err) => format!("Error-{err}"),
    }
}

fn main() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.is_empty() {
            break;
        }
        println!("{}", respond(&line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lines_print_the_result() {
        assert_eq!(respond("2 + 3"), "5");
        assert_eq!(respond("2 * 3"), "6");
    }

    #[test]
    fn invalid_lines_print_an_error_and_do_not_abort() {
        assert_eq!(respond("3 x +"), "Error-Invalid element in expression: x");
        // the next line still evaluates normally
        assert_eq!(respond("7"), "7");
    }

    #[test]
    fn malformed_lines_name_the_stack_violation() {
        assert_eq!(
            respond("3 4 +"),
            "Error-Malformed expression: operator found where an operand was expected"
        );
    }
}
