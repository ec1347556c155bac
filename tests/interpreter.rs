//! End-to-end coverage of the expression evaluator through its public API.

use design_patterns::interpreter::{evaluate_line, ExprError, MalformedKind};

#[test]
fn worked_scenario() {
    assert_eq!(evaluate_line("2 + 3"), Ok(5));
    assert_eq!(evaluate_line("2 * 3"), Ok(6));
}

#[test]
fn single_number_line() {
    assert_eq!(evaluate_line("5"), Ok(5));
    assert_eq!(evaluate_line("0"), Ok(0));
}

#[test]
fn three_operand_lines_group_right_to_left() {
    // hand-computed under the right-to-left reduction, not a calculator:
    // a op1 (b op2 c)
    assert_eq!(evaluate_line("2 * 3 + 4"), Ok(14)); // 2 * 7, not 10
    assert_eq!(evaluate_line("2 + 3 * 4"), Ok(14)); // 2 + 12
    assert_eq!(evaluate_line("5 * 2 * 3"), Ok(30));
    assert_eq!(evaluate_line("10 + 0 * 9"), Ok(10));
}

#[test]
fn deeper_chains_keep_grouping_from_the_right() {
    // 1 + (2 + (3 + 4))
    assert_eq!(evaluate_line("1 + 2 + 3 + 4"), Ok(10));
    // 2 * (3 * (4 + 5))
    assert_eq!(evaluate_line("2 * 3 * 4 + 5"), Ok(54));
}

#[test]
fn whitespace_between_tokens_is_flexible() {
    assert_eq!(evaluate_line("  2   +\t3 "), Ok(5));
}

#[test]
fn operator_trailing_input_is_malformed() {
    assert_eq!(
        evaluate_line("3 4 +"),
        Err(ExprError::Malformed(MalformedKind::OperatorAsOperand))
    );
}

#[test]
fn unknown_tokens_are_reported_verbatim() {
    let err = evaluate_line("3 x +").unwrap_err();
    assert_eq!(err.to_string(), "Invalid element in expression: x");
}

#[test]
fn bare_operator_is_a_distinct_contract_violation() {
    assert_eq!(
        evaluate_line("*"),
        Err(ExprError::Malformed(MalformedKind::BareOperator))
    );
}

#[test]
fn errors_are_values_and_do_not_poison_later_lines() {
    assert!(evaluate_line("1 +").is_err());
    assert_eq!(evaluate_line("1 + 1"), Ok(2));
}

#[test]
fn evaluating_twice_gives_the_same_answer() {
    for line in ["9", "2 + 3", "7 * 6 + 1"] {
        assert_eq!(evaluate_line(line), evaluate_line(line));
    }
}
