// Strategy pattern: interchangeable discount algorithms behind one
// interface, chosen per purchase at runtime.
//
// Script: a count N, then N lines of `price strategy`. Strategy 1 takes
// 10% off (rounded); strategy 2 applies a tiered full-reduction. Results
// are buffered and printed after the whole script, one per line; an
// unknown strategy prints `Unknown strategy type` and aborts.

use std::io::{self, Read};
use std::process;

use itertools::Itertools;

// =============================================================================
// Strategies
// =============================================================================

trait DiscountStrategy {
    fn apply_discount(&self, original_price: i64) -> i64;
}

/// 10% off, rounded to the nearest integer.
struct NineDiscount;

impl DiscountStrategy for NineDiscount {
    fn apply_discount(&self, original_price: i64) -> i64 {
        (original_price as f64 * 0.9).round() as i64
    }
}

/// Spend-threshold reductions, highest tier first.
struct TieredDiscount;

const TIERS: [(i64, i64); 4] = [(300, 40), (200, 25), (150, 15), (100, 5)];

impl DiscountStrategy for TieredDiscount {
    fn apply_discount(&self, original_price: i64) -> i64 {
        for (threshold, reduction) in TIERS {
            if original_price >= threshold {
                return original_price - reduction;
            }
        }
        original_price
    }
}

fn strategy_for(choice: &str) -> Option<Box<dyn DiscountStrategy>> {
    match choice {
        "1" => Some(Box::new(NineDiscount)),
        "2" => Some(Box::new(TieredDiscount)),
        _ => None,
    }
}

// =============================================================================
// Context
// =============================================================================

struct DiscountContext {
    strategy: Box<dyn DiscountStrategy>,
}

impl DiscountContext {
    fn apply_discount(&self, original_price: i64) -> i64 {
        self.strategy.apply_discount(original_price)
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

    let mut results = Vec::with_capacity(count);
    for _ in 0..count {
        let (Some(price), Some(choice)) = (tokens.next(), tokens.next()) else {
            break;
        };
        let Ok(price) = price.parse::<i64>() else {
            break;
        };
        let Some(strategy) = strategy_for(choice) else {
            println!("Unknown strategy type");
            process::exit(1);
        };
        let context = DiscountContext { strategy };
        results.push(context.apply_discount(price));
    }

    if !results.is_empty() {
        println!("{}", results.iter().join("\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_discount_rounds_to_nearest() {
        assert_eq!(NineDiscount.apply_discount(100), 90);
        assert_eq!(NineDiscount.apply_discount(95), 86); // 85.5 rounds up
        assert_eq!(NineDiscount.apply_discount(94), 85); // 84.6 rounds up
    }

    #[test]
    fn tiered_discount_picks_the_highest_tier_reached() {
        assert_eq!(TieredDiscount.apply_discount(99), 99);
        assert_eq!(TieredDiscount.apply_discount(100), 95);
        assert_eq!(TieredDiscount.apply_discount(150), 135);
        assert_eq!(TieredDiscount.apply_discount(200), 175);
        assert_eq!(TieredDiscount.apply_discount(300), 260);
        assert_eq!(TieredDiscount.apply_discount(1000), 960);
    }

    #[test]
    fn the_context_delegates_to_its_strategy() {
        let context = DiscountContext {
            strategy: strategy_for("1").unwrap(),
        };
        assert_eq!(context.apply_discount(200), 180);
    }

    #[test]
    fn unknown_strategies_do_not_resolve() {
        assert!(strategy_for("3").is_none());
    }
}
