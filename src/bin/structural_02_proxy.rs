// Proxy pattern: the proxy screens requests and only forwards the ones
// the real subject should see.
//
// Script: a count N, then N integer house areas. Requests above 100
// square meters reach the real buyer (`YES`); the proxy rejects the rest
// itself (`NO`).

use std::io::{self, Read};

// =============================================================================
// Subject interface, real subject, proxy
// =============================================================================

trait HousePurchase {
    fn request_house(&self, area: i64) -> &'static str;
}

struct HouseBuyer;

impl HousePurchase for HouseBuyer {
    fn request_house(&self, _area: i64) -> &'static str {
        "YES"
    }
}

struct Proxy {
    buyer: HouseBuyer,
}

impl Proxy {
    fn new() -> Self {
        Proxy { buyer: HouseBuyer }
    }
}

impl HousePurchase for Proxy {
    fn request_house(&self, area: i64) -> &'static str {
        if area > 100 {
            self.buyer.request_house(area)
        } else {
            "NO"
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

    let proxy = Proxy::new();
    for _ in 0..count {
        let Some(area) = tokens.next().and_then(|t| t.parse::<i64>().ok()) else {
            return;
        };
        println!("{}", proxy.request_house(area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_requests_reach_the_buyer() {
        assert_eq!(Proxy::new().request_house(101), "YES");
        assert_eq!(Proxy::new().request_house(250), "YES");
    }

    #[test]
    fn small_requests_are_screened_out() {
        assert_eq!(Proxy::new().request_house(100), "NO");
        assert_eq!(Proxy::new().request_house(0), "NO");
    }

    #[test]
    fn the_real_buyer_always_says_yes() {
        assert_eq!(HouseBuyer.request_house(1), "YES");
    }
}
