// Builder pattern: a director drives the build steps, the concrete
// builders decide what each step produces.
//
// Script: a count N, then N bike types (`mountain` or `road`); each
// finished bike prints `frame tires` on one line.

use std::fmt;
use std::io::{self, Read};

// =============================================================================
// Product
// =============================================================================

#[derive(Default, Clone)]
struct Bike {
    frame: String,
    tires: String,
}

impl fmt::Display for Bike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.frame, self.tires)
    }
}

// =============================================================================
// Builders and director
// =============================================================================

trait BikeBuilder {
    fn build(&mut self);
    fn result(&self) -> Bike;
}

#[derive(Default)]
struct MountainBuilder {
    bike: Bike,
}

impl BikeBuilder for MountainBuilder {
    fn build(&mut self) {
        self.bike.frame = "Aluminum Frame".to_string();
        self.bike.tires = "Knobby Tires".to_string();
    }

    fn result(&self) -> Bike {
        self.bike.clone()
    }
}

#[derive(Default)]
struct RoadBuilder {
    bike: Bike,
}

impl BikeBuilder for RoadBuilder {
    fn build(&mut self) {
        self.bike.frame = "Carbon Frame".to_string();
        self.bike.tires = "Slim Tires".to_string();
    }

    fn result(&self) -> Bike {
        self.bike.clone()
    }
}

struct Director;

impl Director {
    fn construct(builder: &mut dyn BikeBuilder) -> Bike {
        builder.build();
        builder.result()
    }
}

fn builder_for(kind: &str) -> Box<dyn BikeBuilder> {
    if kind == "mountain" {
        Box::new(MountainBuilder::default())
    } else {
        Box::new(RoadBuilder::default())
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

    for _ in 0..count {
        let Some(kind) = tokens.next() else {
            return;
        };
        let mut builder = builder_for(kind);
        let bike = Director::construct(builder.as_mut());
        println!("{bike}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mountain_builder_assembles_a_mountain_bike() {
        let mut builder = MountainBuilder::default();
        let bike = Director::construct(&mut builder);
        assert_eq!(bike.to_string(), "Aluminum Frame Knobby Tires");
    }

    #[test]
    fn road_builder_assembles_a_road_bike() {
        let mut builder = RoadBuilder::default();
        let bike = Director::construct(&mut builder);
        assert_eq!(bike.to_string(), "Carbon Frame Slim Tires");
    }

    #[test]
    fn anything_but_mountain_builds_a_road_bike() {
        let mut builder = builder_for("gravel");
        let bike = Director::construct(builder.as_mut());
        assert_eq!(bike.to_string(), "Carbon Frame Slim Tires");
    }
}
