// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel drag and flick basics.
//!
//! Replays a few synthetic pointer gestures against a headless carousel and
//! prints the release decision, the settle animation and the emitted events.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_flick`

use kurbo::Point;
use understory_carousel::{
    Carousel, CarouselConfig, PointerDriver, PointerOutcome, Slide, TraceLog,
};
use understory_demos::run_to_rest;

/// A gesture: pointer samples as `(x, y, time_ms)`.
struct Gesture {
    name: &'static str,
    samples: &'static [(f64, f64, u64)],
}

const GESTURES: &[Gesture] = &[
    Gesture {
        name: "short drag left",
        samples: &[(400.0, 200.0, 0), (390.0, 200.0, 40), (380.0, 201.0, 200)],
    },
    Gesture {
        name: "fast flick left",
        samples: &[(400.0, 200.0, 0), (390.0, 200.0, 8), (370.0, 201.0, 24)],
    },
    Gesture {
        name: "fast flick right",
        samples: &[(300.0, 200.0, 0), (310.0, 200.0, 8), (330.0, 201.0, 24)],
    },
    Gesture {
        name: "vertical scroll",
        samples: &[(300.0, 100.0, 0), (302.0, 140.0, 16), (303.0, 220.0, 32)],
    },
];

fn main() {
    let slides = [
        Slide::titled("p1.png", "Weather dashboard"),
        Slide::titled("p2.png", "Recipe finder"),
        Slide::new("p3.png"),
    ];
    let mut carousel = match Carousel::new(slides, CarouselConfig::default()) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("cannot build carousel: {err}");
            return;
        }
    };
    println!(
        "{} slides, step = {}",
        carousel.slide_count(),
        carousel.layout().step()
    );

    for gesture in GESTURES {
        println!("\n{} (index {})", gesture.name, carousel.index());
        let mut driver = PointerDriver::default();
        let mut trace = TraceLog::new();

        let [first, rest @ ..] = gesture.samples else {
            continue;
        };
        driver.pointer_down(Point::new(first.0, first.1), first.2);
        let mut last_time = first.2;
        for &(x, y, t) in rest {
            let outcome =
                driver.pointer_move_with_trace(&mut carousel, Point::new(x, y), t, &mut trace);
            if outcome == PointerOutcome::PassThrough {
                println!("  pointer passed through to the page");
            }
            last_time = t;
        }
        let mut events = driver
            .pointer_up_with_trace(&mut carousel, last_time, &mut trace)
            .into_vec();

        if let Some(decision) = trace.last_snap() {
            println!(
                "  release: delta = {:.1}, velocity = {:.0}, {:?} -> {}",
                decision.delta, decision.velocity, decision.reason, decision.next
            );
        }
        let (settle_events, _) = run_to_rest(&mut carousel);
        events.extend(settle_events);
        println!("  events: {events:?}");

        let labels: Vec<_> = carousel
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| s.alt_text(i))
            .collect();
        println!("  showing: {}", labels[carousel.normalized_index()]);
    }
}
