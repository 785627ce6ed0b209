// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project showcase with a controlled carousel.
//!
//! The host owns the slide index. The carousel reports requests through
//! `IndexChanged`, the host adopts them with `SetControlledIndex`, and a
//! `Showcase` keeps the detail panel in sync. Indicator clicks and leaving
//! and re-entering the view are simulated as well.
//!
//! Run:
//! - `cargo run -p understory_demos --example showcase_panel`

use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, Slide};
use understory_demos::run_to_rest;
use understory_showcase::{Action, Showcase, ShowcaseEntry};

fn print_panel(showcase: &Showcase<&str>, carousel: &Carousel<&str>) {
    let dots: String = carousel
        .indicators()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    let entry = showcase.current();
    println!("  [{dots}] {}", entry.details);
    for action in &entry.actions {
        println!("    -> {} ({})", action.label, action.href);
    }
}

fn main() {
    let config = CarouselConfig::default().with_controlled_index(0);
    let slides = ["p1.png", "p2.png", "p3.png"].map(Slide::new);
    let Ok(mut carousel) = Carousel::new(slides, config) else {
        eprintln!("cannot build carousel");
        return;
    };
    let entries = [
        ShowcaseEntry::new("A weather dashboard pulling live forecasts.")
            .with_action(Action::new("Live", "https://example.com/weather"))
            .with_action(Action::new("Code", "https://example.com/weather.git")),
        ShowcaseEntry::new("A recipe finder with ingredient search.")
            .with_action(Action::new("Code", "https://example.com/recipes.git")),
        ShowcaseEntry::new("A personal portfolio site."),
    ];
    let mut showcase = match Showcase::for_carousel(&carousel, entries) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    println!("start");
    print_panel(&showcase, &carousel);

    // The host's source of truth for the index.
    let mut host_index = 0;

    let mut deliver = |events: &[CarouselEvent],
                       carousel: &mut Carousel<&str>,
                       showcase: &mut Showcase<&str>| {
        for event in events {
            showcase.apply(event);
            if let CarouselEvent::IndexChanged(i) = *event {
                host_index = i;
                carousel.set_controlled_index(Some(host_index));
            }
        }
    };

    println!("\nswipe left");
    carousel.drag_start();
    carousel.drag_move(-120.0);
    let events = carousel.drag_end(-250.0);
    deliver(&events, &mut carousel, &mut showcase);
    run_to_rest(&mut carousel);
    print_panel(&showcase, &carousel);

    println!("\nclick the third dot");
    let events = carousel.jump_to(2);
    deliver(&events, &mut carousel, &mut showcase);
    run_to_rest(&mut carousel);
    print_panel(&showcase, &carousel);

    println!("\nleave and come back to the projects view");
    showcase.reset();
    host_index = 0;
    carousel.set_controlled_index(Some(host_index));
    run_to_rest(&mut carousel);
    print_panel(&showcase, &carousel);

    println!("\nhost index = {host_index}, carousel: {:?}", carousel.debug_info());
}
