// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use std::time::Duration;
use understory_carousel::{
    Carousel, CarouselConfig, PointerDriver, Slide, SnapPolicy, decide_snap,
};
use understory_gesture::velocity::VelocityTracker;
use understory_spring::{SpringAnimation, SpringParams, SpringStatus};
use understory_track::TrackLayout;

const FRAME: Duration = Duration::from_micros(16_667);

fn bench_spring_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring/settle");

    // Frame length matters because long frames are split into sub-steps.
    for frame_ms in [4u64, 16, 33, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(frame_ms),
            &Duration::from_millis(frame_ms),
            |b, &dt| {
                b.iter_batched(
                    || SpringAnimation::new(0.0, -624.0, -1_500.0, SpringParams::default()),
                    |mut anim| {
                        while anim.step(dt) == SpringStatus::Running {}
                        black_box(anim.value());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_decide_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/decide");

    for slides in [3usize, 64, 4_096] {
        let Ok(layout) = TrackLayout::new(Size::new(640.0, 380.0), 16.0, 16.0, slides) else {
            continue;
        };
        let policy = SnapPolicy::default();
        let samples: Vec<(usize, f64, f64)> = (0..1_024)
            .map(|i| {
                let current = i % slides;
                let drift = ((i * 37) % 200) as f64 - 100.0;
                let velocity = ((i * 91) % 1_600) as f64 - 800.0;
                (current, layout.resting_offset(current) + drift, velocity)
            })
            .collect();
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(slides), &samples, |b, samples| {
            b.iter(|| {
                for &(current, offset, velocity) in samples {
                    black_box(decide_snap(&layout, current, offset, velocity, &policy));
                }
            });
        });
    }

    group.finish();
}

fn bench_velocity_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/velocity");

    // Pointer samples at 120 Hz; only the last 100 ms count.
    for len in [8usize, 120, 1_200] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut tracker = VelocityTracker::new();
                for i in 0..len {
                    let t = i as u64 * 8;
                    tracker.push(t, -(i as f64) * 3.0);
                }
                black_box(tracker.velocity(len as u64 * 8));
            });
        });
    }

    group.finish();
}

fn bench_swipe_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/swipe_replay");
    group.sample_size(30);

    // Full pointer swipe followed by the settle, per slide count.
    for slides in [3usize, 32, 512] {
        let config = CarouselConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(slides), &slides, |b, &slides| {
            b.iter_batched(
                || {
                    let carousel =
                        Carousel::new((0..slides).map(Slide::new), config).unwrap();
                    (carousel, PointerDriver::default())
                },
                |(mut carousel, mut driver)| {
                    driver.pointer_down(Point::new(400.0, 200.0), 0);
                    for step in 1..=12u32 {
                        let x = 400.0 - f64::from(step) * 6.0;
                        driver.pointer_move(&mut carousel, Point::new(x, 200.0), u64::from(step) * 8);
                    }
                    black_box(driver.pointer_up(&mut carousel, 96));
                    while carousel.is_animating() {
                        black_box(carousel.tick(FRAME));
                    }
                    black_box(carousel.offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_spring_settle,
    bench_decide_snap,
    bench_velocity_tracker,
    bench_swipe_replay
);
criterion_main!(benches);
