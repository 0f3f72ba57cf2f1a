use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use meetslot_engine::{aggregate, invert, ClockTime, Event, Mode, Participant, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(ClockTime::hm(start, 0), ClockTime::hm(end, 0))
}

/// Four weeks of dates and forty participants with mixed modes.
fn large_event() -> Event {
    let first = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    let dates: Vec<NaiveDate> = first.iter_days().take(28).collect();

    let participants = (0..40u32)
        .map(|i| {
            let mode = if i % 3 == 0 { Mode::Blacklist } else { Mode::Whitelist };
            dates.iter().enumerate().fold(
                Participant::new(format!("p{i}"), format!("Person {i}"), mode),
                |p, (n, &date)| {
                    let start = 8 + ((i as usize + n) % 6) as u32;
                    p.with_day_ranges(date, vec![range(start, start + 3), range(start + 5, start + 7)])
                },
            )
        })
        .collect();

    Event {
        participants,
        ..Event::new("bench", "Bench", "", &dates).unwrap()
    }
}

fn aggregation(c: &mut Criterion) {
    let event = large_event();
    c.bench_function("aggregate_28_days_40_participants", |b| {
        b.iter(|| black_box(aggregate(black_box(&event))));
    });

    let ranges = vec![range(9, 11), range(10, 12), range(14, 15), range(17, 20)];
    c.bench_function("invert_four_ranges", |b| {
        b.iter(|| black_box(invert(black_box(&ranges))));
    });
}

criterion_group!(benches, aggregation);
criterion_main!(benches);
