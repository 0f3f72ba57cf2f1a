//! A small ready-made event for demos and tests.

use chrono::{Days, NaiveDate};

use crate::clock::ClockTime;
use crate::model::{Availability, Event, Mode, Participant, Period};
use crate::range::TimeRange;

fn at(hour: u32) -> Option<ClockTime> {
    ClockTime::hm(hour, 0)
}

fn day(date: NaiveDate, ranges: &[TimeRange], memo: &str) -> Availability {
    Availability {
        date,
        time_ranges: ranges.to_vec(),
        memo: memo.to_string(),
    }
}

/// Three non-contiguous candidate dates (`base` + 1, 3 and 7 days) and three
/// participants, two answering in whitelist mode and one in blacklist mode.
pub fn sample_event(base: NaiveDate) -> Event {
    let offset = |n| base.checked_add_days(Days::new(n)).unwrap_or(base);
    let (d1, d2, d3) = (offset(1), offset(3), offset(7));

    let organizer = Participant {
        availabilities: vec![
            day(d1, &[TimeRange::new(at(10), at(18))], ""),
            day(d2, &[TimeRange::new(at(13), None)], "Free in the afternoon"),
        ],
        ..Participant::new("p1", "Tanaka (organizer)", Mode::Whitelist)
    };

    let busy_mornings = Participant {
        availabilities: vec![day(
            d1,
            &[TimeRange::new(at(9), at(12))],
            "Mornings are out",
        )],
        ..Participant::new("p2", "Suzuki", Mode::Blacklist)
    };

    let flexible = Participant {
        availabilities: vec![
            day(d1, &[TimeRange::new(at(15), None)], "After 15:00 works"),
            day(d2, &[TimeRange::new(None, at(12))], "Mornings only"),
            day(d3, &[TimeRange::all_day()], "Any time"),
        ],
        ..Participant::new("p3", "Sato", Mode::Whitelist)
    };

    Event {
        id: "sample".to_string(),
        title: "Project sync & dinner".to_string(),
        description: "Picking a date for the next sync and the dinner after it.".to_string(),
        candidate_dates: vec![d1, d2, d3],
        period: Period { start: d1, end: d3 },
        participants: vec![organizer, busy_mornings, flexible],
    }
}
