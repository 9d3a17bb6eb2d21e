// Mock source for the event request collection.
//
// Purpose
// - Seed the catalog at startup. There is no backing store; in-memory data only for now.
//
// Responsibilities
// - Always produce `count` well formed records with ids `event-1..=event-{count}`.
// - Randomise names, clients, venues, dates and status from fixed pools.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::modules::event_requests::core::event_request::{EventRequest, EventStatus};

pub const DEFAULT_MOCK_EVENT_COUNT: usize = 50;

const MOCK_YEAR: i32 = 2024;

const EVENT_NAMES: [&str; 10] = [
    "Annual Tech Conference",
    "Product Launch Event",
    "Corporate Training",
    "Marketing Summit",
    "Team Building Workshop",
    "Client Presentation",
    "Board Meeting",
    "Quarterly Review",
    "Innovation Workshop",
    "Sales Conference",
];

const CLIENT_NAMES: [&str; 10] = [
    "Muhammad Asad",
    "Sarah Johnson",
    "David Chen",
    "Emily Rodriguez",
    "Michael Brown",
    "Lisa Wang",
    "James Wilson",
    "Anna Martinez",
    "Robert Taylor",
    "Jennifer Lee",
];

const VENUES: [&str; 10] = [
    "Grand Convention Center",
    "Tech Hub Auditorium",
    "Business Plaza",
    "Innovation Center",
    "Corporate Tower",
    "Conference Hall A",
    "Meeting Center B",
    "Executive Boardroom",
    "Training Facility",
    "Event Space Downtown",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// US short date without padding, e.g. `3/7/2024`.
fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn generate_mock_event_requests<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Vec<EventRequest> {
    (1..=count)
        .map(|i| {
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            let start = NaiveDate::from_ymd_opt(MOCK_YEAR, month, day)
                .expect("day 1..=28 is valid in every month");
            let end = start + Duration::days(rng.gen_range(1..=5));

            EventRequest {
                id: format!("event-{i}"),
                event_name: pick(rng, &EVENT_NAMES).to_string(),
                event_start: display_date(start),
                event_end: display_date(end),
                client_name: pick(rng, &CLIENT_NAMES).to_string(),
                contact_info: format!("+1 234 567 {:04}", 7890 + i),
                venue: pick(rng, &VENUES).to_string(),
                status: EventStatus::ALL[rng.gen_range(0..EventStatus::ALL.len())],
            }
        })
        .collect()
}
