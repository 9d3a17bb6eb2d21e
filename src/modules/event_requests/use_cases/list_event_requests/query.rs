// Pure filter and paginate over the request collection.
//
// Responsibilities
// - Keep matches in their original relative order.
// - Pages are 1-based. A page outside 1..=total_pages yields an empty slice; the page number is
//   never clamped here.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::modules::event_requests::core::event_request::EventRequest;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(15).unwrap();

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage<'a> {
    pub visible: Vec<&'a EventRequest>,
    pub total_matches: usize,
    pub total_pages: usize,
}

pub fn filter_events<'a>(events: &'a [EventRequest], query: &str) -> Vec<&'a EventRequest> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|event| event.matches_lowercase(&needle))
        .collect()
}

pub fn list_events<'a>(
    events: &'a [EventRequest],
    query: &str,
    page: usize,
    page_size: NonZeroUsize,
) -> EventPage<'a> {
    let matches = filter_events(events, query);
    let total_matches = matches.len();
    let total_pages = total_matches.div_ceil(page_size.get());

    let visible = match page.checked_sub(1) {
        Some(index) => matches
            .into_iter()
            .skip(index.saturating_mul(page_size.get()))
            .take(page_size.get())
            .collect(),
        None => Vec::new(),
    };

    EventPage {
        visible,
        total_matches,
        total_pages,
    }
}
