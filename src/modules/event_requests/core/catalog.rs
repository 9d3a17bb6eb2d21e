// The in-memory collection of event requests for one session.
//
// Responsibilities
// - Keep requests in display order, newest submissions first.
// - Never drop or reorder existing records.

use crate::modules::event_requests::core::event_request::EventRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<EventRequest>,
}

impl EventCatalog {
    pub fn new(events: Vec<EventRequest>) -> Self {
        Self { events }
    }

    pub fn prepend(&mut self, event: EventRequest) {
        self.events.insert(0, event);
    }

    pub fn find(&self, id: &str) -> Option<&EventRequest> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn events(&self) -> &[EventRequest] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
