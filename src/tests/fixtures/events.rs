use crate::modules::event_requests::core::event_request::{EventRequest, EventStatus};

pub struct EventRequestBuilder {
    inner: EventRequest,
}

impl Default for EventRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventRequestBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventRequest {
                id: "event-fixed-0001".to_string(),
                event_name: "Marketing Summit".to_string(),
                event_start: "4/2/2024".to_string(),
                event_end: "4/4/2024".to_string(),
                client_name: "Emily Rodriguez".to_string(),
                contact_info: "+1 234 567 7891".to_string(),
                venue: "Conference Hall A".to_string(),
                status: EventStatus::Pending,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn event_name(mut self, v: impl Into<String>) -> Self {
        self.inner.event_name = v.into();
        self
    }

    pub fn event_start(mut self, v: impl Into<String>) -> Self {
        self.inner.event_start = v.into();
        self
    }

    pub fn event_end(mut self, v: impl Into<String>) -> Self {
        self.inner.event_end = v.into();
        self
    }

    pub fn client_name(mut self, v: impl Into<String>) -> Self {
        self.inner.client_name = v.into();
        self
    }

    pub fn venue(mut self, v: impl Into<String>) -> Self {
        self.inner.venue = v.into();
        self
    }

    pub fn status(mut self, v: EventStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> EventRequest {
        self.inner
    }
}

/// `count` requests `event-1..=event-{count}` named `Fixture Event {i}`, so every one of them
/// matches the search term "event" and only on its name.
pub fn make_events(count: usize) -> Vec<EventRequest> {
    (1..=count)
        .map(|i| {
            EventRequestBuilder::new()
                .id(format!("event-{i}"))
                .event_name(format!("Fixture Event {i}"))
                .client_name(format!("Client {i}"))
                .venue(format!("Venue {i}"))
                .build()
        })
        .collect()
}
