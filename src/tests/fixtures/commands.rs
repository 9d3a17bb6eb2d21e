use crate::modules::event_requests::use_cases::create_event_request::command::CreateEventRequest;
use std::fs;

pub struct CreateEventRequestBuilder {
    inner: CreateEventRequest,
}

impl Default for CreateEventRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventRequestBuilder {
    /// Starts from the filled-in form in `json/create_event_request.json`.
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/create_event_request.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
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

    pub fn contact_info(mut self, v: impl Into<String>) -> Self {
        self.inner.contact_info = v.into();
        self
    }

    pub fn venue(mut self, v: impl Into<String>) -> Self {
        self.inner.venue = v.into();
        self
    }

    pub fn build(self) -> CreateEventRequest {
        self.inner
    }
}

#[cfg(test)]
mod create_event_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEventRequestBuilder::default().build();
        assert_eq!(built.event_name, "Innovation Workshop");
        assert_eq!(built.event_start, "2024-09-12");
        assert_eq!(built.event_end, "2024-09-13");
        assert_eq!(built.client_name, "Anna Martinez");
        assert_eq!(built.contact_info, "+1 234 567 0001");
        assert_eq!(built.venue, "Innovation Center");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateEventRequestBuilder::new()
            .event_name("Gala")
            .event_start("a")
            .event_end("b")
            .client_name("c")
            .contact_info("d")
            .venue("e")
            .build();
        assert_eq!(custom.event_name, "Gala");
        assert_eq!(custom.event_start, "a");
        assert_eq!(custom.event_end, "b");
        assert_eq!(custom.client_name, "c");
        assert_eq!(custom.contact_info, "d");
        assert_eq!(custom.venue, "e");
    }
}
