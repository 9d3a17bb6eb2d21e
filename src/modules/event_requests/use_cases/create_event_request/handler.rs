use tracing::info;

use crate::modules::event_requests::core::catalog::EventCatalog;
use crate::modules::event_requests::use_cases::create_event_request::command::CreateEventRequest;
use crate::modules::event_requests::use_cases::create_event_request::decide::{
    DecideError, decide_create,
};
use crate::shared::core::primitives::new_id;

pub const CREATED_MESSAGE: &str = "New event request created successfully!";

/// Mints an id, decides, and puts the accepted request at the top of the catalog.
pub fn handle(
    catalog: &mut EventCatalog,
    command: CreateEventRequest,
) -> Result<String, DecideError> {
    let event = decide_create(new_id("event"), command)?;
    let id = event.id.clone();
    catalog.prepend(event);
    info!(event_id = %id, total = catalog.len(), "event request created");
    Ok(id)
}

#[cfg(test)]
mod create_event_request_handler_tests {
    use super::*;
    use crate::modules::event_requests::use_cases::create_event_request::decide::FormField;
    use crate::tests::fixtures::commands::CreateEventRequestBuilder;
    use crate::tests::fixtures::events::make_events;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> EventCatalog {
        EventCatalog::new(make_events(50))
    }

    #[rstest]
    fn it_should_prepend_the_created_request(catalog: EventCatalog) {
        let mut catalog = catalog;
        let before: Vec<String> = catalog.events().iter().map(|e| e.id.clone()).collect();

        let id = handle(&mut catalog, CreateEventRequestBuilder::new().build()).unwrap();

        assert!(id.starts_with("event-"));
        assert_eq!(catalog.len(), 51);
        assert_eq!(catalog.events()[0].id, id);
        let after: Vec<String> = catalog.events()[1..].iter().map(|e| e.id.clone()).collect();
        assert_eq!(after, before);
    }

    #[rstest]
    fn it_should_leave_the_catalog_untouched_when_rejected(catalog: EventCatalog) {
        let mut catalog = catalog;
        let before = catalog.clone();
        let result = handle(&mut catalog, CreateEventRequestBuilder::new().venue("").build());
        assert_eq!(result, Err(DecideError::MissingField(FormField::Venue)));
        assert_eq!(catalog, before);
    }

    #[rstest]
    fn it_should_mint_a_new_id_per_submission(catalog: EventCatalog) {
        let mut catalog = catalog;
        let first = handle(&mut catalog, CreateEventRequestBuilder::new().build()).unwrap();
        let second = handle(&mut catalog, CreateEventRequestBuilder::new().build()).unwrap();
        assert_ne!(first, second);
        assert_eq!(catalog.events()[0].id, second);
        assert_eq!(catalog.events()[1].id, first);
    }
}
