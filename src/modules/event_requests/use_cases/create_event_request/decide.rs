// Pure decision function for creating an event request.
//
// Responsibilities
// - Every form field is required: reject the first empty one, in form order.
// - No format checks. Dates are free text and the end is not compared to the start.
// - Never perform input or output; the id is supplied by the caller.

use std::fmt;

use serde::Serialize;

use crate::modules::event_requests::core::event_request::{EventRequest, EventStatus};
use crate::modules::event_requests::use_cases::create_event_request::command::CreateEventRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    EventName,
    EventStart,
    EventEnd,
    ClientName,
    ContactInfo,
    Venue,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::EventName => "event name",
            FormField::EventStart => "event start",
            FormField::EventEnd => "event end",
            FormField::ClientName => "client name",
            FormField::ContactInfo => "contact info",
            FormField::Venue => "venue",
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} is required")]
    MissingField(FormField),
}

pub fn decide_create(
    id: String,
    command: CreateEventRequest,
) -> Result<EventRequest, DecideError> {
    let required = [
        (FormField::EventName, &command.event_name),
        (FormField::EventStart, &command.event_start),
        (FormField::EventEnd, &command.event_end),
        (FormField::ClientName, &command.client_name),
        (FormField::ContactInfo, &command.contact_info),
        (FormField::Venue, &command.venue),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(DecideError::MissingField(*field));
    }

    Ok(EventRequest {
        id,
        event_name: command.event_name,
        event_start: command.event_start,
        event_end: command.event_end,
        client_name: command.client_name,
        contact_info: command.contact_info,
        venue: command.venue,
        status: EventStatus::Pending,
    })
}

#[cfg(test)]
mod create_event_request_decide_tests {
    use super::*;
    use crate::tests::fixtures::commands::CreateEventRequestBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn create_command() -> CreateEventRequest {
        CreateEventRequestBuilder::new().build()
    }

    #[rstest]
    fn it_should_decide_to_create_the_event_request(create_command: CreateEventRequest) {
        let event = decide_create("event-new".into(), create_command.clone()).unwrap();
        assert_eq!(event.id, "event-new");
        assert_eq!(event.event_name, create_command.event_name);
        assert_eq!(event.event_start, create_command.event_start);
        assert_eq!(event.event_end, create_command.event_end);
        assert_eq!(event.client_name, create_command.client_name);
        assert_eq!(event.contact_info, create_command.contact_info);
        assert_eq!(event.venue, create_command.venue);
        assert_eq!(event.status, EventStatus::Pending);
    }

    #[rstest]
    #[case(CreateEventRequestBuilder::new().event_name(""), FormField::EventName)]
    #[case(CreateEventRequestBuilder::new().event_start(""), FormField::EventStart)]
    #[case(CreateEventRequestBuilder::new().event_end(""), FormField::EventEnd)]
    #[case(CreateEventRequestBuilder::new().client_name(""), FormField::ClientName)]
    #[case(CreateEventRequestBuilder::new().contact_info(""), FormField::ContactInfo)]
    #[case(CreateEventRequestBuilder::new().venue(""), FormField::Venue)]
    fn it_should_reject_an_empty_required_field(
        #[case] builder: CreateEventRequestBuilder,
        #[case] field: FormField,
    ) {
        let decision = decide_create("event-new".into(), builder.build());
        assert_eq!(decision, Err(DecideError::MissingField(field)));
    }

    #[rstest]
    fn it_should_report_the_first_missing_field_in_form_order() {
        let decision = decide_create("event-new".into(), CreateEventRequest::default());
        assert_eq!(decision, Err(DecideError::MissingField(FormField::EventName)));
        assert_eq!(
            decision.unwrap_err().to_string(),
            "event name is required"
        );
    }

    #[rstest]
    fn it_should_not_compare_the_end_date_to_the_start_date() {
        let command = CreateEventRequestBuilder::new()
            .event_start("2024-05-10")
            .event_end("2024-05-01")
            .build();
        assert!(decide_create("event-new".into(), command).is_ok());
    }
}
