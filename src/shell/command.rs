// Inbound commands: one user action per JSON line.
//
// Responsibilities
// - A closed set of actions, each carrying only the fields it needs.
// - Translate into the module actions. No business rules here.

use serde::Deserialize;
use thiserror::Error;

use crate::modules::event_details::core::session::DetailsTab;
use crate::modules::event_requests::use_cases::create_event_request::command::CreateEventRequest;
use crate::modules::event_requests::use_cases::create_event_request::decide::DecideError;
use crate::modules::navigation::core::section::{MenuGroup, Section};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Emit the current view without changing anything.
    Render,
    Search {
        term: String,
    },
    GoToPage {
        page: usize,
    },
    PreviousPage,
    NextPage,
    SelectEvent {
        id: String,
    },
    Back,
    ChangeSection {
        section: Section,
    },
    ToggleGroup {
        group: MenuGroup,
    },
    ToggleSidebar,
    /// Dismiss the compact-layout drawer, e.g. by clicking the overlay.
    CloseSidebar,
    OpenCreateModal,
    CloseCreateModal,
    SubmitCreateEvent {
        form: CreateEventRequest,
    },
    SelectTab {
        tab: DetailsTab,
    },
    AssignCoordinator {
        id: String,
    },
    SelectRoom {
        id: String,
    },
    AddPosition,
    RemovePosition {
        id: String,
    },
    AdjustQuantity {
        id: String,
        delta: i32,
    },
    AssignContractor {
        id: String,
        contractor_id: String,
    },
    SaveEdits,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Malformed(String),

    #[error("the request list is not on screen")]
    ListHidden,

    #[error("no event is open for editing")]
    NoOpenSession,

    #[error("the create event form is not open")]
    CreateModalClosed,

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        serde_json::from_str(line).map_err(|e| CommandError::Malformed(e.to_string()))
    }
}
