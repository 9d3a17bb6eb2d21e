// One open "event details" screen.
//
// Purpose
// - Own everything the details screen edits: tab, coordinator, meeting room and roster.
//
// Responsibilities
// - Opened fresh on every selection, seeded from the reference data.
// - Dropped on back navigation. Nothing flows back into the event request.

use serde::{Deserialize, Serialize};

use crate::modules::event_details::core::position::Position;
use crate::modules::event_details::core::reference::MeetingRoom;
use crate::modules::event_details::core::roster::{self, Roster, RosterAction};
use crate::modules::event_requests::core::event_request::EventRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailsTab {
    EventDetails,
    #[default]
    AssignCoordinator,
    SessionManagement,
    GenerateSow,
}

impl DetailsTab {
    pub const ALL: [DetailsTab; 4] = [
        DetailsTab::EventDetails,
        DetailsTab::AssignCoordinator,
        DetailsTab::SessionManagement,
        DetailsTab::GenerateSow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailsTab::EventDetails => "Event Details",
            DetailsTab::AssignCoordinator => "Assign Coordinator",
            DetailsTab::SessionManagement => "Session Management",
            DetailsTab::GenerateSow => "Generate SOW",
        }
    }
}

/// Snapshot of the details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub id: String,
    pub event_name: String,
    pub venue_details: String,
    pub start_date: String,
    pub end_date: String,
    pub venue_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<String>,
    pub meeting_rooms: Vec<MeetingRoom>,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsSession {
    pub event_id: String,
    /// `None` when the selected id is not in the catalog. The screen still opens.
    pub event: Option<EventRequest>,
    pub active_tab: DetailsTab,
    pub coordinator: Option<String>,
    pub meeting_rooms: Vec<MeetingRoom>,
    pub selected_room: Option<String>,
    pub roster: Roster,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SelectTab(DetailsTab),
    /// An empty id clears the coordinator.
    AssignCoordinator(String),
    SelectRoom(String),
    Roster(RosterAction),
}

impl DetailsSession {
    pub fn open(
        event_id: impl Into<String>,
        event: Option<EventRequest>,
        meeting_rooms: Vec<MeetingRoom>,
        positions: Vec<Position>,
    ) -> Self {
        let selected_room = meeting_rooms.first().map(|room| room.id.clone());
        Self {
            event_id: event_id.into(),
            event,
            active_tab: DetailsTab::default(),
            coordinator: None,
            meeting_rooms,
            selected_room,
            roster: Roster::new(positions),
        }
    }

    pub fn details(&self) -> EventDetails {
        let field = |pick: fn(&EventRequest) -> &String| {
            self.event.as_ref().map(pick).cloned().unwrap_or_default()
        };
        EventDetails {
            id: self.event_id.clone(),
            event_name: field(|e| &e.event_name),
            venue_details: field(|e| &e.venue),
            start_date: field(|e| &e.event_start),
            end_date: field(|e| &e.event_end),
            venue_address: field(|e| &e.venue),
            coordinator: self.coordinator.clone(),
            meeting_rooms: self.meeting_rooms.clone(),
            positions: self.roster.positions().to_vec(),
        }
    }
}

pub fn evolve(session: DetailsSession, action: SessionAction) -> DetailsSession {
    match action {
        SessionAction::SelectTab(active_tab) => DetailsSession {
            active_tab,
            ..session
        },
        SessionAction::AssignCoordinator(id) => DetailsSession {
            coordinator: (!id.is_empty()).then_some(id),
            ..session
        },
        SessionAction::SelectRoom(id) => DetailsSession {
            selected_room: Some(id),
            ..session
        },
        SessionAction::Roster(action) => {
            let mut session = session;
            session.roster = roster::evolve(std::mem::take(&mut session.roster), action);
            session
        }
    }
}
