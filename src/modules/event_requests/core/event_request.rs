use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Pending,
        EventStatus::Approved,
        EventStatus::Rejected,
    ];
}

/// One booking request as shown in the request list. Dates are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub id: String,
    pub event_name: String,
    pub event_start: String,
    pub event_end: String,
    pub client_name: String,
    pub contact_info: String,
    pub venue: String,
    pub status: EventStatus,
}

impl EventRequest {
    /// Case-insensitive substring match on the event name, the client name or the venue.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.event_name, &self.client_name, &self.venue]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
