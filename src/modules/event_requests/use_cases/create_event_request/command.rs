use serde::Deserialize;

/// The "Create New Event Request" form as submitted. Missing fields deserialize as empty and
/// are rejected by the decider. There is no status field: new requests always start pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventRequest {
    pub event_name: String,
    pub event_start: String,
    pub event_end: String,
    pub client_name: String,
    pub contact_info: String,
    pub venue: String,
}
