use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoom {
    pub id: String,
    pub name: String,
    pub positions: u32,
    pub start_date: String,
    pub end_date: String,
}

/// An entry of a pick list (coordinators, contractors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: &'static str,
    pub name: &'static str,
}
