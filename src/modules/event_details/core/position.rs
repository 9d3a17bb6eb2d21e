use serde::{Deserialize, Serialize};

/// One staffing line on an event. `contractor_id` is a free reference, never checked against
/// the contractor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub position: String,
    pub time: String,
    pub info: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contractor_id: Option<String>,
}

pub const TEMPLATE_POSITION: &str = "Camera 1 (Video)";
pub const TEMPLATE_TIME: &str = "9 am - 7 pm";
pub const TEMPLATE_INFO: &str = "LP default";
pub const TEMPLATE_QUANTITY: u32 = 20;

impl Position {
    /// The line every "add position" click appends.
    pub fn from_template(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: TEMPLATE_POSITION.to_string(),
            time: TEMPLATE_TIME.to_string(),
            info: TEMPLATE_INFO.to_string(),
            quantity: TEMPLATE_QUANTITY,
            contractor_id: None,
        }
    }

    pub fn has_contractor(&self) -> bool {
        self.contractor_id.is_some()
    }
}
