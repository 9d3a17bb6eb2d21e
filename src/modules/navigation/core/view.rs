// List / details view machine.
//
// Responsibilities
// - `Details` always carries the selected event id; `List` never does.
// - Selecting does not check the id against the catalog.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "eventId", rename_all = "lowercase")]
pub enum View {
    #[default]
    List,
    Details(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    Select(String),
    Back,
}

impl View {
    pub fn selected_event_id(&self) -> Option<&str> {
        match self {
            View::List => None,
            View::Details(id) => Some(id.as_str()),
        }
    }
}

pub fn evolve(view: View, action: NavigationAction) -> View {
    match action {
        NavigationAction::Select(id) => View::Details(id),
        NavigationAction::Back => View::List,
    }
}
