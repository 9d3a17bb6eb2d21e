// Staffing roster of the event being edited.
//
// Purpose
// - Hold the positions of one open details session and apply edits as pure transitions.
//
// Responsibilities
// - An action naming a missing id leaves the roster as it was.
// - Quantities saturate at zero.
// - Nothing here is written back to the event request; closing the session drops the roster.

use serde::Serialize;

use crate::modules::event_details::core::position::Position;

pub const ADDED_MESSAGE: &str = "New position added successfully!";
/// Shown for every remove click, including one that matched nothing.
pub const REMOVED_MESSAGE: &str = "Position removed successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    /// Append a template position under `id`. The caller mints the id.
    Add { id: String },
    Remove { id: String },
    AdjustQuantity { id: String, delta: i32 },
    /// An empty `contractor_id` clears the assignment.
    AssignContractor { id: String, contractor_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub contractors_assigned: bool,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        if self.contractors_assigned {
            "Event details saved successfully! Contractors assigned."
        } else {
            "Event details saved successfully!"
        }
    }
}

impl Roster {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn get(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|position| position.id == id)
    }

    /// Read only. Reports which confirmation the save button shows.
    pub fn save(&self) -> SaveOutcome {
        SaveOutcome {
            contractors_assigned: self.positions.iter().any(Position::has_contractor),
        }
    }
}

fn update(mut roster: Roster, id: &str, change: impl FnOnce(&mut Position)) -> Roster {
    if let Some(position) = roster.positions.iter_mut().find(|p| p.id == id) {
        change(position);
    }
    roster
}

pub fn evolve(roster: Roster, action: RosterAction) -> Roster {
    match action {
        RosterAction::Add { id } => {
            let mut roster = roster;
            roster.positions.push(Position::from_template(id));
            roster
        }
        RosterAction::Remove { id } => {
            let mut roster = roster;
            roster.positions.retain(|position| position.id != id);
            roster
        }
        RosterAction::AdjustQuantity { id, delta } => update(roster, &id, |position| {
            position.quantity = position.quantity.saturating_add_signed(delta);
        }),
        RosterAction::AssignContractor { id, contractor_id } => update(roster, &id, |position| {
            position.contractor_id = (!contractor_id.is_empty()).then_some(contractor_id);
        }),
    }
}
