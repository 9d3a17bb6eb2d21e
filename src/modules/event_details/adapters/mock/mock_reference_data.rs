// Fixed reference data for the details view. In-memory only for now.

use crate::modules::event_details::core::position::Position;
use crate::modules::event_details::core::reference::{Choice, MeetingRoom};

const MOCK_POSITION_COUNT: usize = 8;
const MOCK_ROOM_COUNT: usize = 5;

pub const COORDINATORS: [Choice; 3] = [
    Choice {
        id: "coordinator-1",
        name: "John Smith",
    },
    Choice {
        id: "coordinator-2",
        name: "Sarah Johnson",
    },
    Choice {
        id: "coordinator-3",
        name: "Mike Davis",
    },
];

pub const CONTRACTORS: [Choice; 3] = [
    Choice {
        id: "contractor-1",
        name: "Contractor 1",
    },
    Choice {
        id: "contractor-2",
        name: "Contractor 2",
    },
    Choice {
        id: "contractor-3",
        name: "Contractor 3",
    },
];

/// The roster every details session opens with.
pub fn mock_positions() -> Vec<Position> {
    (1..=MOCK_POSITION_COUNT)
        .map(|i| Position::from_template(format!("pos-{i}")))
        .collect()
}

pub fn mock_meeting_rooms() -> Vec<MeetingRoom> {
    (1..=MOCK_ROOM_COUNT)
        .map(|i| MeetingRoom {
            id: format!("room-{i}"),
            name: format!("Meeting Room {i}"),
            positions: 12,
            start_date: "12 Jan, 2023".to_string(),
            end_date: "15 Jan, 2023".to_string(),
        })
        .collect()
}
