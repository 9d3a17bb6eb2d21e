// Identifier helpers shared by every module.
//
// Purpose
// - Mint fresh ids for records created during a session (new event requests, new positions).
//
// Boundaries
// - Mock data uses its own monotonic `event-{n}` / `pos-{n}` ids and does not go through here.

use uuid::Uuid;

/// Returns `{prefix}-{uuid v7}`. v7 ids are time ordered, so two ids minted in sequence sort
/// in creation order.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}
