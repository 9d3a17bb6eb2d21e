use crate::modules::event_details::core::position::Position;

/// `count` template positions `pos-1..=pos-{count}`, all at quantity 20.
pub fn make_positions(count: usize) -> Vec<Position> {
    (1..=count)
        .map(|i| Position::from_template(format!("pos-{i}")))
        .collect()
}
