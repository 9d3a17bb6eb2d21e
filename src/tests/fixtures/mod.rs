// Shared test fixtures: builders for domain values and commands.

pub mod commands;
pub mod events;
pub mod positions;
