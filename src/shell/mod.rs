// Composition root for the event request back-office.
//
// Responsibilities
// - Read config from environment.
// - Seed the in-memory state from the mock adapters.
// - Drive the command loop over stdin and stdout.

pub mod app;
pub mod command;
pub mod config;
pub mod runner;
pub mod view;
