// SymptomLens - app/mod.rs
//
// Application layer: state management, HTTP client, request orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod client;
pub mod requests;
pub mod state;
