// SymptomLens - core/mod.rs
//
// Core business logic layer.
// Dependencies: serde, serde_json, tracing.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod locale;
pub mod model;
pub mod region;
pub mod render;
pub mod selection;
