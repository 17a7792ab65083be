// SymptomLens - ui/panels/mod.rs

pub mod about;
pub mod body_map;
pub mod result;
pub mod selected;
pub mod symptoms;
