// PlantTox - core/mod.rs
//
// Core business logic layer.
// Dependencies: serde, tracing, util.
// Must NOT depend on: ui, platform, app, or do file I/O directly.

pub mod dataset;
pub mod export;
pub mod filter;
pub mod indicator;
pub mod markup;
pub mod model;
