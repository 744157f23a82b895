// PlantTox - app/mod.rs
//
// Application layer: state management and session persistence.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod session;
pub mod state;
