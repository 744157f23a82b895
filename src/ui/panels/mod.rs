// PlantTox - ui/panels/mod.rs

pub mod about;
pub mod detail;
pub mod search;
pub mod table;
