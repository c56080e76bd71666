pub mod delivery;
pub mod parties;
pub mod render;
