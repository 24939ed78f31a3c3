pub mod collision;
pub mod components;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod ghost;
pub mod map;
pub mod markers;
pub mod player;
pub mod systems;
