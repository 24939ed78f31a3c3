pub mod camera;
pub mod ghosts;
pub mod input;
pub mod ui;
