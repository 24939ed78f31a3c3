mod ghost;
mod level;
mod player;

pub use ghost::spawn_ghost_system;
pub use level::spawn_level_system;
pub use player::spawn_player_system;
