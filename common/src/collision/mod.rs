pub mod helpers;
pub mod players;

pub use players::{
    fall_player, interact_target_distance, overlap_player_vs_aabb, player_aabb, player_grounded, slide_player,
};
