use bevy::prelude::*;

// ============================================================================
// Bevy Resources
// ============================================================================

// Counters reported at the end of a run
#[derive(Resource, Debug, Default)]
pub struct SimStats {
    pub ticks: u64,
    pub hunts_started: u32,
    pub hunts_lost: u32,
    pub ticks_hunted: u64,
}
