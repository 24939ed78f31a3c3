use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes across client and sim.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

#[derive(Component, Debug, Default)]
pub struct GhostMarker;
