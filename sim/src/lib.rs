pub mod config;
pub mod resources;
pub mod route;
pub mod systems;

pub use config::init_tracing;
