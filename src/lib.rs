//! Skyhop - an endless climber arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic climber simulation (spawning, physics, scoring)
//! - `config`: Data-driven gameplay tuning with fail-fast validation
//! - `audio`: Fire-and-forget sound effect triggers
//! - `walker`: Tile-based walking demo with hand-authored maps
//!
//! Rendering and window/event-pump ownership live outside this crate; the
//! simulation exposes plain read-only state for a renderer to draw.

pub mod audio;
pub mod config;
pub mod sim;
pub mod walker;

pub use config::ClimberConfig;
pub use sim::{Session, SessionPhase, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz tick rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Climber play field dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Walker demo screen and tile grid
    pub const WALKER_SCREEN_WIDTH: f32 = 640.0;
    pub const WALKER_SCREEN_HEIGHT: f32 = 480.0;
    pub const TILE_SIZE: f32 = 32.0;
}
