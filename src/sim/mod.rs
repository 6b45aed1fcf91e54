//! Deterministic climber simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{
    Coin, Color, GameEvent, Platform, Player, Session, SessionPhase, PLATFORM_PALETTE,
};
pub use tick::{TickInput, tick};
