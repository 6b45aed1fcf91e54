//! Data-driven gameplay tuning
//!
//! Every per-tick magnitude the simulation uses lives here so tests and the
//! demo driver can tune a session without touching sim code. Validation runs
//! once at session construction; a bad value is a programming error, not a
//! runtime condition, so it fails fast instead of being checked per tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Configuration rejected at session construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The uniform spawn range `[0, screen_w - platform_w]` would be empty
    #[error("platform width {platform_w} exceeds screen width {screen_w}")]
    EmptySpawnRange { platform_w: f32, screen_w: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("jump velocity must be negative (upward), got {0}")]
    NonUpwardJump(f32),

    #[error("coin probability must be within [0, 1], got {0}")]
    CoinProbability(f64),

    #[error("minimum live platform count must be at least 1")]
    NoSeedPlatform,
}

/// All climber tunables, in pixels and ticks (y grows downward).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimberConfig {
    /// Play field dimensions
    pub screen_w: f32,
    pub screen_h: f32,

    /// Player bounding box
    pub player_w: f32,
    pub player_h: f32,
    /// Horizontal displacement per tick while a direction key is held
    pub move_speed: f32,
    /// Downward acceleration per tick, applied unconditionally
    pub gravity: f32,
    /// Fall speed clamp, applied every tick after the gravity increment
    pub max_fall_speed: f32,
    /// Vertical velocity set on jump (negative = upward)
    pub jump_velocity: f32,

    /// Platform bounding box
    pub platform_w: f32,
    pub platform_h: f32,
    /// Upward scroll speed of platforms
    pub platform_speed: f32,

    /// Coin bounding box
    pub coin_w: f32,
    pub coin_h: f32,
    /// Upward scroll speed of coins (independent of platform speed)
    pub coin_speed: f32,

    /// Spawn a platform whenever fewer than this many are live
    pub min_platforms: usize,
    /// ... or once the newest platform's top has risen above
    /// `screen_h - spawn_trigger_gap`
    pub spawn_trigger_gap: f32,
    /// New platforms enter this far below the visible bottom edge
    pub spawn_margin: f32,
    /// Probability of a coin accompanying each new platform
    pub p_coin: f64,
    /// Horizontal coin offset from its platform's left edge
    pub coin_offset: f32,
    /// Score bonus per collected coin
    pub coin_bonus: u64,
}

impl Default for ClimberConfig {
    fn default() -> Self {
        Self {
            screen_w: SCREEN_WIDTH,
            screen_h: SCREEN_HEIGHT,

            player_w: 30.0,
            player_h: 30.0,
            move_speed: 5.0,
            gravity: 1.0,
            max_fall_speed: 10.0,
            jump_velocity: -15.0,

            platform_w: 80.0,
            platform_h: 20.0,
            platform_speed: 2.0,

            coin_w: 20.0,
            coin_h: 20.0,
            coin_speed: 2.0,

            min_platforms: 8,
            spawn_trigger_gap: 120.0,
            spawn_margin: 20.0,
            p_coin: 0.5,
            coin_offset: 30.0,
            coin_bonus: 5,
        }
    }
}

impl ClimberConfig {
    /// Reject degenerate parameters before any tick runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_w", self.screen_w),
            ("screen_h", self.screen_h),
            ("player_w", self.player_w),
            ("player_h", self.player_h),
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("platform_w", self.platform_w),
            ("platform_h", self.platform_h),
            ("platform_speed", self.platform_speed),
            ("coin_w", self.coin_w),
            ("coin_h", self.coin_h),
            ("coin_speed", self.coin_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.platform_w > self.screen_w {
            return Err(ConfigError::EmptySpawnRange {
                platform_w: self.platform_w,
                screen_w: self.screen_w,
            });
        }
        if !(self.jump_velocity < 0.0) {
            return Err(ConfigError::NonUpwardJump(self.jump_velocity));
        }
        if !(0.0..=1.0).contains(&self.p_coin) {
            return Err(ConfigError::CoinProbability(self.p_coin));
        }
        if self.min_platforms == 0 {
            return Err(ConfigError::NoSeedPlatform);
        }

        Ok(())
    }
}
