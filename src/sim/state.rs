//! Climber session state and core simulation types
//!
//! The `Session` owns every piece of mutable game state. There are no
//! process-wide globals: the tick driver holds exactly one `Session` and
//! renderers read it between ticks.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{ClimberConfig, ConfigError};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Normal play; all entity updates run each tick
    Active,
    /// Terminal; all updates freeze until restart
    GameOver,
}

/// Discrete triggers emitted during a tick, drained by the driver.
/// The audio collaborator consumes these; dropping them has no effect on
/// game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    CoinCollected,
}

/// RGB display color
pub type Color = [u8; 3];

/// Fixed palette platforms draw their color from at creation
pub const PLATFORM_PALETTE: [Color; 6] = [
    [156, 234, 177], // grass green
    [135, 206, 235], // sky blue
    [255, 182, 193], // blossom pink
    [255, 235, 205], // path cream
    [195, 195, 195], // stone grey
    [255, 105, 180], // hot pink
];

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity, positive = downward
    pub vel: f32,
    /// Resting on a platform as of the last landing resolution
    pub grounded: bool,
}

/// A scrolling platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub color: Color,
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

/// Complete climber state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub config: ClimberConfig,
    pub phase: SessionPhase,
    pub player: Player,
    /// Live platforms in spawn order (oldest first)
    pub platforms: Vec<Platform>,
    /// Live coins in spawn order
    pub coins: Vec<Coin>,
    /// Monotonically non-decreasing while Active
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Triggers emitted this tick, cleared when drained
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a new Active session with the given seed.
    ///
    /// Fails fast if the configuration is degenerate (empty spawn range,
    /// non-positive dimension, downward jump).
    pub fn new(seed: u64, config: ClimberConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: SessionPhase::Active,
            player: Player {
                rect: Rect::new(0.0, 0.0, 0.0, 0.0),
                vel: 0.0,
                grounded: false,
            },
            platforms: Vec::new(),
            coins: Vec::new(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        };
        session.reset_entities();
        Ok(session)
    }

    /// Place the player mid-screen with one seed platform directly beneath.
    fn reset_entities(&mut self) {
        let cfg = &self.config;
        self.player = Player {
            rect: Rect::new(
                (cfg.screen_w - cfg.player_w) / 2.0,
                cfg.screen_h / 2.0,
                cfg.player_w,
                cfg.player_h,
            ),
            vel: 0.0,
            grounded: false,
        };
        self.platforms.clear();
        self.coins.clear();
        let color = self.pick_color();
        self.platforms.push(Platform {
            rect: Rect::new(
                (self.config.screen_w - self.config.platform_w) / 2.0,
                self.player.rect.bottom(),
                self.config.platform_w,
                self.config.platform_h,
            ),
            color,
        });
    }

    /// Return to the initial Active state. Valid only while GameOver;
    /// a no-op otherwise.
    pub fn restart(&mut self) {
        if self.phase != SessionPhase::GameOver {
            return;
        }
        self.score = 0;
        self.time_ticks = 0;
        self.events.clear();
        self.reset_entities();
        self.phase = SessionPhase::Active;
    }

    /// Spawn one platform just below the visible bottom edge at a uniform
    /// random horizontal position, plus an accompanying coin with
    /// probability `p_coin`. The only entity-creation path during play.
    pub(crate) fn spawn_platform(&mut self) {
        let cfg = self.config.clone();
        let max_x = cfg.screen_w - cfg.platform_w;
        let x = self.rng.random_range(0.0..=max_x);
        let color = self.pick_color();
        self.platforms.push(Platform {
            rect: Rect::new(x, cfg.screen_h + cfg.spawn_margin, cfg.platform_w, cfg.platform_h),
            color,
        });

        if self.rng.random_bool(cfg.p_coin) {
            self.coins.push(Coin {
                rect: Rect::new(x + cfg.coin_offset, cfg.screen_h, cfg.coin_w, cfg.coin_h),
                collected: false,
            });
        }
    }

    fn pick_color(&mut self) -> Color {
        PLATFORM_PALETTE[self.rng.random_range(0..PLATFORM_PALETTE.len())]
    }

    /// Queue a trigger for the driver to drain after this tick.
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the triggers emitted since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub(crate) fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
