//! Tile-based walking demo
//!
//! A pixel-space character walks over a fixed tile grid; water, trees, and
//! stone block movement. Collision probes the feet point (center-x, just
//! above the bottom edge), so the character can stand with its head
//! overlapping a blocking tile above. Map switching resets the character to
//! that map's start tile.

pub mod maps;

use glam::Vec2;

use crate::consts::{TILE_SIZE, WALKER_SCREEN_HEIGHT, WALKER_SCREEN_WIDTH};
pub use maps::{Tile, TileMap, builtin_maps};

/// Held direction keys for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Pixels moved per frame while a key is held
pub const WALK_SPEED: f32 = 4.0;
/// Diagonal movement scale so diagonal speed matches cardinal speed
const DIAGONAL_SCALE: f32 = 0.7;
/// Feet probe sits this far above the bottom edge of the character box
const FEET_INSET: f32 = 5.0;

/// The walking demo: built-in maps plus the character's pixel position.
#[derive(Debug, Clone)]
pub struct WalkerGame {
    maps: Vec<TileMap>,
    current: usize,
    /// Top-left corner of the character box, in pixels
    pub pos: Vec2,
}

impl Default for WalkerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkerGame {
    pub fn new() -> Self {
        let maps = builtin_maps();
        let mut game = Self {
            maps,
            current: 0,
            pos: Vec2::ZERO,
        };
        game.reset_to_start();
        game
    }

    pub fn current_map(&self) -> &TileMap {
        &self.maps[self.current]
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Switch to another built-in map and reset to its start tile.
    /// Out-of-range indices are ignored.
    pub fn switch_map(&mut self, index: usize) {
        if index < self.maps.len() {
            self.current = index;
            self.reset_to_start();
        }
    }

    fn reset_to_start(&mut self) {
        let (tx, ty) = self.maps[self.current].start;
        self.pos = Vec2::new(tx as f32 * TILE_SIZE, ty as f32 * TILE_SIZE);
    }

    /// Advance one frame of movement. The move commits only when the feet
    /// probe lands on a walkable tile; probes outside the grid block.
    pub fn step(&mut self, input: &WalkInput) {
        let mut dx = (input.right as i8 - input.left as i8) as f32;
        let mut dy = (input.down as i8 - input.up as i8) as f32;
        if dx != 0.0 && dy != 0.0 {
            dx *= DIAGONAL_SCALE;
            dy *= DIAGONAL_SCALE;
        }

        let new_x = (self.pos.x + dx * WALK_SPEED).clamp(0.0, WALKER_SCREEN_WIDTH - TILE_SIZE);
        let new_y = (self.pos.y + dy * WALK_SPEED).clamp(0.0, WALKER_SCREEN_HEIGHT - TILE_SIZE);

        let feet_x = new_x + TILE_SIZE / 2.0;
        let feet_y = new_y + TILE_SIZE - FEET_INSET;
        let tile_x = (feet_x / TILE_SIZE) as usize;
        let tile_y = (feet_y / TILE_SIZE) as usize;

        if self
            .current_map()
            .tile(tile_x, tile_y)
            .is_some_and(Tile::walkable)
        {
            self.pos = Vec2::new(new_x, new_y);
        }
    }
}
