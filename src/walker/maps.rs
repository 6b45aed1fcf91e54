//! Hand-authored tile maps for the walking demo

/// Tile kinds. Water, trees, and stone block movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Grass,
    Water,
    Tree,
    Flower,
    Stone,
    Path,
}

impl Tile {
    pub fn walkable(self) -> bool {
        !matches!(self, Tile::Water | Tile::Tree | Tile::Stone)
    }

    fn from_id(id: u8) -> Self {
        match id {
            1 => Tile::Water,
            2 => Tile::Tree,
            3 => Tile::Flower,
            4 => Tile::Stone,
            5 => Tile::Path,
            _ => Tile::Grass,
        }
    }
}

/// A fixed grid of tiles plus the walker's start tile (x, y).
#[derive(Debug, Clone)]
pub struct TileMap {
    pub name: &'static str,
    tiles: Vec<Vec<Tile>>,
    pub start: (usize, usize),
}

impl TileMap {
    fn from_ids(name: &'static str, ids: &[[u8; 20]], start: (usize, usize)) -> Self {
        let tiles = ids
            .iter()
            .map(|row| row.iter().copied().map(Tile::from_id).collect())
            .collect();
        Self { name, tiles, start }
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Tile at grid position; `None` outside the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.tiles.get(y)?.get(x).copied()
    }
}

/// The three built-in maps, in selection order.
pub fn builtin_maps() -> Vec<TileMap> {
    vec![forest_clearing(), meadow_path(), island_lake()]
}

/// Forest clearing with a water pond, flowers, and a tree ring
fn forest_clearing() -> TileMap {
    TileMap::from_ids(
        "Forest Clearing",
        &[
            [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
            [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 0, 0, 0, 2],
            [2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 3, 3, 0, 0, 0, 0, 2],
            [2, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 2],
            [2, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 2],
            [2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2],
            [2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 2],
            [2, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 2],
            [2, 0, 3, 3, 0, 0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 0, 3, 3, 0, 2],
            [2, 0, 0, 0, 0, 0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 0, 0, 0, 0, 2],
            [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
        ],
        (1, 8),
    )
}

/// Stone path through a meadow with flower beds and fenced ponds
fn meadow_path() -> TileMap {
    TileMap::from_ids(
        "Meadow Path",
        &[
            [0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 3, 3, 0, 0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0, 3, 3, 0, 0, 0],
            [0, 3, 3, 0, 0, 0, 2, 3, 0, 0, 0, 2, 0, 0, 0, 3, 3, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 2, 3, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 1, 1, 1, 1, 2, 3, 0, 2, 2, 2, 0, 0, 1, 1, 1, 1, 0, 0],
            [0, 0, 1, 5, 5, 1, 2, 2, 0, 2, 3, 2, 0, 0, 1, 5, 5, 1, 0, 0],
            [0, 0, 1, 5, 5, 1, 0, 0, 0, 2, 3, 2, 0, 0, 1, 5, 5, 1, 0, 0],
            [0, 0, 1, 1, 1, 1, 0, 0, 0, 2, 2, 2, 0, 0, 1, 1, 1, 1, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ],
        (0, 9),
    )
}

/// Lake with walkable islands ringed by water
fn island_lake() -> TileMap {
    TileMap::from_ids(
        "Island Lake",
        &[
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 3, 0, 0, 0, 0, 0, 0, 3, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 3, 3, 0, 0, 0, 2, 2, 2, 2, 2, 0, 0, 3, 3, 1, 1, 1],
            [1, 1, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 2, 2, 0, 0, 0, 0, 1, 1],
            [1, 1, 0, 0, 3, 0, 0, 2, 2, 0, 0, 0, 2, 2, 0, 3, 0, 0, 1, 1],
            [1, 1, 0, 0, 3, 0, 0, 0, 0, 0, 3, 3, 0, 0, 0, 3, 0, 0, 1, 1],
            [1, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
            [1, 1, 1, 0, 0, 3, 3, 0, 3, 0, 0, 3, 3, 0, 0, 0, 1, 1, 1, 1],
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ],
        (5, 5),
    )
}
