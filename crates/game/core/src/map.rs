//! Static map model: immutable tile descriptors and the rectangular grid.
//!
//! Grids are authored/loaded once per map id and never mutated afterwards.
//! Walkability is a total function of [`TileKind`], so route validity never
//! depends on runtime state.

use crate::state::{DialogueId, MapId, Position};

/// Canonical tile classes.
///
/// The variant fully determines walkability; payloads carry the authored
/// extras a class may have (an NPC's dialogue line and display color, a
/// door's destination map).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Ground,
    Wall,
    Npc {
        dialogue: Option<DialogueId>,
        color: Option<String>,
    },
    Door {
        destination: MapId,
    },
}

impl TileKind {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileKind::Ground | TileKind::Door { .. })
    }
}

/// Immutable descriptor for one cell of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    kind: TileKind,
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub fn is_walkable(&self) -> bool {
        self.kind.is_walkable()
    }

    /// The destination map when this tile is a door.
    pub fn door_destination(&self) -> Option<&MapId> {
        match &self.kind {
            TileKind::Door { destination } => Some(destination),
            _ => None,
        }
    }

    /// The dialogue line when this tile is an NPC with one authored.
    /// NPCs without a line are scenery: visible, blocking, not interactable.
    pub fn npc_dialogue(&self) -> Option<&DialogueId> {
        match &self.kind {
            TileKind::Npc { dialogue, .. } => dialogue.as_ref(),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Errors raised while assembling a [`MapGrid`] from authored data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map {id} has degenerate dimensions {width}x{height}")]
    EmptyDimensions { id: MapId, width: u32, height: u32 },

    #[error("map {id} expects {expected} tiles, got {actual}")]
    TileCount {
        id: MapId,
        expected: usize,
        actual: usize,
    },

    #[error("map {id} tile at index {index} claims position {claimed}, slot is {slot}")]
    MisplacedTile {
        id: MapId,
        index: usize,
        claimed: Position,
        slot: Position,
    },

    #[error("map {id} entry point {entry} is not walkable")]
    EntryNotWalkable { id: MapId, entry: Position },
}

/// Rectangular, immutable grid of tiles with a per-map entry point.
///
/// Invariant: every coordinate in `[0,width) x [0,height)` holds exactly one
/// tile; out-of-range coordinates are invalid addresses, never tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    id: MapId,
    entry: Position,
    dimensions: MapDimensions,
    /// Row-major: index = y * width + x.
    tiles: Vec<Tile>,
}

impl MapGrid {
    /// Assembles and validates a grid from row-major tiles.
    pub fn new(
        id: MapId,
        entry: Position,
        dimensions: MapDimensions,
        tiles: Vec<Tile>,
    ) -> Result<Self, MapError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(MapError::EmptyDimensions {
                id,
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let expected = dimensions.width as usize * dimensions.height as usize;
        if tiles.len() != expected {
            return Err(MapError::TileCount {
                id,
                expected,
                actual: tiles.len(),
            });
        }

        for (index, tile) in tiles.iter().enumerate() {
            let slot = Position::new(
                (index % dimensions.width as usize) as i32,
                (index / dimensions.width as usize) as i32,
            );
            if tile.position() != slot {
                return Err(MapError::MisplacedTile {
                    id,
                    index,
                    claimed: tile.position(),
                    slot,
                });
            }
        }

        let grid = Self {
            id,
            entry,
            dimensions,
            tiles,
        };
        if !grid.is_walkable(entry) {
            return Err(MapError::EntryNotWalkable {
                id: grid.id,
                entry,
            });
        }
        Ok(grid)
    }

    pub fn id(&self) -> &MapId {
        &self.id
    }

    /// Where the player appears when this map becomes active (spawn after a
    /// door transition or a fresh session).
    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Tile lookup; `None` for out-of-range coordinates.
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let index = position.y as usize * self.dimensions.width as usize + position.x as usize;
        self.tiles.get(index)
    }

    /// Out-of-range addresses are treated as not walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile_at(position).is_some_and(Tile::is_walkable)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Rows in y order, each a `width`-long slice, the shape renderers want.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dimensions.width as usize)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a grid from ASCII art rows: `#` wall, `.` ground, `N` NPC with
    /// dialogue `npc_1`, `n` NPC without dialogue, `D` door to `dest`.
    pub(crate) fn grid_from_art(id: &str, dest: &str, entry: Position, art: &[&str]) -> MapGrid {
        let height = art.len() as u32;
        let width = art[0].len() as u32;
        let mut tiles = Vec::new();
        for (y, row) in art.iter().enumerate() {
            assert_eq!(row.len() as u32, width, "ragged art row");
            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    '#' => TileKind::Wall,
                    '.' => TileKind::Ground,
                    'N' => TileKind::Npc {
                        dialogue: Some("npc_1".into()),
                        color: Some("#2aa".into()),
                    },
                    'n' => TileKind::Npc {
                        dialogue: None,
                        color: None,
                    },
                    'D' => TileKind::Door {
                        destination: dest.into(),
                    },
                    other => panic!("unknown art cell {other:?}"),
                };
                tiles.push(Tile::new(Position::new(x as i32, y as i32), kind));
            }
        }
        MapGrid::new(id.into(), entry, MapDimensions::new(width, height), tiles)
            .expect("art grid is valid")
    }

    #[test]
    fn walkability_follows_the_kind() {
        assert!(TileKind::Ground.is_walkable());
        assert!(
            TileKind::Door {
                destination: "map02".into()
            }
            .is_walkable()
        );
        assert!(!TileKind::Wall.is_walkable());
        assert!(
            !TileKind::Npc {
                dialogue: Some("npc_1".into()),
                color: None
            }
            .is_walkable()
        );
    }

    #[test]
    fn tile_at_rejects_out_of_range_addresses() {
        let grid = grid_from_art("room", "other", Position::new(1, 1), &["###", "#.#", "###"]);
        assert!(grid.tile_at(Position::new(1, 1)).is_some());
        assert!(grid.tile_at(Position::new(-1, 0)).is_none());
        assert!(grid.tile_at(Position::new(3, 1)).is_none());
        assert!(grid.tile_at(Position::new(0, 3)).is_none());
        assert!(!grid.is_walkable(Position::new(-1, 0)));
    }

    #[test]
    fn construction_rejects_incomplete_grids() {
        let id: MapId = "broken".into();
        let err = MapGrid::new(
            id.clone(),
            Position::ORIGIN,
            MapDimensions::new(2, 2),
            vec![Tile::new(Position::ORIGIN, TileKind::Ground)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MapError::TileCount {
                id,
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn construction_rejects_misplaced_tiles() {
        let tiles = vec![
            Tile::new(Position::new(0, 0), TileKind::Ground),
            Tile::new(Position::new(0, 0), TileKind::Ground),
        ];
        let err = MapGrid::new(
            "broken".into(),
            Position::ORIGIN,
            MapDimensions::new(2, 1),
            tiles,
        )
        .unwrap_err();
        assert!(matches!(err, MapError::MisplacedTile { index: 1, .. }));
    }

    #[test]
    fn construction_rejects_blocked_entry() {
        let err = MapGrid::new(
            "walled".into(),
            Position::ORIGIN,
            MapDimensions::new(1, 1),
            vec![Tile::new(Position::ORIGIN, TileKind::Wall)],
        )
        .unwrap_err();
        assert!(matches!(err, MapError::EntryNotWalkable { .. }));
    }

    #[test]
    fn rows_cover_the_grid_in_order() {
        let grid = grid_from_art("room", "other", Position::new(0, 1), &["##", ".#"]);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].position(), Position::new(0, 1));
        assert!(rows[1][0].is_walkable());
    }
}
