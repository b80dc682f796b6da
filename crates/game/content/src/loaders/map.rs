//! Map data loader.
//!
//! Loads tile layouts from map RON files. Authored files list only the
//! interesting cells; everything unlisted defaults to ground.

use std::path::Path;

use game_core::{MapDimensions, MapGrid, MapId, Position, Tile, TileKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    id: String,
    entry: (i32, i32),
    dimensions: (u32, u32),
    tiles: Vec<(i32, i32, TileKind)>, // (x, y, kind)
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load and validate a map from a RON file on disk.
    pub fn load(path: &Path) -> LoadResult<MapGrid> {
        Self::parse(&read_file(path)?)
    }

    /// Parse and validate a map from RON text (used for the embedded demo
    /// maps as well as files).
    pub fn parse(content: &str) -> LoadResult<MapGrid> {
        let data: MapDataRon =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let width = dimensions.width as usize;

        // Fill the whole grid with ground first, then apply the authored
        // overrides.
        let mut tiles: Vec<Tile> = (0..dimensions.height as i32)
            .flat_map(|y| {
                (0..dimensions.width as i32)
                    .map(move |x| Tile::new(Position::new(x, y), TileKind::Ground))
            })
            .collect();

        for (x, y, kind) in data.tiles {
            let position = Position::new(x, y);
            if !dimensions.contains(position) {
                anyhow::bail!(
                    "map {} authors tile {} outside its {}x{} bounds",
                    data.id,
                    position,
                    dimensions.width,
                    dimensions.height
                );
            }
            tiles[y as usize * width + x as usize] = Tile::new(position, kind);
        }

        let entry = Position::new(data.entry.0, data.entry.1);
        MapGrid::new(MapId::new(data.id), entry, dimensions, tiles)
            .map_err(|e| anyhow::anyhow!("invalid map data: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_map() {
        let grid = MapLoader::parse(
            r#"(
                id: "test",
                entry: (1, 1),
                dimensions: (3, 3),
                tiles: [
                    (0, 0, Wall),
                    (2, 2, Door(destination: "test")),
                    (2, 0, Npc(dialogue: Some("npc_1"), color: None)),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(grid.id().as_str(), "test");
        assert_eq!(grid.entry(), Position::new(1, 1));
        assert!(!grid.is_walkable(Position::new(0, 0)));
        assert!(grid.is_walkable(Position::new(1, 0))); // unlisted -> ground
        assert_eq!(
            grid.tile_at(Position::new(2, 2)).unwrap().door_destination(),
            Some(&"test".into())
        );
        assert_eq!(
            grid.tile_at(Position::new(2, 0)).unwrap().npc_dialogue(),
            Some(&"npc_1".into())
        );
    }

    #[test]
    fn rejects_tiles_authored_out_of_bounds() {
        let err = MapLoader::parse(
            r#"(
                id: "test",
                entry: (0, 0),
                dimensions: (2, 2),
                tiles: [(5, 5, Wall)],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(MapLoader::parse("not a map").is_err());
    }

    #[test]
    fn rejects_blocked_entry_points() {
        let err = MapLoader::parse(
            r#"(
                id: "test",
                entry: (0, 0),
                dimensions: (2, 2),
                tiles: [(0, 0, Wall)],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not walkable"));
    }
}
