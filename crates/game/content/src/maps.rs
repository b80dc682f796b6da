//! The embedded demo map set.

use game_core::{MapGrid, MapRegistry};

use crate::loaders::{LoadResult, MapLoader};

const MAP01_RON: &str = include_str!("../assets/maps/map01.ron");
const MAP02_RON: &str = include_str!("../assets/maps/map02.ron");

/// The map a fresh session starts on.
pub const STARTING_MAP: &str = "map01";

/// Loads and validates every authored demo map, starting map first.
pub fn builtin_maps() -> LoadResult<Vec<MapGrid>> {
    Ok(vec![MapLoader::parse(MAP01_RON)?, MapLoader::parse(MAP02_RON)?])
}

/// Builds a registry over the demo set with [`STARTING_MAP`] active and all
/// door destinations cross-checked.
pub fn builtin_registry() -> LoadResult<MapRegistry> {
    let mut maps = builtin_maps()?.into_iter();
    let first = maps.next().expect("builtin map set is non-empty");
    let mut registry = MapRegistry::new(first);
    for grid in maps {
        registry.register(grid);
    }
    registry.set_active(&STARTING_MAP.into())?;
    registry.validate()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;

    #[test]
    fn demo_maps_match_their_authored_layout() {
        let maps = builtin_maps().unwrap();
        assert_eq!(maps.len(), 2);

        let map01 = &maps[0];
        assert_eq!(map01.id().as_str(), "map01");
        assert_eq!(map01.dimensions().width, 10);
        assert_eq!(map01.dimensions().height, 10);
        assert_eq!(map01.entry(), Position::new(1, 1));
        assert_eq!(
            map01
                .tile_at(Position::new(5, 2))
                .unwrap()
                .door_destination(),
            Some(&"map02".into())
        );
        assert_eq!(
            map01.tile_at(Position::new(3, 3)).unwrap().npc_dialogue(),
            Some(&"npc_1".into())
        );
        // Border and divider are walls.
        assert!(!map01.is_walkable(Position::new(0, 0)));
        assert!(!map01.is_walkable(Position::new(5, 4)));

        let map02 = &maps[1];
        assert_eq!(
            map02
                .tile_at(Position::new(2, 2))
                .unwrap()
                .door_destination(),
            Some(&"map01".into())
        );
    }

    #[test]
    fn builtin_registry_is_closed_and_starts_on_map01() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.active_id().as_str(), STARTING_MAP);
        assert_eq!(registry.ids().count(), 2);
    }
}
