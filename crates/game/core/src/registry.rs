//! Map registry: id-keyed grid storage plus the active-grid pointer.

use std::collections::HashMap;

use crate::map::MapGrid;
use crate::state::{MapId, Position};

/// Errors raised by registry lookups and cross-map validation.
///
/// Both variants are authoring/data errors: callers abort loudly rather than
/// retry, and correctly authored content never produces them after
/// [`MapRegistry::validate`] has passed at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown map id {0}")]
    UnknownMap(MapId),

    #[error("door at {position} on map {map} targets unregistered map {destination}")]
    UnknownDestination {
        map: MapId,
        position: Position,
        destination: MapId,
    },
}

/// Owns every authored [`MapGrid`] and tracks which one is active.
///
/// Switching the active grid is instantaneous and never moves the player;
/// repositioning after a door transition is the movement player's job.
#[derive(Debug)]
pub struct MapRegistry {
    maps: HashMap<MapId, MapGrid>,
    active: MapId,
}

impl MapRegistry {
    /// Creates a registry with `initial` registered and active.
    pub fn new(initial: MapGrid) -> Self {
        let active = initial.id().clone();
        let mut maps = HashMap::new();
        maps.insert(active.clone(), initial);
        Self { maps, active }
    }

    /// Registers a grid under its own id, replacing any previous entry.
    pub fn register(&mut self, grid: MapGrid) {
        self.maps.insert(grid.id().clone(), grid);
    }

    /// Switches the active grid. Unknown ids leave the active grid untouched.
    pub fn set_active(&mut self, id: &MapId) -> Result<&MapGrid, RegistryError> {
        if !self.maps.contains_key(id) {
            return Err(RegistryError::UnknownMap(id.clone()));
        }
        self.active = id.clone();
        Ok(&self.maps[&self.active])
    }

    pub fn active(&self) -> &MapGrid {
        self.maps
            .get(&self.active)
            .expect("active map id is always registered")
    }

    pub fn active_id(&self) -> &MapId {
        &self.active
    }

    pub fn get(&self, id: &MapId) -> Option<&MapGrid> {
        self.maps.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &MapId> {
        self.maps.keys()
    }

    /// Checks that every door on every registered grid targets a registered
    /// map. Run once at session bootstrap so transitions cannot fail mid-play.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for grid in self.maps.values() {
            for tile in grid.tiles() {
                if let Some(destination) = tile.door_destination()
                    && !self.maps.contains_key(destination)
                {
                    return Err(RegistryError::UnknownDestination {
                        map: grid.id().clone(),
                        position: tile.position(),
                        destination: destination.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
