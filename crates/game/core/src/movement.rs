//! Step-playback state machine that walks the player along a computed route.
//!
//! The player owns the pending route exclusively and consumes it one step per
//! call. Pacing is deliberately absent: the runtime decides *when* to call
//! [`MovementPlayer::step`]; this module decides *what* a step does, so the
//! whole machine is testable tick-by-tick.

use std::collections::VecDeque;

use crate::map::Tile;
use crate::path::Route;
use crate::registry::RegistryError;
use crate::state::{MapId, Position, Session};

/// Playback phases: `Idle` (no pending route) or `Stepping` (route pending).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Stepping,
}

/// What a single step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Advanced one tile; more steps remain.
    Stepped { position: Position },
    /// Final step landed on an ordinary walkable tile.
    Arrived { position: Position },
    /// Final step landed on a door: the active grid switched to `map` and the
    /// player now stands at that map's entry point.
    Transitioned { map: MapId, position: Position },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("step requested while no route is pending")]
    NotStepping,

    /// A door named a map that was never registered. Authoring error;
    /// unreachable once the registry validated at bootstrap.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Owns the pending route and applies it to the session, one tile per step.
#[derive(Debug, Default)]
pub struct MovementPlayer {
    route: VecDeque<Position>,
}

impl MovementPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        if self.route.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Stepping
        }
    }

    pub fn is_stepping(&self) -> bool {
        self.state() == PlaybackState::Stepping
    }

    pub fn remaining(&self) -> usize {
        self.route.len()
    }

    /// Supplies a new route. An empty route is ignored (nothing to play); a
    /// non-empty one replaces whatever was pending outright (no queuing, no
    /// merging), so playback continues from the player's actual position with
    /// the new steps only.
    ///
    /// Returns whether playback is now pending.
    pub fn begin(&mut self, route: Route) -> bool {
        if route.is_empty() {
            return false;
        }
        self.route = route.into();
        true
    }

    /// Drops the pending route without moving the player.
    pub fn cancel(&mut self) {
        self.route.clear();
    }

    /// Pops the head of the route and applies it as the player's position.
    ///
    /// When the pop empties the route, the arrival tile decides the outcome:
    /// a door switches the registry's active grid to its destination and
    /// respawns the player at that map's entry point; anything else is a
    /// plain arrival.
    pub fn step(&mut self, session: &mut Session) -> Result<StepOutcome, StepError> {
        let next = self.route.pop_front().ok_or(StepError::NotStepping)?;
        session.player.position = next;

        if !self.route.is_empty() {
            return Ok(StepOutcome::Stepped { position: next });
        }

        let destination = session
            .registry
            .active()
            .tile_at(next)
            .and_then(Tile::door_destination)
            .cloned();

        match destination {
            Some(map) => {
                let entry = session.registry.set_active(&map)?.entry();
                session.player.position = entry;
                Ok(StepOutcome::Transitioned {
                    map,
                    position: entry,
                })
            }
            None => Ok(StepOutcome::Arrived { position: next }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tests::grid_from_art;
    use crate::path::find_path;
    use crate::registry::MapRegistry;

    /// Two connected 10x10 maps shaped like the authored demo pair: border
    /// walls, a wall column at x=5 broken by a door at (5,2).
    fn two_map_session() -> Session {
        let map_a = grid_from_art(
            "map01",
            "map02",
            Position::new(1, 1),
            &[
                "##########",
                "#....#...#",
                "#....D...#",
                "#..N.#...#",
                "#....#...#",
                "#....#...#",
                "#....#...#",
                "#....#...#",
                "#....#...#",
                "##########",
            ],
        );
        let map_b = grid_from_art(
            "map02",
            "map01",
            Position::new(1, 1),
            &[
                "##########",
                "#........#",
                "#.D......#",
                "#........#",
                "#........#",
                "#........#",
                "#........#",
                "#........#",
                "#........#",
                "##########",
            ],
        );
        let mut registry = MapRegistry::new(map_a);
        registry.register(map_b);
        registry.validate().unwrap();
        Session::new(registry)
    }

    #[test]
    fn plays_back_exactly_route_len_steps() {
        let mut session = two_map_session();
        let mut player = MovementPlayer::new();
        let route = find_path(
            session.registry.active(),
            session.player.position,
            Position::new(4, 2),
        );
        assert_eq!(route.len(), 4);
        assert!(player.begin(route));

        let mut updates = 0;
        while player.is_stepping() {
            let outcome = player.step(&mut session).unwrap();
            updates += 1;
            if updates < 4 {
                assert!(matches!(outcome, StepOutcome::Stepped { .. }));
            } else {
                assert_eq!(
                    outcome,
                    StepOutcome::Arrived {
                        position: Position::new(4, 2)
                    }
                );
            }
        }
        assert_eq!(updates, 4);
        assert_eq!(session.player.position, Position::new(4, 2));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn stepping_while_idle_is_an_error() {
        let mut session = two_map_session();
        let mut player = MovementPlayer::new();
        assert_eq!(player.step(&mut session).unwrap_err(), StepError::NotStepping);
    }

    #[test]
    fn empty_routes_never_start_playback() {
        let mut player = MovementPlayer::new();
        assert!(!player.begin(Route::new()));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn new_route_supersedes_the_pending_one() {
        let mut session = two_map_session();
        let mut player = MovementPlayer::new();
        let long = find_path(
            session.registry.active(),
            session.player.position,
            Position::new(4, 8),
        );
        assert!(player.begin(long));
        player.step(&mut session).unwrap();

        // Re-plan from the player's actual position mid-flight.
        let short = find_path(
            session.registry.active(),
            session.player.position,
            Position::new(1, 1),
        );
        let expected = short.len();
        assert!(player.begin(short));

        let mut remaining_steps = 0;
        while player.is_stepping() {
            player.step(&mut session).unwrap();
            remaining_steps += 1;
        }
        // Total future steps match the new route only, not the old remainder.
        assert_eq!(remaining_steps, expected);
        assert_eq!(session.player.position, Position::new(1, 1));
    }

    #[test]
    fn cancel_discards_the_route_in_place() {
        let mut session = two_map_session();
        let mut player = MovementPlayer::new();
        player.begin(find_path(
            session.registry.active(),
            session.player.position,
            Position::new(4, 2),
        ));
        player.step(&mut session).unwrap();
        let parked = session.player.position;

        player.cancel();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(session.player.position, parked);
    }

    #[test]
    fn door_arrival_switches_map_and_respawns_at_entry() {
        let mut session = two_map_session();
        let mut player = MovementPlayer::new();

        // Walk next to the door, then onto it.
        session.player.position = Position::new(4, 2);
        let route = find_path(
            session.registry.active(),
            session.player.position,
            Position::new(5, 2),
        );
        assert_eq!(route.len(), 1);
        player.begin(route);

        let outcome = player.step(&mut session).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Transitioned {
                map: "map02".into(),
                position: Position::new(1, 1),
            }
        );
        assert_eq!(session.registry.active_id().as_str(), "map02");
        assert_eq!(session.player.position, Position::new(1, 1));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn door_to_unregistered_map_surfaces_the_registry_error() {
        let grid = grid_from_art(
            "lonely",
            "nowhere",
            Position::new(1, 1),
            &["####", "#.D#", "####"],
        );
        let mut session = Session::new(MapRegistry::new(grid));
        let mut player = MovementPlayer::new();
        player.begin(vec![Position::new(2, 1)]);

        let err = player.step(&mut session).unwrap_err();
        assert!(matches!(
            err,
            StepError::Registry(RegistryError::UnknownMap(_))
        ));
    }
}
