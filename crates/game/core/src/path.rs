//! Breadth-first route search over the 4-connected tile neighborhood.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::map::MapGrid;
use crate::state::Position;

/// Ordered steps from (excluding) the start to (including) the goal.
/// Empty means "no path" or "already there"; callers must not treat the two
/// as distinct movement outcomes; neither produces any playback.
pub type Route = Vec<Position>;

/// Fixed expansion order. Ties between equal-length routes resolve by this
/// order, which keeps results deterministic for identical inputs.
const NEIGHBOR_ORDER: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Computes the shortest walkable route between two cells of `grid`.
///
/// Uniform step cost, no diagonals. Cells are marked visited when enqueued,
/// never re-expanded, and the search returns as soon as the goal is
/// generated. An unreachable, non-walkable, or out-of-range goal yields an
/// empty route. Each call is stateless: O(width * height) time and space,
/// nothing cached across calls.
pub fn find_path(grid: &MapGrid, start: Position, goal: Position) -> Route {
    if start == goal {
        return Route::new();
    }

    let mut visited: HashSet<Position> = HashSet::from([start]);
    let mut parents: HashMap<Position, Position> = HashMap::new();
    let mut frontier: VecDeque<Position> = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        for (dx, dy) in NEIGHBOR_ORDER {
            let next = Position::new(current.x + dx, current.y + dy);
            if visited.contains(&next) || !grid.is_walkable(next) {
                continue;
            }
            parents.insert(next, current);
            if next == goal {
                return reconstruct(&parents, start, goal);
            }
            visited.insert(next);
            frontier.push_back(next);
        }
    }

    Route::new()
}

/// Walks the parent links back from the goal and reverses them into a route.
fn reconstruct(parents: &HashMap<Position, Position>, start: Position, goal: Position) -> Route {
    let mut route = vec![goal];
    let mut cursor = goal;
    while let Some(&previous) = parents.get(&cursor) {
        if previous == start {
            break;
        }
        route.push(previous);
        cursor = previous;
    }
    route.reverse();
    route
}
