//! Activation dispatcher: classifies a tile activation into its effect.

use crate::map::Tile;
use crate::state::{DialogueId, Position};

/// How the user selected the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Single,
    Double,
}

/// The effect an activation produces. `NoOp` is a first-class answer: walls,
/// mute NPCs, and double-activations of plain tiles all resolve to it, and
/// never to a partial movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Open the named dialogue line (text resolution is a content concern).
    StartDialogue(DialogueId),
    /// Navigate to the tile; the caller feeds this goal to the path finder
    /// with the player's current position as start.
    StartNavigation(Position),
    NoOp,
}

/// Decision table:
/// double-activating an NPC that carries a dialogue line talks; activating
/// any walkable tile (ground or door, single or double) navigates; everything
/// else is ignored.
pub fn dispatch(tile: &Tile, activation: Activation) -> Effect {
    if activation == Activation::Double
        && let Some(dialogue) = tile.npc_dialogue()
    {
        return Effect::StartDialogue(dialogue.clone());
    }

    if tile.is_walkable() {
        return Effect::StartNavigation(tile.position());
    }

    Effect::NoOp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileKind;
    use crate::state::Position;

    fn tile(kind: TileKind) -> Tile {
        Tile::new(Position::new(4, 2), kind)
    }

    #[test]
    fn double_activating_a_talkative_npc_starts_dialogue() {
        let npc = tile(TileKind::Npc {
            dialogue: Some("npc_1".into()),
            color: Some("#2aa".into()),
        });
        assert_eq!(
            dispatch(&npc, Activation::Double),
            Effect::StartDialogue("npc_1".into())
        );
    }

    #[test]
    fn single_activating_an_npc_does_nothing() {
        let npc = tile(TileKind::Npc {
            dialogue: Some("npc_1".into()),
            color: None,
        });
        assert_eq!(dispatch(&npc, Activation::Single), Effect::NoOp);
    }

    #[test]
    fn npc_without_dialogue_is_inert() {
        let npc = tile(TileKind::Npc {
            dialogue: None,
            color: None,
        });
        assert_eq!(dispatch(&npc, Activation::Double), Effect::NoOp);
        assert_eq!(dispatch(&npc, Activation::Single), Effect::NoOp);
    }

    #[test]
    fn walkable_tiles_navigate_on_either_activation() {
        let ground = tile(TileKind::Ground);
        let door = tile(TileKind::Door {
            destination: "map02".into(),
        });
        let goal = Position::new(4, 2);
        assert_eq!(
            dispatch(&ground, Activation::Single),
            Effect::StartNavigation(goal)
        );
        assert_eq!(
            dispatch(&ground, Activation::Double),
            Effect::StartNavigation(goal)
        );
        assert_eq!(
            dispatch(&door, Activation::Single),
            Effect::StartNavigation(goal)
        );
    }

    #[test]
    fn walls_are_ignored() {
        let wall = tile(TileKind::Wall);
        assert_eq!(dispatch(&wall, Activation::Single), Effect::NoOp);
        assert_eq!(dispatch(&wall, Activation::Double), Effect::NoOp);
    }
}
