//! NPC dialogue lines, keyed by the dialogue id authored on the tile.

use game_core::{DialogueId, Language};

/// Resolves a dialogue id to its localized line; English when the locale has
/// no translation, `None` for ids no content authors.
pub fn line(id: &DialogueId, lang: Language) -> Option<&'static str> {
    match (id.as_str(), lang) {
        ("npc_1", Language::Nl) => Some("Dit is niet het begin. Het is ervoor."),
        ("npc_1", _) => Some("This isn't the beginning. It's before that."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_lines_resolve_with_locale_fallback() {
        let id: DialogueId = "npc_1".into();
        assert!(line(&id, Language::En).unwrap().contains("beginning"));
        assert!(line(&id, Language::Nl).unwrap().contains("begin"));
        assert_eq!(line(&id, Language::Jp), line(&id, Language::En));
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        assert_eq!(line(&"npc_99".into(), Language::En), None);
    }
}
