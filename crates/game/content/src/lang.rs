//! UI string tables.
//!
//! English and Dutch are authored in full; the remaining locales offered by
//! the settings screen fall back to English until their tables land.

use game_core::Language;

/// Every user-facing string the client renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKey {
    Play,
    HowToPlay,
    BackToMenu,
    MovementSpeed,
    LanguageName,
    ShowTileLabels,
    DialogueAnimation,
    ResetSettings,
    Settings,
    Items,
    Save,
    Load,
    Close,
    NoItems,
    SaveGame,
    LoadGame,
    Slot,
    Empty,
    SaveToSlot,
    LoadSlot,
    DeleteSlot,
    HowToPlayTitle,
    InstructionMove,
    InstructionInteract,
    InstructionWalls,
    NpcSays,
}

/// Looks up `key` for `lang`, falling back to English for locales without an
/// authored table.
pub fn text(key: TextKey, lang: Language) -> &'static str {
    translation(key, lang).unwrap_or_else(|| english(key))
}

fn translation(key: TextKey, lang: Language) -> Option<&'static str> {
    match lang {
        Language::En => Some(english(key)),
        Language::Nl => Some(dutch(key)),
        Language::Jp | Language::Ru | Language::Ar => None,
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Play => "Play",
        TextKey::HowToPlay => "How to Play",
        TextKey::BackToMenu => "Back to Main Menu",
        TextKey::MovementSpeed => "Movement Speed",
        TextKey::LanguageName => "Language",
        TextKey::ShowTileLabels => "Show Tile Labels",
        TextKey::DialogueAnimation => "Dialogue Animation",
        TextKey::ResetSettings => "Reset All Settings",
        TextKey::Settings => "Settings",
        TextKey::Items => "Items",
        TextKey::Save => "Save",
        TextKey::Load => "Load",
        TextKey::Close => "Close",
        TextKey::NoItems => "No items",
        TextKey::SaveGame => "Save Game",
        TextKey::LoadGame => "Load Game",
        TextKey::Slot => "Slot",
        TextKey::Empty => "Empty",
        TextKey::SaveToSlot => "Save to Slot",
        TextKey::LoadSlot => "Load Slot",
        TextKey::DeleteSlot => "Delete Slot",
        TextKey::HowToPlayTitle => "How to Play:",
        TextKey::InstructionMove => "Select a gray tile to move.",
        TextKey::InstructionInteract => "Activate a colored circle (NPC) twice to interact.",
        TextKey::InstructionWalls => "Dark tiles are walls — they block movement.",
        TextKey::NpcSays => "NPC says:",
    }
}

fn dutch(key: TextKey) -> &'static str {
    match key {
        TextKey::Play => "Spelen",
        TextKey::HowToPlay => "Hoe te spelen",
        TextKey::BackToMenu => "Terug naar menu",
        TextKey::MovementSpeed => "Bewegingssnelheid",
        TextKey::LanguageName => "Taal",
        TextKey::ShowTileLabels => "Tegeltekst tonen",
        TextKey::DialogueAnimation => "Dialooganimatie",
        TextKey::ResetSettings => "Reset instellingen",
        TextKey::Settings => "Instellingen",
        TextKey::Items => "Voorwerpen",
        TextKey::Save => "Opslaan",
        TextKey::Load => "Laden",
        TextKey::Close => "Sluiten",
        TextKey::NoItems => "Geen items",
        TextKey::SaveGame => "Spel opslaan",
        TextKey::LoadGame => "Spel laden",
        TextKey::Slot => "Slot",
        TextKey::Empty => "Leeg",
        TextKey::SaveToSlot => "Opslaan naar slot",
        TextKey::LoadSlot => "Laad slot",
        TextKey::DeleteSlot => "Verwijder slot",
        TextKey::HowToPlayTitle => "Spelregels:",
        TextKey::InstructionMove => "Kies een grijze tegel om te bewegen.",
        TextKey::InstructionInteract => "Activeer een gekleurde cirkel (NPC) twee keer om te praten.",
        TextKey::InstructionWalls => "Donkere tegels zijn muren — ze blokkeren beweging.",
        TextKey::NpcSays => "NPC zegt:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dutch_is_fully_authored() {
        assert_eq!(text(TextKey::Play, Language::Nl), "Spelen");
        assert_eq!(text(TextKey::NoItems, Language::Nl), "Geen items");
    }

    #[test]
    fn unauthored_locales_fall_back_to_english() {
        for lang in [Language::Jp, Language::Ru, Language::Ar] {
            assert_eq!(text(TextKey::Play, lang), text(TextKey::Play, Language::En));
        }
    }
}
