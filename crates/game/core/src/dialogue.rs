//! Progressive dialogue reveal state.

use crate::state::DialogueId;

/// One dialogue line being shown, with how much of it is revealed so far.
///
/// `revealed` counts bytes but only ever lands on char boundaries, so
/// [`DialogueState::visible`] is always a valid prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueState {
    id: DialogueId,
    text: String,
    revealed: usize,
}

impl DialogueState {
    /// Opens a line. With `animate` the text starts hidden and is revealed
    /// one character per [`DialogueState::advance`]; without it the full text
    /// shows immediately.
    pub fn open(id: DialogueId, text: impl Into<String>, animate: bool) -> Self {
        let text = text.into();
        let revealed = if animate { 0 } else { text.len() };
        Self { id, text, revealed }
    }

    pub fn id(&self) -> &DialogueId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.text.len()
    }

    /// Reveals one more character; false once the text is fully shown.
    pub fn advance(&mut self) -> bool {
        match self.text[self.revealed..].chars().next() {
            Some(ch) => {
                self.revealed += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn reveal_all(&mut self) {
        self.revealed = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animated_lines_reveal_one_char_at_a_time() {
        let mut dialogue = DialogueState::open("npc_1".into(), "Hi!", true);
        assert_eq!(dialogue.visible(), "");
        assert!(dialogue.advance());
        assert_eq!(dialogue.visible(), "H");
        assert!(dialogue.advance());
        assert!(dialogue.advance());
        assert_eq!(dialogue.visible(), "Hi!");
        assert!(dialogue.is_complete());
        assert!(!dialogue.advance());
    }

    #[test]
    fn unanimated_lines_show_instantly() {
        let dialogue = DialogueState::open("npc_1".into(), "Hello.", false);
        assert!(dialogue.is_complete());
        assert_eq!(dialogue.visible(), "Hello.");
    }

    #[test]
    fn advance_respects_multibyte_chars() {
        let mut dialogue = DialogueState::open("npc_1".into(), "héllo", true);
        assert!(dialogue.advance());
        assert!(dialogue.advance());
        assert_eq!(dialogue.visible(), "hé");
    }

    #[test]
    fn reveal_all_skips_to_the_end() {
        let mut dialogue = DialogueState::open("npc_1".into(), "A longer line.", true);
        dialogue.advance();
        dialogue.reveal_all();
        assert!(dialogue.is_complete());
        assert_eq!(dialogue.visible(), "A longer line.");
    }
}
