//! Key to action mapping

use crossterm::event::{KeyCode, KeyModifiers};

/// Vim-style key mapping (without modifiers)
pub fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Char('d') | KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char('u') | KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Action::Next),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => Some(Action::Back),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char(':') => Some(Action::Command),
        // 'q' is not mapped; quit with :q
        KeyCode::Char(c @ '1'..='9') => Some(Action::Choose(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Key mapping with modifiers
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::ScrollDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::ScrollUp),
            _ => None,
        }
    } else {
        vim_key_to_action(key)
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    ScrollUp,
    ScrollDown,

    // Selection
    Select,
    Next,
    Back,
    /// Quiz option by zero-based index
    Choose(usize),

    // Modes
    Help,
    Command,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(vim_key_to_action(KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(vim_key_to_action(KeyCode::Down), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(vim_key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn next_page_keys() {
        for key in [KeyCode::Char('l'), KeyCode::Char('n'), KeyCode::Right] {
            assert_eq!(vim_key_to_action(key), Some(Action::Next));
        }
    }

    #[test]
    fn digits_choose_options() {
        assert_eq!(vim_key_to_action(KeyCode::Char('1')), Some(Action::Choose(0)));
        assert_eq!(vim_key_to_action(KeyCode::Char('9')), Some(Action::Choose(8)));
        assert_eq!(vim_key_to_action(KeyCode::Char('0')), None);
    }

    #[test]
    fn q_is_not_mapped() {
        assert_eq!(vim_key_to_action(KeyCode::Char('q')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn no_modifier_uses_vim_keys() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::Down)
        );
    }
}
