use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    CloseOverlay,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Flip,
    StartOrPause,
    Pause,
    Reset,
    PairsSix,
    PairsEight,
    PairsTen,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::CloseOverlay,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Enter => InputAction::Flip,
        KeyCode::Char(' ') => InputAction::StartOrPause,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('f') => InputAction::Flip,
        KeyCode::Char('p') => InputAction::Pause,
        KeyCode::Char('r') => InputAction::Reset,
        KeyCode::Char('1') => InputAction::PairsSix,
        KeyCode::Char('2') => InputAction::PairsEight,
        KeyCode::Char('3') => InputAction::PairsTen,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)),
            InputAction::Flip
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Flip
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            InputAction::StartOrPause
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            InputAction::Reset
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }

    #[test]
    fn maps_pair_count_selectors() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            InputAction::PairsSix
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
            InputAction::PairsEight
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            InputAction::PairsTen
        );
    }

    #[test]
    fn vim_movement_mirrors_arrows() {
        for (vim, arrow) in [
            (KeyCode::Char('h'), KeyCode::Left),
            (KeyCode::Char('j'), KeyCode::Down),
            (KeyCode::Char('k'), KeyCode::Up),
            (KeyCode::Char('l'), KeyCode::Right),
        ] {
            assert_eq!(
                map_key(KeyEvent::new(vim, KeyModifiers::NONE)),
                map_key(KeyEvent::new(arrow, KeyModifiers::NONE))
            );
        }
    }
}
