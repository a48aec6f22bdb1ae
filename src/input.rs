//! Keyboard dispatch for the game screen.

use crossterm::event::KeyCode;

/// Semantic commands produced from raw key events. `Primary` is
/// phase-dependent: it starts a run from the idle or game-over view and
/// flaps during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Primary,
    ToggleMute,
    Quit,
}

/// Map a key to a command, or `None` for keys the game ignores.
pub fn map_key(code: KeyCode) -> Option<GameCommand> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameCommand::Primary),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameCommand::ToggleMute),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_keys() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameCommand::Primary));
        assert_eq!(map_key(KeyCode::Up), Some(GameCommand::Primary));
        assert_eq!(map_key(KeyCode::Enter), Some(GameCommand::Primary));
    }

    #[test]
    fn test_mute_and_quit_keys() {
        assert_eq!(map_key(KeyCode::Char('m')), Some(GameCommand::ToggleMute));
        assert_eq!(map_key(KeyCode::Char('M')), Some(GameCommand::ToggleMute));
        assert_eq!(map_key(KeyCode::Char('q')), Some(GameCommand::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(GameCommand::Quit));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Down), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
