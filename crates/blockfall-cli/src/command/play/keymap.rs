use blockfall_engine::{GameEvent, Key};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a terminal event into a game event.
///
/// Press and auto-repeat both count as key-down. Release events only arrive on
/// terminals that report them.
pub(crate) fn game_event(event: &Event) -> Option<GameEvent> {
    let key_event = event.as_key_event()?;
    if is_quit(&key_event) {
        return (!key_event.is_release()).then_some(GameEvent::Quit);
    }

    let key = match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => Key::Left,
        KeyCode::Right | KeyCode::Char('l') => Key::Right,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Up | KeyCode::Char('k') => Key::Rotate,
        KeyCode::Char('p' | 'P') => Key::Pause,
        _ => return None,
    };
    Some(match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => GameEvent::KeyDown(key),
        KeyEventKind::Release => GameEvent::KeyUp(key),
    })
}

fn is_quit(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ))
    }

    #[test]
    fn test_movement_keys() {
        let cases = [
            (KeyCode::Left, Key::Left),
            (KeyCode::Char('h'), Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Char('l'), Key::Right),
            (KeyCode::Down, Key::Down),
            (KeyCode::Char('j'), Key::Down),
            (KeyCode::Up, Key::Rotate),
            (KeyCode::Char('k'), Key::Rotate),
            (KeyCode::Char('p'), Key::Pause),
        ];
        for (code, key) in cases {
            assert_eq!(game_event(&press(code)), Some(GameEvent::KeyDown(key)), "{code:?}");
            assert_eq!(game_event(&release(code)), Some(GameEvent::KeyUp(key)), "{code:?}");
        }
    }

    #[test]
    fn test_repeat_is_key_down() {
        let event = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        assert_eq!(game_event(&event), Some(GameEvent::KeyDown(Key::Left)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(game_event(&press(KeyCode::Char('q'))), Some(GameEvent::Quit));
        assert_eq!(game_event(&press(KeyCode::Esc)), Some(GameEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(game_event(&ctrl_c), Some(GameEvent::Quit));
        assert_eq!(game_event(&release(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_unbound_events() {
        assert_eq!(game_event(&press(KeyCode::Char('c'))), None);
        assert_eq!(game_event(&press(KeyCode::Enter)), None);
        assert_eq!(game_event(&Event::Resize(80, 24)), None);
        assert_eq!(game_event(&Event::FocusGained), None);
    }
}
