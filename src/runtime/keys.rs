use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the player to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Quit,
    Toggle,
    Play,
    Pause,
    Next,
    Previous,
    /// Relative jump in seconds, turned into an absolute seek.
    SeekBy(f64),
    /// Jump to `n` tenths of the track.
    SeekTenth(u8),
}

pub fn action_for_key(key: KeyEvent, seek_seconds: u64) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let step = seek_seconds as f64;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('p') => Some(Action::Play),
        KeyCode::Char('s') => Some(Action::Pause),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Action::Next),
        KeyCode::Char('h') | KeyCode::Char('b') | KeyCode::Left => Some(Action::Previous),
        KeyCode::Char('L') => Some(Action::SeekBy(step)),
        KeyCode::Char('H') => Some(Action::SeekBy(-step)),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::SeekTenth(c as u8 - b'0')),
        _ => None,
    }
}

/// Absolute position for a seek action, given the displayed slider state.
///
/// No clamping: the transport forwards whatever comes out of here.
pub fn seek_target(action: Action, position: f64, duration: f64) -> Option<f64> {
    match action {
        Action::SeekBy(delta) => Some(position + delta),
        Action::SeekTenth(n) => Some(duration * f64::from(n) / 10.0),
        _ => None,
    }
}
