use super::keys::{Action, action_for_key, seek_target};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn transport_keys_map_to_actions() {
    assert_eq!(action_for_key(key(KeyCode::Char(' ')), 5), Some(Action::Toggle));
    assert_eq!(action_for_key(key(KeyCode::Char('p')), 5), Some(Action::Play));
    assert_eq!(action_for_key(key(KeyCode::Char('s')), 5), Some(Action::Pause));
    assert_eq!(action_for_key(key(KeyCode::Char('l')), 5), Some(Action::Next));
    assert_eq!(action_for_key(key(KeyCode::Char('h')), 5), Some(Action::Previous));
    assert_eq!(action_for_key(key(KeyCode::Esc), 5), Some(Action::Quit));
    assert_eq!(action_for_key(key(KeyCode::Char('x')), 5), None);
}

#[test]
fn seek_keys_use_configured_step() {
    assert_eq!(action_for_key(key(KeyCode::Char('L')), 7), Some(Action::SeekBy(7.0)));
    assert_eq!(action_for_key(key(KeyCode::Char('H')), 7), Some(Action::SeekBy(-7.0)));
    assert_eq!(action_for_key(key(KeyCode::Char('3')), 7), Some(Action::SeekTenth(3)));
}

#[test]
fn ctrl_c_quits_and_other_chords_are_ignored() {
    let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
    assert_eq!(action_for_key(ctrl('c'), 5), Some(Action::Quit));
    assert_eq!(action_for_key(ctrl('l'), 5), None);
}

#[test]
fn seek_target_is_absolute_and_unclamped() {
    assert_eq!(seek_target(Action::SeekBy(5.0), 10.0, 200.0), Some(15.0));
    assert_eq!(seek_target(Action::SeekBy(-5.0), 2.0, 200.0), Some(-3.0));
    assert_eq!(seek_target(Action::SeekTenth(5), 0.0, 200.0), Some(100.0));
    assert_eq!(seek_target(Action::SeekTenth(0), 50.0, 200.0), Some(0.0));
    assert_eq!(seek_target(Action::Toggle, 10.0, 200.0), None);
}
