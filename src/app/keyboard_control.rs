use ggez::input::keyboard::KeyCode;

use crate::game::Key;

/// Arrow keys and WASD steer, space starts and restarts,
/// escape quits from the game over screen
pub fn translate(keycode: KeyCode) -> Option<Key> {
    use KeyCode::*;

    let key = match keycode {
        Up => Key::Up,
        Down => Key::Down,
        Left => Key::Left,
        Right => Key::Right,
        W => Key::W,
        A => Key::A,
        S => Key::S,
        D => Key::D,
        Space => Key::Space,
        Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

#[test]
fn test_translate() {
    assert_eq!(translate(KeyCode::Up), Some(Key::Up));
    assert_eq!(translate(KeyCode::A), Some(Key::A));
    assert_eq!(translate(KeyCode::Space), Some(Key::Space));
    assert_eq!(translate(KeyCode::Escape), Some(Key::Escape));
    assert_eq!(translate(KeyCode::Q), None);
    assert_eq!(translate(KeyCode::Return), None);
}
