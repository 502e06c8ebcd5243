use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Keyboard keys and mouse buttons
///
/// Scripts name keys with their own vocabulary (`lshift`, `lmouse`, ...).
/// The table maps those names to the identifier handed to the automation
/// backend.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Keyboard(&'static str),
    Mouse(MouseButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

const NAMED: &[(&str, Key)] = &[
    ("lshift", Key::Keyboard("shift")),
    ("rshift", Key::Keyboard("shift")),
    ("lctrl", Key::Keyboard("ctrl")),
    ("rctrl", Key::Keyboard("ctrl")),
    ("lalt", Key::Keyboard("alt")),
    ("ralt", Key::Keyboard("alt")),
    ("space", Key::Keyboard("space")),
    ("enter", Key::Keyboard("enter")),
    ("backspace", Key::Keyboard("backspace")),
    ("tab", Key::Keyboard("tab")),
    ("esc", Key::Keyboard("esc")),
    ("delete", Key::Keyboard("delete")),
    ("insert", Key::Keyboard("insert")),
    ("home", Key::Keyboard("home")),
    ("end", Key::Keyboard("end")),
    ("pageup", Key::Keyboard("pageup")),
    ("pagedown", Key::Keyboard("pagedown")),
    ("up", Key::Keyboard("up")),
    ("down", Key::Keyboard("down")),
    ("left", Key::Keyboard("left")),
    ("right", Key::Keyboard("right")),
    ("numlock", Key::Keyboard("numlock")),
    ("capslock", Key::Keyboard("capslock")),
    ("scrolllock", Key::Keyboard("scrolllock")),
    ("pause", Key::Keyboard("pause")),
    ("printscreen", Key::Keyboard("printscreen")),
    ("windows", Key::Keyboard("win")),
    ("lmouse", Key::Mouse(MouseButton::Left)),
    ("rmouse", Key::Mouse(MouseButton::Right)),
    ("numpadadd", Key::Keyboard("numpadadd")),
    ("numpadsub", Key::Keyboard("numpadsub")),
    ("numpadmul", Key::Keyboard("numpadmul")),
    ("numpaddiv", Key::Keyboard("numpaddiv")),
    ("numpaddecimal", Key::Keyboard("numpaddecimal")),
    ("numpadenter", Key::Keyboard("numpadenter")),
    ("semicolon", Key::Keyboard(";")),
    ("equals", Key::Keyboard("=")),
    ("comma", Key::Keyboard(",")),
    ("minus", Key::Keyboard("-")),
    ("period", Key::Keyboard(".")),
    ("slash", Key::Keyboard("/")),
    ("backslash", Key::Keyboard("\\")),
    ("openbracket", Key::Keyboard("[")),
    ("closebracket", Key::Keyboard("]")),
    ("quote", Key::Keyboard("'")),
];

const LETTERS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];
const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const FUNCTION: [&str; 12] = [
    "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
];
const NUMPAD: [&str; 10] = [
    "numpad0", "numpad1", "numpad2", "numpad3", "numpad4", "numpad5", "numpad6", "numpad7",
    "numpad8", "numpad9",
];

thread_local!(
    static NAME_TO_KEY: HashMap<&'static str, Key> = NAMED
        .iter()
        .copied()
        .chain(
            LETTERS
                .iter()
                .chain(DIGITS.iter())
                .chain(FUNCTION.iter())
                .chain(NUMPAD.iter())
                .map(|&s| (s, Key::Keyboard(s))),
        )
        .collect();
);

impl Key {
    pub fn from_name(name: &str) -> Option<Key> {
        NAME_TO_KEY.with(|ntk| ntk.get(name).copied())
    }

    pub fn lookup(name: &str) -> Result<Key> {
        match Key::from_name(name) {
            Some(key) => Ok(key),
            None => Err(error!(UndefinedReference; "invalid key: {}", name)),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Key::Keyboard(s) => write!(f, "{}", s),
            Key::Mouse(MouseButton::Left) => write!(f, "mouse left"),
            Key::Mouse(MouseButton::Right) => write!(f, "mouse right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lookup() {
        assert_eq!(Key::from_name("lshift"), Some(Key::Keyboard("shift")));
        assert_eq!(Key::from_name("q"), Some(Key::Keyboard("q")));
        assert_eq!(Key::from_name("7"), Some(Key::Keyboard("7")));
        assert_eq!(Key::from_name("f12"), Some(Key::Keyboard("f12")));
        assert_eq!(Key::from_name("numpad3"), Some(Key::Keyboard("numpad3")));
        assert_eq!(Key::from_name("lmouse"), Some(Key::Mouse(MouseButton::Left)));
        assert_eq!(Key::from_name("semicolon"), Some(Key::Keyboard(";")));
        assert_eq!(
            Key::from_name("numpadenter"),
            Some(Key::Keyboard("numpadenter"))
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Key::from_name("Q"), None);
        assert_eq!(
            Key::lookup("LShift").unwrap_err().code(),
            ErrorCode::UndefinedReference
        );
    }
}
