use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Space,
    Backspace,
    Delete,
    Tab,
    Escape,
    Shift,
    Ctrl,
    Alt,
    Cmd,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// One key on the keyboard, independent of how the client spelled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Named(NamedKey),
}

impl From<NamedKey> for KeyToken {
    fn from(key: NamedKey) -> Self {
        KeyToken::Named(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("empty key identifier")]
    Empty,

    #[error("unknown arrow direction in {0:?}")]
    UnknownArrow(String),

    #[error("{0:?} is neither a named key nor a single character")]
    Unknown(String),
}

// First entry wins when naming a key back (`enter` over `return`).
const NAMED_KEYS: &[(&str, NamedKey)] = &[
    ("enter", NamedKey::Enter),
    ("return", NamedKey::Enter),
    ("space", NamedKey::Space),
    ("backspace", NamedKey::Backspace),
    ("delete", NamedKey::Delete),
    ("tab", NamedKey::Tab),
    ("escape", NamedKey::Escape),
    ("shift", NamedKey::Shift),
    ("ctrl", NamedKey::Ctrl),
    ("alt", NamedKey::Alt),
    ("cmd", NamedKey::Cmd),
    ("up", NamedKey::Up),
    ("down", NamedKey::Down),
    ("left", NamedKey::Left),
    ("right", NamedKey::Right),
    ("home", NamedKey::Home),
    ("end", NamedKey::End),
    ("page_up", NamedKey::PageUp),
    ("page_down", NamedKey::PageDown),
    ("caps_lock", NamedKey::CapsLock),
    ("f1", NamedKey::F1),
    ("f2", NamedKey::F2),
    ("f3", NamedKey::F3),
    ("f4", NamedKey::F4),
    ("f5", NamedKey::F5),
    ("f6", NamedKey::F6),
    ("f7", NamedKey::F7),
    ("f8", NamedKey::F8),
    ("f9", NamedKey::F9),
    ("f10", NamedKey::F10),
    ("f11", NamedKey::F11),
    ("f12", NamedKey::F12),
];

impl NamedKey {
    pub fn name(self) -> &'static str {
        NAMED_KEYS
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Char(ch) => write!(f, "{ch:?}"),
            KeyToken::Named(key) => f.write_str(key.name()),
        }
    }
}

fn lookup_named(name: &str) -> Option<NamedKey> {
    NAMED_KEYS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, key)| *key)
}

/// Resolves a client key identifier.
///
/// Named keys match case-insensitively (`"F5"`, `"BackSpace"`, `"Return"`).
/// Anything else must be exactly one character and keeps its case.
///
/// `<direction>_arrow` forms are accepted for the four arrows; any other
/// direction is an error rather than a silent fallback.
pub fn translate(identifier: &str) -> Result<KeyToken, KeyError> {
    if identifier.is_empty() {
        return Err(KeyError::Empty);
    }

    let lowered = identifier.to_ascii_lowercase();
    if let Some(direction) = lowered.strip_suffix("_arrow") {
        return match direction {
            "up" => Ok(NamedKey::Up.into()),
            "down" => Ok(NamedKey::Down.into()),
            "left" => Ok(NamedKey::Left.into()),
            "right" => Ok(NamedKey::Right.into()),
            _ => Err(KeyError::UnknownArrow(identifier.to_owned())),
        };
    }

    if let Some(key) = lookup_named(&lowered) {
        return Ok(key.into());
    }

    let mut chars = identifier.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(KeyToken::Char(ch)),
        _ => Err(KeyError::Unknown(identifier.to_owned())),
    }
}
