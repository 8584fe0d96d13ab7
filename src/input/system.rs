use std::sync::{Mutex, MutexGuard};

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use tracing::debug;

use super::{
    keys::NamedKey, InjectError, InjectResult, InputInjector, KeyToken, MouseButton,
};

pub struct EnigoInjector {
    enigo: Mutex<Enigo>,
}

impl EnigoInjector {
    /// Connects to the display server / input subsystem. Fails when there is
    /// no session to inject into or the process lacks permission.
    pub fn new() -> InjectResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectError::Unavailable(e.to_string()))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    fn lock(&self) -> InjectResult<MutexGuard<'_, Enigo>> {
        self.enigo
            .lock()
            .map_err(|e| InjectError::Failed(format!("input backend lock poisoned: {e}")))
    }
}

fn backend(err: enigo::InputError) -> InjectError {
    InjectError::Failed(err.to_string())
}

fn convert_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
    }
}

fn convert_key(key: KeyToken) -> Key {
    match key {
        KeyToken::Char(ch) => Key::Unicode(ch),
        KeyToken::Named(named) => match named {
            NamedKey::Enter => Key::Return,
            NamedKey::Space => Key::Space,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Delete => Key::Delete,
            NamedKey::Tab => Key::Tab,
            NamedKey::Escape => Key::Escape,
            NamedKey::Shift => Key::Shift,
            NamedKey::Ctrl => Key::Control,
            NamedKey::Alt => Key::Alt,
            NamedKey::Cmd => Key::Meta,
            NamedKey::Up => Key::UpArrow,
            NamedKey::Down => Key::DownArrow,
            NamedKey::Left => Key::LeftArrow,
            NamedKey::Right => Key::RightArrow,
            NamedKey::Home => Key::Home,
            NamedKey::End => Key::End,
            NamedKey::PageUp => Key::PageUp,
            NamedKey::PageDown => Key::PageDown,
            NamedKey::CapsLock => Key::CapsLock,
            NamedKey::F1 => Key::F1,
            NamedKey::F2 => Key::F2,
            NamedKey::F3 => Key::F3,
            NamedKey::F4 => Key::F4,
            NamedKey::F5 => Key::F5,
            NamedKey::F6 => Key::F6,
            NamedKey::F7 => Key::F7,
            NamedKey::F8 => Key::F8,
            NamedKey::F9 => Key::F9,
            NamedKey::F10 => Key::F10,
            NamedKey::F11 => Key::F11,
            NamedKey::F12 => Key::F12,
        },
    }
}

impl InputInjector for EnigoInjector {
    fn cursor_position(&self) -> InjectResult<(i32, i32)> {
        self.lock()?.location().map_err(backend)
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> InjectResult<()> {
        self.lock()?
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(backend)
    }

    fn press_button(&self, button: MouseButton) -> InjectResult<()> {
        self.lock()?
            .button(convert_button(button), Direction::Press)
            .map_err(backend)
    }

    fn release_button(&self, button: MouseButton) -> InjectResult<()> {
        self.lock()?
            .button(convert_button(button), Direction::Release)
            .map_err(backend)
    }

    fn click_button(&self, button: MouseButton, count: u32) -> InjectResult<()> {
        let mut enigo = self.lock()?;
        for _ in 0..count {
            enigo
                .button(convert_button(button), Direction::Click)
                .map_err(backend)?;
        }
        Ok(())
    }

    fn scroll(&self, dx: i32, dy: i32) -> InjectResult<()> {
        let mut enigo = self.lock()?;
        // enigo scrolls down / right for positive lengths.
        if dy != 0 {
            enigo.scroll(-dy, Axis::Vertical).map_err(backend)?;
        }
        if dx != 0 {
            enigo.scroll(dx, Axis::Horizontal).map_err(backend)?;
        }
        Ok(())
    }

    fn press_key(&self, key: KeyToken) -> InjectResult<()> {
        debug!(key = %key, "press");
        self.lock()?
            .key(convert_key(key), Direction::Press)
            .map_err(backend)
    }

    fn release_key(&self, key: KeyToken) -> InjectResult<()> {
        debug!(key = %key, "release");
        self.lock()?
            .key(convert_key(key), Direction::Release)
            .map_err(backend)
    }

    fn type_text(&self, text: &str) -> InjectResult<()> {
        self.lock()?.text(text).map_err(backend)
    }
}
