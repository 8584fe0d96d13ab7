//! Keyboard dispatcher.
//!
//! Every key identifier in a request is translated before the first injection
//! call, so a bad name never leaves anything pressed. Chords press in order and
//! release in reverse. If the backend itself fails halfway through a chord, the
//! keys already down are released best-effort before the error is returned.

use tracing::{debug, warn};

use super::{
    keys::{translate, NamedKey},
    params::Params,
    InjectResult, InputInjector, KeyToken,
};
use crate::error::ServerError;

/// Modifier flags of a `key` action. Pressed as ctrl, alt, shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn keys(self) -> impl Iterator<Item = KeyToken> {
        [
            (self.ctrl, NamedKey::Ctrl),
            (self.alt, NamedKey::Alt),
            (self.shift, NamedKey::Shift),
        ]
        .into_iter()
        .filter_map(|(active, key)| active.then_some(KeyToken::Named(key)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardCommand {
    Type { text: String },
    Key { key: KeyToken, modifiers: Modifiers },
    KeyPress { key: KeyToken },
    Combination { keys: Vec<KeyToken> },
    HoldStart { key: KeyToken },
    HoldEnd { key: KeyToken },
}

impl KeyboardCommand {
    pub fn parse(action: &str, params: &Params<'_>) -> Result<Self, ServerError> {
        let command = match action {
            "type" => KeyboardCommand::Type {
                text: params.text("text")?.to_owned(),
            },
            "key" => {
                let key = params.required_text("key")?;
                let modifiers = Modifiers {
                    ctrl: params.flag("ctrl")?,
                    alt: params.flag("alt")?,
                    shift: params.flag("shift")?,
                };
                KeyboardCommand::Key {
                    key: translate(key)?,
                    modifiers,
                }
            }
            "key_press" => KeyboardCommand::KeyPress {
                key: translate(params.required_text("key")?)?,
            },
            "key_combination" => KeyboardCommand::Combination {
                keys: params
                    .required_list("keys")?
                    .into_iter()
                    .map(translate)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            "key_hold_start" => KeyboardCommand::HoldStart {
                key: translate(params.required_text("key")?)?,
            },
            "key_hold_end" => KeyboardCommand::HoldEnd {
                key: translate(params.required_text("key")?)?,
            },
            other => {
                return Err(ServerError::UnknownAction {
                    device: "keyboard",
                    action: other.to_owned(),
                })
            }
        };
        Ok(command)
    }

    pub fn execute(&self, injector: &dyn InputInjector) -> InjectResult<()> {
        match self {
            KeyboardCommand::Type { text } if text.is_empty() => Ok(()),
            KeyboardCommand::Type { text } => injector.type_text(text),
            KeyboardCommand::Key { key, modifiers } => {
                let mut sequence: Vec<KeyToken> = modifiers.keys().collect();
                sequence.push(*key);
                chord(injector, &sequence)
            }
            KeyboardCommand::KeyPress { key } => chord(injector, &[*key]),
            KeyboardCommand::Combination { keys } => chord(injector, keys),
            KeyboardCommand::HoldStart { key } => injector.press_key(*key),
            KeyboardCommand::HoldEnd { key } => injector.release_key(*key),
        }
    }
}

/// Presses `keys` in order, then releases them in reverse.
fn chord(injector: &dyn InputInjector, keys: &[KeyToken]) -> InjectResult<()> {
    for (pressed, key) in keys.iter().enumerate() {
        if let Err(err) = injector.press_key(*key) {
            warn!(key = %key, error = %err, "key press failed, releasing held keys");
            release_all(injector, &keys[..pressed]).ok();
            return Err(err);
        }
    }
    debug!(keys = keys.len(), "chord pressed");
    release_all(injector, keys)
}

/// Releases in reverse order. Keeps going after a failure and reports the first.
fn release_all(injector: &dyn InputInjector, keys: &[KeyToken]) -> InjectResult<()> {
    let mut first_err = None;
    for key in keys.iter().rev() {
        if let Err(err) = injector.release_key(*key) {
            warn!(key = %key, error = %err, "key release failed");
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}
