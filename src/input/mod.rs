pub mod keyboard;
pub mod keys;
pub mod mouse;
pub mod params;
#[cfg(test)]
pub mod recording;
pub mod system;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::ServerError;
pub use keys::KeyToken;
use params::Params;

/// `{ "action": ..., "data": {...} }`, shared by `/mouse` and `/keyboard`.
#[derive(Debug, Default, Deserialize)]
pub struct CommandEnvelope {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

impl CommandEnvelope {
    pub fn action(&self) -> Result<&str, ServerError> {
        match self.action.as_deref() {
            Some(action) if !action.is_empty() => Ok(action),
            _ => Err(ServerError::InvalidParameter("Missing 'action' field".into())),
        }
    }

    pub fn params(&self) -> Params<'_> {
        Params::new(self.data.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("input backend unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Failed(String),
}

pub type InjectResult<T> = Result<T, InjectError>;

/// Synthesizes pointer and keyboard events on the host.
///
/// Implementations talk to the OS directly; every call is synchronous and
/// runs to completion. Positive `dy` in [`scroll`](Self::scroll) means up.
pub trait InputInjector: Send + Sync {
    fn cursor_position(&self) -> InjectResult<(i32, i32)>;

    fn set_cursor_position(&self, x: i32, y: i32) -> InjectResult<()>;

    /// Reads the live position and writes back `position + delta`. No clamping
    /// to screen bounds is done here.
    fn move_cursor_by(&self, dx: i32, dy: i32) -> InjectResult<(i32, i32)> {
        let (x, y) = self.cursor_position()?;
        let target = (x.saturating_add(dx), y.saturating_add(dy));
        self.set_cursor_position(target.0, target.1)?;
        Ok(target)
    }

    fn press_button(&self, button: MouseButton) -> InjectResult<()>;

    fn release_button(&self, button: MouseButton) -> InjectResult<()>;

    fn click_button(&self, button: MouseButton, count: u32) -> InjectResult<()>;

    fn scroll(&self, dx: i32, dy: i32) -> InjectResult<()>;

    fn press_key(&self, key: KeyToken) -> InjectResult<()>;

    fn release_key(&self, key: KeyToken) -> InjectResult<()>;

    fn type_text(&self, text: &str) -> InjectResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::recording::{Call, RecordingInjector};

    #[test]
    fn move_cursor_by_reads_then_writes() {
        let injector = RecordingInjector::at(100, 200);
        let target = injector.move_cursor_by(10, -5).unwrap();

        assert_eq!(target, (110, 195));
        assert_eq!(
            injector.calls(),
            vec![Call::CursorPosition, Call::SetCursorPosition(110, 195)]
        );
    }

    #[test]
    fn move_cursor_by_passes_off_screen_targets_through() {
        let injector = RecordingInjector::at(5, 5);
        assert_eq!(injector.move_cursor_by(-50, 90_000).unwrap(), (-45, 90_005));
    }

    #[test]
    fn envelope_without_action_is_rejected() {
        let envelope: CommandEnvelope = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(matches!(
            envelope.action(),
            Err(ServerError::InvalidParameter(_))
        ));
    }

    #[test]
    fn envelope_accepts_null_or_missing_data() {
        let envelope: CommandEnvelope =
            serde_json::from_str(r#"{"action": "left_click", "data": null}"#).unwrap();
        assert_eq!(envelope.action().unwrap(), "left_click");
        assert!(envelope.data.is_none());

        let envelope: CommandEnvelope =
            serde_json::from_str(r#"{"action": "left_click"}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}
