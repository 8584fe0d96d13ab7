use std::sync::Mutex;

use super::{InjectError, InjectResult, InputInjector, KeyToken, MouseButton};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CursorPosition,
    SetCursorPosition(i32, i32),
    PressButton(MouseButton),
    ReleaseButton(MouseButton),
    ClickButton(MouseButton, u32),
    Scroll(i32, i32),
    PressKey(KeyToken),
    ReleaseKey(KeyToken),
    TypeText(String),
}

#[derive(Default)]
pub struct RecordingInjector {
    calls: Mutex<Vec<Call>>,
    position: Mutex<(i32, i32)>,
    fail_on: Option<usize>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(x: i32, y: i32) -> Self {
        Self {
            position: Mutex::new((x, y)),
            ..Self::default()
        }
    }

    /// The `n`-th recorded call (1-based) fails after being recorded.
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> InjectResult<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        if self.fail_on == Some(calls.len()) {
            return Err(InjectError::Failed(format!("call #{} refused", calls.len())));
        }
        Ok(())
    }
}

impl InputInjector for RecordingInjector {
    fn cursor_position(&self) -> InjectResult<(i32, i32)> {
        self.record(Call::CursorPosition)?;
        Ok(*self.position.lock().unwrap())
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> InjectResult<()> {
        self.record(Call::SetCursorPosition(x, y))?;
        *self.position.lock().unwrap() = (x, y);
        Ok(())
    }

    fn press_button(&self, button: MouseButton) -> InjectResult<()> {
        self.record(Call::PressButton(button))
    }

    fn release_button(&self, button: MouseButton) -> InjectResult<()> {
        self.record(Call::ReleaseButton(button))
    }

    fn click_button(&self, button: MouseButton, count: u32) -> InjectResult<()> {
        self.record(Call::ClickButton(button, count))
    }

    fn scroll(&self, dx: i32, dy: i32) -> InjectResult<()> {
        self.record(Call::Scroll(dx, dy))
    }

    fn press_key(&self, key: KeyToken) -> InjectResult<()> {
        self.record(Call::PressKey(key))
    }

    fn release_key(&self, key: KeyToken) -> InjectResult<()> {
        self.record(Call::ReleaseKey(key))
    }

    fn type_text(&self, text: &str) -> InjectResult<()> {
        self.record(Call::TypeText(text.to_owned()))
    }
}
