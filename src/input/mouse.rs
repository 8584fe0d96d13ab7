use tracing::debug;

use super::{params::Params, InjectResult, InputInjector, MouseButton};
use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseCommand {
    Move { dx: i32, dy: i32 },
    LeftClick,
    RightClick,
    DoubleClick,
    ScrollUp,
    ScrollDown,
    DragStart,
    DragEnd,
}

impl MouseCommand {
    pub fn parse(action: &str, params: &Params<'_>) -> Result<Self, ServerError> {
        let command = match action {
            "move" => MouseCommand::Move {
                dx: params.int_or_zero("dx")?,
                dy: params.int_or_zero("dy")?,
            },
            "left_click" => MouseCommand::LeftClick,
            "right_click" => MouseCommand::RightClick,
            "double_click" => MouseCommand::DoubleClick,
            "scroll_up" => MouseCommand::ScrollUp,
            "scroll_down" => MouseCommand::ScrollDown,
            "drag_start" => MouseCommand::DragStart,
            "drag_end" => MouseCommand::DragEnd,
            other => {
                return Err(ServerError::UnknownAction {
                    device: "mouse",
                    action: other.to_owned(),
                })
            }
        };
        Ok(command)
    }

    pub fn execute(self, injector: &dyn InputInjector) -> InjectResult<()> {
        match self {
            MouseCommand::Move { dx, dy } => {
                let (x, y) = injector.move_cursor_by(dx, dy)?;
                debug!(dx, dy, x, y, "cursor moved");
                Ok(())
            }
            MouseCommand::LeftClick => injector.click_button(MouseButton::Left, 1),
            MouseCommand::RightClick => injector.click_button(MouseButton::Right, 1),
            MouseCommand::DoubleClick => injector.click_button(MouseButton::Left, 2),
            MouseCommand::ScrollUp => injector.scroll(0, 1),
            MouseCommand::ScrollDown => injector.scroll(0, -1),
            MouseCommand::DragStart => injector.press_button(MouseButton::Left),
            MouseCommand::DragEnd => injector.release_button(MouseButton::Left),
        }
    }
}
