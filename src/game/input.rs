use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use glam::Vec2;
use std::time::Duration;

use crate::config::KeyBindings;

use super::state::PointerInput;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    Quit,
    Rematch,
    Help,
    /// Click or confirm key
    Confirm,
    /// Mouse reported at a terminal cell
    PointerAt { column: u16, row: u16 },
    /// Keyboard pointer movement, in steps
    Nudge { dx: i8, dy: i8 },
}

/// Parse a key binding string from the config file.
///
/// Accepts named keys ("Up", "Enter", "Space", ...) or a single character,
/// matched case-insensitively.
pub fn parse_key(binding: &str) -> Option<KeyCode> {
    let code = match binding.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Does a pressed key match a configured binding?
pub fn key_matches(code: KeyCode, binding: &str) -> bool {
    let pressed = match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    parse_key(binding) == Some(pressed)
}

fn key_action(code: KeyCode, bindings: &KeyBindings) -> Option<InputAction> {
    if key_matches(code, &bindings.quit) || code == KeyCode::Esc {
        Some(InputAction::Quit)
    } else if key_matches(code, &bindings.rematch) {
        Some(InputAction::Rematch)
    } else if key_matches(code, &bindings.help) {
        Some(InputAction::Help)
    } else if key_matches(code, &bindings.confirm) || code == KeyCode::Enter {
        Some(InputAction::Confirm)
    } else if key_matches(code, &bindings.pointer_left) {
        Some(InputAction::Nudge { dx: -1, dy: 0 })
    } else if key_matches(code, &bindings.pointer_right) {
        Some(InputAction::Nudge { dx: 1, dy: 0 })
    } else if key_matches(code, &bindings.pointer_up) {
        Some(InputAction::Nudge { dx: 0, dy: -1 })
    } else if key_matches(code, &bindings.pointer_down) {
        Some(InputAction::Nudge { dx: 0, dy: 1 })
    } else {
        None
    }
}

/// Poll for input events and return actions.
/// Drains everything pending so the frame sees the latest pointer sample.
pub fn poll_input(bindings: &KeyBindings) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = key_action(key.code, bindings) {
                    actions.push(action);
                }
            }
            Event::Mouse(mouse) => {
                let at = InputAction::PointerAt {
                    column: mouse.column,
                    row: mouse.row,
                };
                match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => actions.push(at),
                    MouseEventKind::Down(MouseButton::Left) => {
                        actions.push(at);
                        actions.push(InputAction::Confirm);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    Ok(actions)
}

/// The pointer as the board sees it, fed by mouse and keyboard alike
#[derive(Debug, Clone)]
pub struct Pointer {
    pub pos: Vec2,
    step: f32,
}

impl Pointer {
    pub fn new(pos: Vec2, step: f32) -> Self {
        Self { pos, step }
    }

    /// Fold this frame's actions into a single input snapshot.
    ///
    /// `to_board` maps a terminal cell into board coordinates.
    pub fn snapshot<F>(&mut self, actions: &[InputAction], to_board: F) -> PointerInput
    where
        F: Fn(u16, u16) -> Vec2,
    {
        let mut confirm = false;

        for action in actions {
            match *action {
                InputAction::PointerAt { column, row } => self.pos = to_board(column, row),
                InputAction::Nudge { dx, dy } => {
                    self.pos += Vec2::new(dx as f32, dy as f32) * self.step;
                }
                InputAction::Confirm => confirm = true,
                InputAction::Quit | InputAction::Rematch | InputAction::Help => {}
            }
        }

        PointerInput {
            pointer: self.pos,
            confirm,
        }
    }
}
