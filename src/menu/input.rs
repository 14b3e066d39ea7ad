// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::io;
use std::time::Duration;

use super::state::{GameMode, MenuItem, MenuState};
use crate::config::KeyBindings;
use crate::game::input::key_matches;

/// Menu action result
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a game mode
    StartGame(GameMode),
    /// Open the rules screen
    ShowInstructions,
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(
    menu_state: &mut MenuState,
    bindings: &KeyBindings,
) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, key.code, bindings));
            }
        }
    }

    Ok(MenuAction::None)
}

/// Wait on the instructions screen; true once the player leaves it
pub fn handle_instructions_input(bindings: &KeyBindings) -> Result<bool, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(closes_instructions(key.code, bindings));
            }
            Event::Mouse(mouse) => {
                return Ok(mouse.kind == MouseEventKind::Down(MouseButton::Left));
            }
            _ => {}
        }
    }

    Ok(false)
}

fn closes_instructions(key_code: KeyCode, bindings: &KeyBindings) -> bool {
    key_code == KeyCode::Esc
        || key_code == KeyCode::Enter
        || key_code == KeyCode::Backspace
        || key_matches(key_code, &bindings.menu_back)
        || key_matches(key_code, &bindings.menu_select)
        || key_matches(key_code, &bindings.quit)
        || key_matches(key_code, &bindings.help)
}

fn is_up(key_code: KeyCode, bindings: &KeyBindings) -> bool {
    key_matches(key_code, &bindings.menu_up) || matches!(key_code, KeyCode::Char('k' | 'K'))
}

fn is_down(key_code: KeyCode, bindings: &KeyBindings) -> bool {
    key_matches(key_code, &bindings.menu_down) || matches!(key_code, KeyCode::Char('j' | 'J'))
}

fn is_select(key_code: KeyCode, bindings: &KeyBindings) -> bool {
    key_matches(key_code, &bindings.menu_select) || key_code == KeyCode::Char(' ')
}

fn handle_key_press(
    menu_state: &mut MenuState,
    key_code: KeyCode,
    bindings: &KeyBindings,
) -> MenuAction {
    // If in bot selection mode, handle that first
    if menu_state.in_bot_selection_mode {
        return handle_bot_selection_input(menu_state, key_code, bindings);
    }

    // Normal menu navigation
    if is_up(key_code, bindings) {
        menu_state.select_previous();
        MenuAction::None
    } else if is_down(key_code, bindings) {
        menu_state.select_next();
        MenuAction::None
    } else if is_select(key_code, bindings) {
        handle_menu_selection(menu_state)
    } else if key_matches(key_code, &bindings.quit) || key_code == KeyCode::Esc {
        MenuAction::Quit
    } else if key_matches(key_code, &bindings.help) {
        MenuAction::ShowInstructions
    } else {
        MenuAction::None
    }
}

fn handle_menu_selection(menu_state: &mut MenuState) -> MenuAction {
    match menu_state.selected_item() {
        MenuItem::LocalTwoPlayer => MenuAction::StartGame(GameMode::LocalTwoPlayer),
        MenuItem::VsComputer => {
            // Enter bot selection mode
            menu_state.start_bot_selection();
            MenuAction::None
        }
        MenuItem::Flappy => MenuAction::StartGame(GameMode::Flappy),
        MenuItem::Instructions => MenuAction::ShowInstructions,
        MenuItem::Quit => MenuAction::Quit,
    }
}

fn handle_bot_selection_input(
    menu_state: &mut MenuState,
    key_code: KeyCode,
    bindings: &KeyBindings,
) -> MenuAction {
    if is_up(key_code, bindings) {
        menu_state.select_previous_bot();
        MenuAction::None
    } else if is_down(key_code, bindings) {
        menu_state.select_next_bot();
        MenuAction::None
    } else if is_select(key_code, bindings) {
        let bot_type = menu_state.submit_bot_selection();
        MenuAction::StartGame(GameMode::SinglePlayerAI(bot_type))
    } else if key_matches(key_code, &bindings.menu_back) || key_code == KeyCode::Esc {
        menu_state.cancel_bot_selection();
        MenuAction::None
    } else {
        MenuAction::None
    }
}
