// Menu state management and game mode definitions

use crate::ai::BotType;

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    /// Currently in the main menu
    Menu,
    /// Rules and controls screen
    Instructions,
    /// Currently playing a game
    Game(GameMode),
    /// Graceful shutdown
    Exiting,
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameMode {
    /// Two players taking turns with one mouse
    LocalTwoPlayer,
    /// Player one against the computer
    SinglePlayerAI(BotType),
    /// The side-scroller
    Flappy,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    LocalTwoPlayer,
    VsComputer,
    Flappy,
    Instructions,
    Quit,
}

impl MenuItem {
    /// Get display text for menu item
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::LocalTwoPlayer => "Play vs Friend",
            MenuItem::VsComputer => "Play vs Computer",
            MenuItem::Flappy => "Flappy Bird",
            MenuItem::Instructions => "Instructions",
            MenuItem::Quit => "Quit",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        vec![
            MenuItem::LocalTwoPlayer,
            MenuItem::VsComputer,
            MenuItem::Flappy,
            MenuItem::Instructions,
            MenuItem::Quit,
        ]
    }
}

/// Menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
    /// Whether the difficulty picker is open
    pub in_bot_selection_mode: bool,
    /// Highlighted difficulty in the picker
    pub selected_bot_index: usize,
    /// Difficulties offered in the picker
    pub bot_types: Vec<BotType>,
}

impl MenuState {
    /// Menu whose difficulty picker starts on `bot`
    pub fn with_default_bot(bot: BotType) -> Self {
        let bot_types = BotType::all();
        let selected_bot_index = bot_types.iter().position(|b| *b == bot).unwrap_or(0);
        Self {
            selected_index: 0,
            items: MenuItem::all(),
            in_bot_selection_mode: false,
            selected_bot_index,
            bot_types,
        }
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Open the difficulty picker
    pub fn start_bot_selection(&mut self) {
        self.in_bot_selection_mode = true;
    }

    /// Close the picker without starting a game
    pub fn cancel_bot_selection(&mut self) {
        self.in_bot_selection_mode = false;
    }

    /// Close the picker and return the chosen difficulty
    pub fn submit_bot_selection(&mut self) -> BotType {
        self.in_bot_selection_mode = false;
        self.selected_bot()
    }

    pub fn selected_bot(&self) -> BotType {
        self.bot_types[self.selected_bot_index]
    }

    pub fn select_previous_bot(&mut self) {
        if self.selected_bot_index > 0 {
            self.selected_bot_index -= 1;
        } else {
            self.selected_bot_index = self.bot_types.len() - 1;
        }
    }

    pub fn select_next_bot(&mut self) {
        self.selected_bot_index = (self.selected_bot_index + 1) % self.bot_types.len();
    }
}
