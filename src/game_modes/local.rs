use std::io;

use ratatui::Terminal;

use crate::config::Config;

use super::common::run_match;
use super::controller::MatchController;

/// Run a two-player match on one mouse
pub fn run_game_local<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    tracing::info!(mode = "local", "match started");

    let mut controller = MatchController::local(&config.physics);
    run_match(terminal, config, &mut controller, ["Player 1", "Player 2"])
}
