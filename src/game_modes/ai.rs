use std::io;

use ratatui::Terminal;

use crate::ai;
use crate::config::Config;

use super::common::run_match;
use super::controller::MatchController;

/// Run single-player game against the computer (it plays from the top)
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    bot_type: ai::BotType,
) -> Result<(), io::Error> {
    // Create bot instance using factory
    let bot = ai::create_bot(bot_type, Some(config.ai.think_frames));
    let mut controller = MatchController::vs_computer(&config.physics, bot);
    tracing::info!(
        mode = "vs_computer",
        bot = controller.bot_name().unwrap_or("none"),
        "match started"
    );

    run_match(terminal, config, &mut controller, ["Player 1", "Computer"])
}
