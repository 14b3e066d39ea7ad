use std::io;
use std::time::Instant;

use ratatui::Terminal;

use crate::config::Config;
use crate::flappy::{self, FlappyGame};
use crate::game::{poll_input, InputAction};
use crate::highscore;
use crate::ui;

use super::common::{frame_duration, limit_frame_rate};

/// Run the side-scroller until the player quits back to the menu
pub fn run_flappy<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    let path = highscore::high_score_path(&config.flappy);
    let mut game = FlappyGame::new(highscore::load_high_score(&path));
    let budget = frame_duration(config.display.target_fps);

    tracing::info!(mode = "flappy", high_score = game.high_score, "game started");

    loop {
        let now = Instant::now();

        for action in poll_input(&config.keybindings)? {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::Confirm => game.flap(),
                _ => {}
            }
        }

        let events = flappy::update(&mut game);
        if let Some(score) = events.new_high_score {
            // A failed write costs the record, not the session
            if let Err(e) = highscore::save_high_score(&path, score) {
                tracing::warn!(path = %path.display(), error = %e, "failed to save high score");
            }
        }

        terminal.draw(|f| ui::render_flappy(f, &game))?;

        limit_frame_rate(now, budget);
    }
}
