//! Common utilities shared across all game modes
//!
//! Frame pacing plus the match loop that both the two-player and the
//! vs-computer modes drive; they differ only in how the controller is built.

use std::io;
use std::time::{Duration, Instant};

use glam::Vec2;
use ratatui::{layout::Rect, Terminal};

use crate::config::Config;
use crate::game::{poll_input, InputAction, Outcome, Player, Pointer, TurnPhase};
use crate::menu;
use crate::ui::{self, MatchView, OverlayMessage};

use super::controller::{MatchController, Seat};

/// Time budget of one frame at `target_fps` (at least 1 FPS)
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.max(1))
}

/// Apply frame rate limiting to maintain consistent game speed.
///
/// This function should be called at the end of each game loop iteration.
/// It sleeps for the remaining time if the frame finished early, ensuring
/// a consistent frame rate across all game modes.
///
/// # Arguments
/// * `frame_start` - The `Instant` when the frame began (typically from `Instant::now()`)
/// * `budget` - Target length of one frame, see [`frame_duration`]
pub fn limit_frame_rate(frame_start: Instant, budget: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < budget {
        std::thread::sleep(budget - elapsed);
    }
}

/// Result screen for a finished match
pub fn result_message(outcome: Outcome, controller: &MatchController) -> OverlayMessage {
    let board = &controller.board;
    let lines = |headline: &str| {
        vec![
            headline.to_string(),
            "".to_string(),
            format!(
                "Final Score: {} - {}",
                board.score(Player::One),
                board.score(Player::Two)
            ),
            "".to_string(),
            "R to Rematch  |  Q for Menu".to_string(),
        ]
    };

    let message = match outcome {
        Outcome::Winner(player) if controller.seat(player) == Seat::Computer => {
            OverlayMessage::warning(lines("Computer Wins!"))
        }
        Outcome::Winner(Player::One) => OverlayMessage::success(lines("Player 1 Wins!")),
        Outcome::Winner(Player::Two) => OverlayMessage::success(lines("Player 2 Wins!")),
        Outcome::Tie => OverlayMessage::info(lines("It's a Tie!")),
    };

    message.with_title("Match Over".to_string())
}

/// Run one match until the player quits back to the menu.
///
/// The help key swaps in the instructions screen; the board stays frozen
/// until it is dismissed.
pub fn run_match<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    controller: &mut MatchController,
    names: [&str; 2],
) -> Result<(), io::Error> {
    let budget = frame_duration(config.display.target_fps);
    let home = controller.board.baseline();
    let mut pointer = Pointer::new(
        Vec2::new(home.center_x(), home.y),
        config.physics.pointer_step,
    );
    let mut showing_help = false;

    loop {
        let now = Instant::now();

        let size = terminal.size()?;
        let layout = ui::board_layout(Rect::new(0, 0, size.width, size.height));

        let actions = poll_input(&config.keybindings)?;

        if showing_help {
            let dismissed = actions.iter().any(|action| {
                matches!(
                    action,
                    InputAction::Help | InputAction::Quit | InputAction::Confirm
                )
            });
            if dismissed {
                showing_help = false;
            }
            terminal.draw(menu::render_instructions)?;
            limit_frame_rate(now, budget);
            continue;
        }

        for action in &actions {
            match action {
                InputAction::Quit => {
                    tracing::info!(scores = ?controller.board.scores, "left match");
                    return Ok(());
                }
                InputAction::Help => showing_help = true,
                InputAction::Rematch => {
                    if controller.board.phase == TurnPhase::MatchOver {
                        controller.rematch();
                        tracing::info!("rematch");
                    }
                }
                _ => {}
            }
        }

        let input = pointer.snapshot(&actions, |column, row| layout.to_virtual(column, row));
        if !showing_help {
            controller.step(&input);
        }

        let overlay = controller
            .outcome()
            .filter(|_| controller.board.phase == TurnPhase::MatchOver)
            .map(|outcome| result_message(outcome, controller));
        let view = MatchView {
            colors: &config.display,
            names,
            human_turn: controller.seat(controller.board.turn) == Seat::Human,
            overlay: overlay.as_ref(),
        };

        terminal.draw(|f| ui::render(f, &controller.board, &view))?;

        // Frame rate limiting
        limit_frame_rate(now, budget);
    }
}
