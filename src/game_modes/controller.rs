//! Per-match routing: whose turn is it, and who plays it
//!
//! The controller owns the board and the optional computer opponent. Each
//! frame it hands the input snapshot to the board if a human is acting, or
//! the board itself to the bot otherwise, then runs one physics tick.

use crate::ai::Bot;
use crate::config::PhysicsConfig;
use crate::game::{self, Board, Outcome, PhysicsEvents, Player, PointerInput};

/// Who sits at each side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

pub struct MatchController {
    pub board: Board,
    seats: [Seat; 2],
    bot: Option<Box<dyn Bot>>,
}

impl MatchController {
    /// Two humans sharing the mouse
    pub fn local(physics: &PhysicsConfig) -> Self {
        Self {
            board: Board::new(physics),
            seats: [Seat::Human, Seat::Human],
            bot: None,
        }
    }

    /// Human plays from the bottom, the bot from the top
    pub fn vs_computer(physics: &PhysicsConfig, bot: Box<dyn Bot>) -> Self {
        Self {
            board: Board::new(physics),
            seats: [Seat::Human, Seat::Computer],
            bot: Some(bot),
        }
    }

    pub fn seat(&self, player: Player) -> Seat {
        self.seats[player.index()]
    }

    pub fn bot_name(&self) -> Option<&str> {
        self.bot.as_ref().map(|bot| bot.name())
    }

    /// One frame: route input, then tick physics
    pub fn step(&mut self, input: &PointerInput) -> PhysicsEvents {
        match (self.seat(self.board.turn), self.bot.as_mut()) {
            (Seat::Computer, Some(bot)) => bot.act(&mut self.board),
            _ => self.board.handle_input(input),
        }

        let shooter = self.board.turn;
        let events = game::update_with_events(&mut self.board);
        if !events.any() {
            return events;
        }

        tracing::debug!(
            collisions = events.collisions,
            wall_bounces = events.wall_bounces,
            "contacts"
        );
        for kind in &events.pocketed {
            tracing::info!(?kind, by = shooter.label(), points = kind.points(), "pocketed");
        }
        if events.striker_pocketed {
            tracing::info!(by = shooter.label(), "striker pocketed");
        }
        if let Some(player) = events.turn_passed_to {
            tracing::info!(
                next = player.label(),
                scores = ?self.board.scores,
                "turn passed"
            );
        }
        if let Some(outcome) = events.match_over {
            tracing::info!(?outcome, scores = ?self.board.scores, "match over");
        }

        events
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.board.check_winner()
    }

    pub fn rematch(&mut self) {
        self.board.reset_game();
        if let Some(bot) = self.bot.as_mut() {
            bot.reset();
        }
    }
}
